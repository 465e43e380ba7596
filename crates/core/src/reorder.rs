//! Section reordering.
//!
//! Generated articles do not always list their sections in the order the
//! publication wants. The reorderer cuts the body into a lead and one span per
//! `<h3>` section and sorts the spans by a priority list of title substrings.

use crate::markup::{SECTION_HEADING, contains_ignore_case, text_content};

/// One `<h3>` section: its heading text and its markup up to the next section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan<'a> {
    pub title: String,
    pub markup: &'a str,
}

/// A body cut at its section headings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLayout<'a> {
    /// Text before the first section heading.
    pub lead: &'a str,
    pub sections: Vec<SectionSpan<'a>>,
}

impl SectionLayout<'_> {
    pub fn titles(&self) -> Vec<String> {
        self.sections.iter().map(|section| section.title.clone()).collect()
    }
}

/// Cut `body` into its lead and section spans.
pub fn split_sections(body: &str) -> SectionLayout<'_> {
    let headings: Vec<_> = SECTION_HEADING.captures_iter(body).collect();

    let Some(first) = headings.first().and_then(|caps| caps.get(0)) else {
        return SectionLayout { lead: body, sections: Vec::new() };
    };

    let starts: Vec<usize> = headings
        .iter()
        .filter_map(|caps| caps.get(0).map(|m| m.start()))
        .collect();

    let sections = headings
        .iter()
        .enumerate()
        .filter_map(|(idx, caps)| {
            let heading = caps.get(0)?;
            let end = starts.get(idx + 1).copied().unwrap_or(body.len());
            Some(SectionSpan {
                title: text_content(caps.get(1).map(|m| m.as_str()).unwrap_or("")),
                markup: &body[heading.start()..end],
            })
        })
        .collect();

    SectionLayout { lead: &body[..first.start()], sections }
}

/// Index of the first priority entry contained in `title`.
pub fn section_rank<S: AsRef<str>>(title: &str, priority: &[S]) -> Option<usize> {
    priority.iter().position(|entry| {
        let entry = entry.as_ref().trim();
        !entry.is_empty() && contains_ignore_case(title, entry)
    })
}

/// Reorder the sections of `body` by `priority`.
///
/// Matched sections come first in priority order, sections sharing a rank keep
/// their relative order, and unmatched sections follow in their original
/// order. The lead always stays in front.
pub fn reorder_sections<S: AsRef<str>>(body: &str, priority: &[S]) -> String {
    let layout = split_sections(body);
    if layout.sections.len() < 2 {
        return body.to_string();
    }

    let mut ranked: Vec<(Option<usize>, &SectionSpan<'_>)> = layout
        .sections
        .iter()
        .map(|section| (section_rank(&section.title, priority), section))
        .collect();

    ranked.sort_by_key(|(rank, _)| rank.unwrap_or(usize::MAX));

    let mut out = String::with_capacity(body.len());
    out.push_str(layout.lead);
    for (_, section) in ranked {
        out.push_str(section.markup);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = concat!(
        "<p>Lead</p>",
        "<h3>Другие источники</h3><h4>B</h4><p>b</p>",
        "<h3>Misc</h3><p>m</p>",
        "<h3>Официальные источники</h3><h4>A</h4><p>a</p>",
    );

    const PRIORITY: [&str; 2] = ["официальные", "другие"];

    #[test]
    fn test_split_sections() {
        let layout = split_sections(BODY);
        assert_eq!(layout.lead, "<p>Lead</p>");
        assert_eq!(layout.titles(), vec!["Другие источники", "Misc", "Официальные источники"]);
        assert_eq!(layout.sections[1].markup, "<h3>Misc</h3><p>m</p>");
    }

    #[test]
    fn test_reorder_by_priority() {
        let reordered = reorder_sections(BODY, &PRIORITY);
        let expected = concat!(
            "<p>Lead</p>",
            "<h3>Официальные источники</h3><h4>A</h4><p>a</p>",
            "<h3>Другие источники</h3><h4>B</h4><p>b</p>",
            "<h3>Misc</h3><p>m</p>",
        );
        assert_eq!(reordered, expected);
    }

    #[test]
    fn test_reorder_is_idempotent() {
        let once = reorder_sections(BODY, &PRIORITY);
        let twice = reorder_sections(&once, &PRIORITY);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_first_priority_entry_wins() {
        assert_eq!(section_rank("Official and other news", &["other", "official"]), Some(0));
        assert_eq!(section_rank("Official news", &["other", "official"]), Some(1));
        assert_eq!(section_rank("Weather", &["other", "official"]), None);
        assert_eq!(section_rank("Anything", &[""]), None);
    }

    #[test]
    fn test_same_rank_keeps_appearance_order() {
        let body = "<h3>Other B</h3>b<h3>Official</h3>o<h3>Other A</h3>a";
        let reordered = reorder_sections(body, &["official", "other"]);
        assert_eq!(reordered, "<h3>Official</h3>o<h3>Other B</h3>b<h3>Other A</h3>a");
    }

    #[test]
    fn test_without_sections_body_is_unchanged() {
        let body = "<p>No sections</p><h4>x</h4>";
        assert_eq!(reorder_sections(body, &PRIORITY), body);
    }
}
