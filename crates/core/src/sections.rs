//! Section assembly.
//!
//! Puts the prefix and the blocks back together, either in their original
//! order or regrouped under an official-sources heading and an other-sources
//! heading.

use crate::classify::is_official_source;
use crate::config::RestructureConfig;
use crate::extract::Block;
use crate::markup::{SECTION_HEADING, contains_ignore_case, escape_html, text_content};

/// Assembled body plus how the blocks were distributed.
///
/// `markup` is the (possibly stripped) prefix followed by the block area;
/// `prefix_len` marks the byte offset where the block area starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembled {
    /// Prefix and block area, concatenated.
    pub markup: String,
    /// Length of the prefix at the start of `markup`.
    pub prefix_len: usize,
    /// Blocks placed under the official heading (zero when not splitting).
    pub official_count: usize,
    /// Blocks placed anywhere else.
    pub other_count: usize,
}

impl Assembled {
    /// The prefix part of the assembled body.
    pub fn prefix(&self) -> &str {
        &self.markup[..self.prefix_len]
    }

    /// Everything from the first section or item heading on.
    pub fn block_area(&self) -> &str {
        &self.markup[self.prefix_len..]
    }
}

/// Blocks split by source classification, each side in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<'a> {
    /// Blocks whose source origin is listed as official.
    pub official: Vec<&'a Block>,
    /// Everything else, including blocks without a source.
    pub other: Vec<&'a Block>,
}

/// Split blocks into official and other sources.
pub fn partition_blocks<'a, S: AsRef<str>>(blocks: &'a [Block], official_origins: &[S]) -> Partition<'a> {
    let (official, other): (Vec<&Block>, Vec<&Block>) = blocks
        .iter()
        .partition(|block| is_official_source(&block.source_url, official_origins));
    Partition { official, other }
}

/// Remove section headings whose text contains one of `strip_titles`.
pub fn strip_section_headings<S: AsRef<str>>(markup: &str, strip_titles: &[S]) -> String {
    let needles: Vec<&str> = strip_titles
        .iter()
        .map(|title| title.as_ref().trim())
        .filter(|title| !title.is_empty())
        .collect();

    if needles.is_empty() {
        return markup.to_string();
    }

    SECTION_HEADING
        .replace_all(markup, |caps: &regex::Captures| {
            let heading = caps.get(0).map(|m| m.as_str()).unwrap_or("");
            let text = text_content(caps.get(1).map(|m| m.as_str()).unwrap_or(""));
            if needles.iter().any(|needle| contains_ignore_case(&text, needle)) {
                String::new()
            } else {
                heading.to_string()
            }
        })
        .into_owned()
}

/// Section heading markup for a synthesized section.
pub fn section_heading(title: &str) -> String {
    format!("<h3>{}</h3>", escape_html(title))
}

/// Join the prefix and blocks into one body.
///
/// # Example
///
/// ```rust
/// use digest_core::{RestructureConfig, assemble_sections, extract_blocks};
///
/// let html = r#"<p>Intro</p><h4><a href="https://t.me/officialchan/1">One</a></h4>"#;
/// let extracted = extract_blocks(html);
/// let config = RestructureConfig::builder().official_origins(["officialchan"]).build();
///
/// let assembled = assemble_sections(extracted.prefix, &extracted.blocks, &config);
/// assert_eq!(assembled.prefix(), "<p>Intro</p>");
/// assert!(assembled.block_area().starts_with("<h3>Официальные источники</h3>"));
/// assert_eq!(assembled.official_count, 1);
/// ```
pub fn assemble_sections(prefix: &str, blocks: &[Block], config: &RestructureConfig) -> Assembled {
    let prefix = if config.strip_original_sections {
        strip_section_headings(prefix, &config.strip_titles)
    } else {
        prefix.to_string()
    };

    let capacity = prefix.len() + blocks.iter().map(|b| b.markup.len()).sum::<usize>() + 128;
    let mut markup = String::with_capacity(capacity);
    markup.push_str(&prefix);
    let prefix_len = markup.len();

    if !config.enable_section_split {
        for block in blocks {
            markup.push_str(&block.markup);
        }
        return Assembled { markup, prefix_len, official_count: 0, other_count: blocks.len() };
    }

    let partition = partition_blocks(blocks, &config.official_origins);

    for (title, group) in [
        (&config.official_section_title, &partition.official),
        (&config.other_section_title, &partition.other),
    ] {
        if group.is_empty() {
            continue;
        }
        markup.push_str(&section_heading(title));
        for block in group {
            markup.push_str(&block.markup);
        }
    }

    Assembled {
        markup,
        prefix_len,
        official_count: partition.official.len(),
        other_count: partition.other.len(),
    }
}
