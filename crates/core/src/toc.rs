//! Navigation fragment.
//!
//! Every block gets one entry with two links: one to its in-document anchor
//! and, when the block names a source, one to that source. The anchor link
//! alone is not enough because the publishing host may strip `id`
//! attributes. Entries are grouped by category in order of first appearance.
//!
//! Only tags from the host allow-list are emitted: `h3`, `p`, `strong`, `ul`,
//! `li`, `a` and `br`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::{NavigationStyle, RestructureConfig};
use crate::extract::Block;
use crate::markup::escape_html;

/// Characters left as-is in an anchor fragment.
const ANCHOR_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Blocks that share a category, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationGroup<'a> {
    pub category: &'a str,
    pub blocks: Vec<&'a Block>,
}

/// Group blocks by category, ordering groups by first appearance.
pub fn group_by_category(blocks: &[Block]) -> Vec<NavigationGroup<'_>> {
    let mut groups: Vec<NavigationGroup<'_>> = Vec::new();

    for block in blocks {
        match groups.iter_mut().find(|group| group.category == block.category()) {
            Some(group) => group.blocks.push(block),
            None => groups.push(NavigationGroup { category: block.category(), blocks: vec![block] }),
        }
    }

    groups
}

/// In-document link target for an anchor.
pub fn anchor_href(anchor_id: &str) -> String {
    format!("#{}", utf8_percent_encode(anchor_id, ANCHOR_ENCODE_SET))
}

/// Render the navigation fragment for `blocks`.
///
/// Returns an empty string when TOC rendering is disabled or there are no
/// blocks.
pub fn build_toc(blocks: &[Block], config: &RestructureConfig) -> String {
    if !config.enable_toc || blocks.is_empty() {
        return String::new();
    }

    let groups = group_by_category(blocks);
    let labelled = blocks.iter().any(Block::has_category);
    let heading = format!("<h3>{}</h3>", escape_html(&config.navigation_title));

    let body = match config.navigation_style {
        NavigationStyle::List => render_list(&groups, labelled, config),
        NavigationStyle::Paragraph => render_paragraph(&groups, labelled, config),
    };

    heading + &body
}

fn render_list(groups: &[NavigationGroup<'_>], labelled: bool, config: &RestructureConfig) -> String {
    let mut out = String::from("<p></p>");

    for group in groups {
        if labelled {
            out.push_str(&format!("<p><strong>{}</strong></p>", escape_html(group.category)));
        }
        out.push_str("<ul>");
        for block in &group.blocks {
            out.push_str("<li>");
            out.push_str(&render_entry(block, config));
            out.push_str("</li>");
        }
        out.push_str("</ul>");
    }

    out.push_str("<p></p>");
    out
}

fn render_paragraph(groups: &[NavigationGroup<'_>], labelled: bool, config: &RestructureConfig) -> String {
    let mut lines = Vec::new();

    for group in groups {
        if labelled {
            lines.push(format!("<strong>{}</strong>", escape_html(group.category)));
        }
        for block in &group.blocks {
            lines.push(format!("• {}", render_entry(block, config)));
        }
    }

    format!("<p>{}</p><br>", lines.join("<br>"))
}

fn render_entry(block: &Block, config: &RestructureConfig) -> String {
    let internal = format!(
        "<a href=\"{}\">{}</a>",
        anchor_href(&block.anchor_id),
        escape_html(&block.title)
    );

    if block.has_source() {
        format!(
            "{} — <a href=\"{}\">{}</a>",
            internal,
            block.source_url.replace('"', "&quot;"),
            escape_html(&config.source_label)
        )
    } else {
        internal
    }
}
