//! Per-block anchors.
//!
//! The anchor of a block is its title with spaces turned into hyphens, the
//! same rule the publishing host applies when it derives heading ids on its
//! own, so navigation links keep resolving even if the host drops the `id`
//! attribute written here. Identical titles give identical anchors.

use tracing::warn;

use crate::extract::Block;
use crate::markup::{BLOCK_HEADING_TAG, CATEGORY_ATTRIBUTE};

/// Derive the anchor for a block title.
pub fn anchor_id(title: &str) -> String {
    title.replace(' ', "-")
}

/// Give every block its anchor and write it into the block's own heading.
pub fn assign_anchors(blocks: Vec<Block>) -> Vec<Block> {
    blocks
        .into_iter()
        .map(|mut block| {
            block.anchor_id = anchor_id(&block.title);
            block.markup = tag_heading(&block.markup, &block.anchor_id);
            block
        })
        .collect()
}

/// Rewrite the first block heading of `markup`.
///
/// Sets `id` (replacing any existing one, skipped for an empty anchor) and
/// drops the category attribute, which the publishing host does not accept.
/// Only the first heading is touched; a block never holds a second one.
fn tag_heading(markup: &str, anchor: &str) -> String {
    let mut output = String::with_capacity(markup.len() + anchor.len() + 8);
    let mut tagged = false;

    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings {
            element_content_handlers: vec![lol_html::element!(BLOCK_HEADING_TAG, |el| {
                if tagged {
                    return Ok(());
                }
                tagged = true;
                el.remove_attribute(CATEGORY_ATTRIBUTE);
                if !anchor.is_empty() {
                    el.set_attribute("id", anchor)?;
                }
                Ok(())
            })],
            ..Default::default()
        },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    if let Err(err) = rewriter.write(markup.as_bytes()) {
        warn!(error = %err, anchor, "failed to tag block heading, keeping original markup");
        return markup.to_string();
    }

    if let Err(err) = rewriter.end() {
        warn!(error = %err, anchor, "failed to tag block heading, keeping original markup");
        return markup.to_string();
    }

    if output.is_empty() { markup.to_string() } else { output }
}
