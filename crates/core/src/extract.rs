//! Block extraction.
//!
//! Splits a generated digest into the text before the first item heading and
//! an ordered list of item blocks. A block starts at a `<h4>` opening tag
//! (bare or carrying attributes) and runs up to the next one or to the end of
//! the document.

use crate::markup::{BLOCK_HEADING_CLOSE, BLOCK_HEADING_OPEN, category_attribute, first_href, text_content};

/// Category label used for blocks whose heading carries none.
pub const UNCATEGORIZED: &str = "Без категории";

/// One item of the digest: its heading plus everything up to the next item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Raw inner markup of the heading.
    pub heading_markup: String,
    /// Href of the first link inside the heading, or empty.
    pub source_url: String,
    /// Visible heading text.
    pub title: String,
    /// Category from the heading's `data-category` attribute.
    pub category: Option<String>,
    /// In-document identifier; empty until anchors are assigned.
    pub anchor_id: String,
    /// Full block markup, starting with the heading.
    pub markup: String,
}

impl Block {
    /// Category label, falling back to [`UNCATEGORIZED`].
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }

    /// Whether the heading named a category explicitly.
    pub fn has_category(&self) -> bool {
        self.category.is_some()
    }

    /// Whether the heading links to a source.
    pub fn has_source(&self) -> bool {
        !self.source_url.is_empty()
    }
}

/// Result of splitting a document into prefix and blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted<'a> {
    /// Document text before the first block heading.
    pub prefix: &'a str,
    /// Blocks in document order.
    pub blocks: Vec<Block>,
}

impl Extracted<'_> {
    /// True when the document had no block heading at all.
    pub fn is_flat(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Split `document` into its prefix and item blocks.
///
/// Without any block heading the whole document is the prefix and there are
/// no blocks. A heading without a closing tag yields a block with empty
/// heading fields; its markup still runs to the next heading.
///
/// # Example
///
/// ```rust
/// use digest_core::extract_blocks;
///
/// let html = r#"<p>Intro</p><h4><a href="https://t.me/chan/1">One</a></h4><p>Body</p>"#;
/// let extracted = extract_blocks(html);
///
/// assert_eq!(extracted.prefix, "<p>Intro</p>");
/// assert_eq!(extracted.blocks.len(), 1);
/// assert_eq!(extracted.blocks[0].title, "One");
/// assert_eq!(extracted.blocks[0].source_url, "https://t.me/chan/1");
/// ```
pub fn extract_blocks(document: &str) -> Extracted<'_> {
    let openings: Vec<_> = BLOCK_HEADING_OPEN.find_iter(document).collect();

    let Some(first) = openings.first() else {
        return Extracted { prefix: document, blocks: Vec::new() };
    };

    let blocks = openings
        .iter()
        .enumerate()
        .map(|(idx, open)| {
            let end = openings.get(idx + 1).map_or(document.len(), |next| next.start());
            let after_open = &document[open.end()..end];
            let heading_markup = BLOCK_HEADING_CLOSE
                .find(after_open)
                .map(|close| &after_open[..close.start()])
                .unwrap_or("");

            Block {
                heading_markup: heading_markup.to_string(),
                source_url: first_href(heading_markup),
                title: text_content(heading_markup),
                category: category_attribute(open.as_str()),
                anchor_id: String::new(),
                markup: document[open.start()..end].to_string(),
            }
        })
        .collect();

    Extracted { prefix: &document[..first.start()], blocks }
}
