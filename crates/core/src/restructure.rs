//! Restructuring pipeline.
//!
//! This is the main entry point of the crate. A generated digest goes through
//! extraction, anchoring, navigation rendering, section assembly, optional
//! reordering, and finally navigation insertion:
//!
//! ```text
//! extract -> anchor -> (toc | classify) -> assemble -> reorder -> insert toc
//! ```
//!
//! # Example
//!
//! ```rust
//! use digest_core::{RestructureConfig, restructure};
//!
//! let html = r#"<p>Intro</p><h4><a href="https://t.me/officialchan/5">Title One</a></h4><p>Body</p>"#;
//! let config = RestructureConfig::builder().official_origins(["officialchan"]).build();
//! let output = restructure(html, &config);
//! assert!(output.contains(r##"<a href="#Title-One">"##));
//! ```

use serde::Serialize;
use tracing::debug;

use crate::anchor::assign_anchors;
use crate::config::RestructureConfig;
use crate::extract::extract_blocks;
use crate::markup::{BLOCK_HEADING_OPEN, SECTION_HEADING_OPEN};
use crate::reorder::{reorder_sections, split_sections};
use crate::sections::assemble_sections;
use crate::toc::build_toc;

/// Output of one restructuring run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Restructured {
    /// The restructured document.
    pub html: String,
    /// Number of item blocks found.
    pub block_count: usize,
    /// Blocks placed in the official section (zero when not splitting).
    pub official_count: usize,
    /// Blocks placed anywhere else.
    pub other_count: usize,
    /// Section heading texts after the prefix, in output order.
    pub sections: Vec<String>,
}

impl Restructured {
    fn unchanged(html: &str) -> Self {
        Self {
            html: html.to_string(),
            block_count: 0,
            official_count: 0,
            other_count: 0,
            sections: Vec::new(),
        }
    }
}

/// Restructures generated digests with a fixed configuration.
///
/// The restructurer holds no state between runs, so one instance can serve
/// any number of documents, from any number of threads.
///
/// # Example
///
/// ```rust
/// use digest_core::{Restructurer, RestructureConfig};
///
/// let restructurer = Restructurer::with_config(RestructureConfig::default());
/// let result = restructurer.restructure("<h4>Only item</h4><p>Body</p>");
/// assert_eq!(result.block_count, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Restructurer {
    config: RestructureConfig,
}

impl Restructurer {
    /// Creates a restructurer with default settings.
    pub fn new() -> Self {
        Self { config: RestructureConfig::default() }
    }

    /// Creates a restructurer with a custom configuration.
    pub fn with_config(config: RestructureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RestructureConfig {
        &self.config
    }

    /// Run the whole pipeline over `html`.
    ///
    /// A document without any item heading comes back byte-for-byte.
    pub fn restructure(&self, html: &str) -> Restructured {
        restructure_with_report(html, &self.config)
    }
}

/// Restructure `html`, returning only the new document.
pub fn restructure(html: &str, config: &RestructureConfig) -> String {
    restructure_with_report(html, config).html
}

/// Restructure `html`, returning the new document and run statistics.
pub fn restructure_with_report(html: &str, config: &RestructureConfig) -> Restructured {
    let extracted = extract_blocks(html);
    if extracted.is_flat() {
        debug!("no item headings found, leaving document unchanged");
        return Restructured::unchanged(html);
    }

    let blocks = assign_anchors(extracted.blocks);
    debug!(blocks = blocks.len(), "extracted and anchored item blocks");

    let toc = build_toc(&blocks, config);
    let assembled = assemble_sections(extracted.prefix, &blocks, config);
    debug!(
        official = assembled.official_count,
        other = assembled.other_count,
        split = config.enable_section_split,
        "assembled sections"
    );

    let (prefix, items) = assembled.markup.split_at(assembled.prefix_len);
    let items = if config.enable_section_reorder {
        let priority = config.effective_section_priority();
        debug!(?priority, "reordering sections");
        reorder_sections(items, &priority)
    } else {
        items.to_string()
    };

    let sections = split_sections(&items).titles();
    let body = format!("{}{}", prefix, items);
    let html = insert_toc(&body, &toc, prefix.len(), config.enable_section_split);

    Restructured {
        html,
        block_count: blocks.len(),
        official_count: assembled.official_count,
        other_count: assembled.other_count,
        sections,
    }
}

/// Splice the navigation fragment into `body`.
///
/// The search starts at byte offset `from`, so headings in the prefix are
/// never used as the insertion point. Goes before the first section heading
/// when sections were split, before the first item heading otherwise, and at
/// the end when neither exists past `from`.
pub fn insert_toc(body: &str, toc: &str, from: usize, before_sections: bool) -> String {
    if toc.is_empty() {
        return body.to_string();
    }

    let marker = if before_sections { &SECTION_HEADING_OPEN } else { &BLOCK_HEADING_OPEN };
    let found = body.get(from..).and_then(|rest| marker.find(rest)).map(|m| from + m.start());

    match found {
        Some(position) => {
            let mut out = String::with_capacity(body.len() + toc.len());
            out.push_str(&body[..position]);
            out.push_str(toc);
            out.push_str(&body[position..]);
            out
        }
        None => format!("{}{}", body, toc),
    }
}
