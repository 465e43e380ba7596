pub mod anchor;
pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod input;
pub mod markup;
pub mod publication;
pub mod reorder;
pub mod restructure;
pub mod sections;
#[cfg(feature = "settings")]
pub mod settings;
pub mod toc;

pub use anchor::{anchor_id, assign_anchors};
pub use classify::{is_official_source, source_origin};
pub use config::{
    DEFAULT_NAVIGATION_TITLE, DEFAULT_OFFICIAL_SECTION_TITLE, DEFAULT_OTHER_SECTION_TITLE, DEFAULT_SOURCE_LABEL,
    NavigationStyle, RestructureConfig, RestructureConfigBuilder,
};
pub use error::{DigestError, Result};
pub use extract::{Block, Extracted, UNCATEGORIZED, extract_blocks};
pub use input::{read_file, read_stdin};
pub use markup::{escape_html, text_content, title_heading_text};
pub use publication::{DEFAULT_TITLE, GeneratedArticle, OutputFormat, Publication, SUMMARY_MARKER};
pub use reorder::{SectionLayout, SectionSpan, reorder_sections, section_rank, split_sections};
pub use restructure::{Restructured, Restructurer, insert_toc, restructure, restructure_with_report};
pub use sections::{
    Assembled, Partition, assemble_sections, partition_blocks, section_heading, strip_section_headings,
};
#[cfg(feature = "settings")]
pub use settings::{ConfigLoader, ConfigLoaderBuilder, Directive, Settings, SettingsParser};
pub use toc::{NavigationGroup, anchor_href, build_toc, group_by_category};
