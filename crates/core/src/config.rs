//! Restructuring configuration.
//!
//! [`RestructureConfig`] is an explicit value handed to every call of the
//! engine. Nothing in this crate reads process-wide settings on its own; the
//! [`settings`](crate::settings) module is only a way for callers to build a
//! config from files and environment variables.
//!
//! # Example
//!
//! ```rust
//! use digest_core::{NavigationStyle, RestructureConfig};
//!
//! let config = RestructureConfig::builder()
//!     .navigation_title("Contents")
//!     .navigation_style(NavigationStyle::Paragraph)
//!     .official_origins(["officialchan"])
//!     .build();
//! assert!(config.enable_toc);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::DigestError;

/// Default heading of the navigation fragment.
pub const DEFAULT_NAVIGATION_TITLE: &str = "Навигация";

/// Default label of the external source link in navigation entries.
pub const DEFAULT_SOURCE_LABEL: &str = "источник";

/// Default heading of the official-sources section.
pub const DEFAULT_OFFICIAL_SECTION_TITLE: &str = "Официальные источники";

/// Default heading of the other-sources section.
pub const DEFAULT_OTHER_SECTION_TITLE: &str = "Другие источники";

/// How the navigation fragment lays out its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationStyle {
    /// Entries as `<li>` items inside `<ul>`, wrapped in empty paragraphs.
    #[default]
    List,
    /// Entries joined by `<br>` inside a single paragraph.
    Paragraph,
}

impl FromStr for NavigationStyle {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "list" | "ul" => Ok(Self::List),
            "paragraph" | "p" | "lines" => Ok(Self::Paragraph),
            _ => Err(DigestError::InvalidSetting { key: "navigation_style".to_string(), value: s.to_string() }),
        }
    }
}

impl fmt::Display for NavigationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("list"),
            Self::Paragraph => f.write_str("paragraph"),
        }
    }
}

/// Options consumed by the restructuring pipeline.
///
/// The engine only ever borrows this value, so a single config can be shared
/// across threads for concurrent runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestructureConfig {
    /// Whether to render and insert the navigation fragment (default: true).
    pub enable_toc: bool,

    /// Heading text of the navigation fragment.
    pub navigation_title: String,

    /// Layout of the navigation fragment (default: list).
    pub navigation_style: NavigationStyle,

    /// Label of the external source link in each navigation entry.
    pub source_label: String,

    /// Whether to regroup blocks into official and other sections (default: true).
    pub enable_section_split: bool,

    /// Whether to enforce the section priority order (default: false).
    pub enable_section_reorder: bool,

    /// Heading of the official-sources section.
    pub official_section_title: String,

    /// Heading of the other-sources section.
    pub other_section_title: String,

    /// Whether to drop matching section headings from the prefix (default: false).
    pub strip_original_sections: bool,

    /// Case-insensitive substrings selecting prefix headings to drop.
    pub strip_titles: Vec<String>,

    /// Origins (channel names) whose sources count as official.
    pub official_origins: Vec<String>,

    /// Case-insensitive substrings giving the section order when reordering.
    ///
    /// Empty means official section first, then other section.
    pub section_priority: Vec<String>,
}

impl Default for RestructureConfig {
    fn default() -> Self {
        Self {
            enable_toc: true,
            navigation_title: DEFAULT_NAVIGATION_TITLE.to_string(),
            navigation_style: NavigationStyle::List,
            source_label: DEFAULT_SOURCE_LABEL.to_string(),
            enable_section_split: true,
            enable_section_reorder: false,
            official_section_title: DEFAULT_OFFICIAL_SECTION_TITLE.to_string(),
            other_section_title: DEFAULT_OTHER_SECTION_TITLE.to_string(),
            strip_original_sections: false,
            strip_titles: Vec::new(),
            official_origins: Vec::new(),
            section_priority: Vec::new(),
        }
    }
}

impl RestructureConfig {
    /// Creates a new builder for RestructureConfig.
    pub fn builder() -> RestructureConfigBuilder {
        RestructureConfigBuilder::new()
    }

    /// Priority list used by the section reorderer.
    pub fn effective_section_priority(&self) -> Vec<String> {
        if self.section_priority.is_empty() {
            vec![self.official_section_title.clone(), self.other_section_title.clone()]
        } else {
            self.section_priority.clone()
        }
    }
}

/// Builder for RestructureConfig.
///
/// # Example
///
/// ```rust
/// use digest_core::RestructureConfig;
///
/// let config = RestructureConfig::builder()
///     .enable_section_split(false)
///     .enable_toc(false)
///     .build();
/// assert!(!config.enable_section_split);
/// ```
pub struct RestructureConfigBuilder {
    config: RestructureConfig,
}

impl RestructureConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: RestructureConfig::default() }
    }

    /// Starts from an existing config instead of the defaults.
    pub fn from_config(config: RestructureConfig) -> Self {
        Self { config }
    }

    pub fn enable_toc(mut self, value: bool) -> Self {
        self.config.enable_toc = value;
        self
    }

    pub fn navigation_title(mut self, value: impl Into<String>) -> Self {
        self.config.navigation_title = value.into();
        self
    }

    pub fn navigation_style(mut self, value: NavigationStyle) -> Self {
        self.config.navigation_style = value;
        self
    }

    pub fn source_label(mut self, value: impl Into<String>) -> Self {
        self.config.source_label = value.into();
        self
    }

    pub fn enable_section_split(mut self, value: bool) -> Self {
        self.config.enable_section_split = value;
        self
    }

    pub fn enable_section_reorder(mut self, value: bool) -> Self {
        self.config.enable_section_reorder = value;
        self
    }

    pub fn official_section_title(mut self, value: impl Into<String>) -> Self {
        self.config.official_section_title = value.into();
        self
    }

    pub fn other_section_title(mut self, value: impl Into<String>) -> Self {
        self.config.other_section_title = value.into();
        self
    }

    pub fn strip_original_sections(mut self, value: bool) -> Self {
        self.config.strip_original_sections = value;
        self
    }

    /// Replaces the strip-title substrings.
    pub fn strip_titles<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.strip_titles = values.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the official origin set.
    pub fn official_origins<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.official_origins = values.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the section priority list.
    pub fn section_priority<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.section_priority = values.into_iter().map(Into::into).collect();
        self
    }

    /// Builds the config.
    pub fn build(self) -> RestructureConfig {
        self.config
    }
}

impl Default for RestructureConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
