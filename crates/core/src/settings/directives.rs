use crate::config::{NavigationStyle, RestructureConfig};
use crate::error::{DigestError, Result};

/// Every key understood in settings files and `DIGEST_*` variables.
pub const SETTING_KEYS: &[&str] = &[
    "enable_toc",
    "navigation_title",
    "navigation_style",
    "source_label",
    "enable_section_split",
    "enable_section_reorder",
    "official_section_title",
    "other_section_title",
    "strip_original_sections",
    "strip_titles",
    "official_origins",
    "section_priority",
];

/// Represents a single settings directive
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Navigation fragment
    EnableToc(bool),
    NavigationTitle(String),
    NavigationStyle(NavigationStyle),
    SourceLabel(String),

    /// Section handling
    EnableSectionSplit(bool),
    EnableSectionReorder(bool),
    OfficialSectionTitle(String),
    OtherSectionTitle(String),

    /// Prefix cleanup
    StripOriginalSections(bool),

    /// List values (repeatable, comma-separated)
    StripTitles(Vec<String>),
    OfficialOrigins(Vec<String>),
    SectionPriority(Vec<String>),
}

/// One layer of settings: only what the layer actually mentions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub enable_toc: Option<bool>,
    pub navigation_title: Option<String>,
    pub navigation_style: Option<NavigationStyle>,
    pub source_label: Option<String>,

    pub enable_section_split: Option<bool>,
    pub enable_section_reorder: Option<bool>,
    pub official_section_title: Option<String>,
    pub other_section_title: Option<String>,

    pub strip_original_sections: Option<bool>,

    /// List values accumulate within a layer
    pub strip_titles: Vec<String>,
    pub official_origins: Vec<String>,
    pub section_priority: Vec<String>,
}

impl Settings {
    /// Create an empty settings layer
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directive to this layer
    pub fn add_directive(&mut self, directive: Directive) {
        match directive {
            Directive::EnableToc(value) => self.enable_toc = Some(value),
            Directive::NavigationTitle(value) => self.navigation_title = Some(value),
            Directive::NavigationStyle(value) => self.navigation_style = Some(value),
            Directive::SourceLabel(value) => self.source_label = Some(value),

            Directive::EnableSectionSplit(value) => self.enable_section_split = Some(value),
            Directive::EnableSectionReorder(value) => self.enable_section_reorder = Some(value),
            Directive::OfficialSectionTitle(value) => self.official_section_title = Some(value),
            Directive::OtherSectionTitle(value) => self.other_section_title = Some(value),

            Directive::StripOriginalSections(value) => self.strip_original_sections = Some(value),

            Directive::StripTitles(values) => self.strip_titles.extend(values),
            Directive::OfficialOrigins(values) => self.official_origins.extend(values),
            Directive::SectionPriority(values) => self.section_priority.extend(values),
        }
    }

    /// Layer `other` on top of this one.
    ///
    /// Scalars set in `other` win; a non-empty list in `other` replaces ours.
    pub fn merge(&mut self, other: &Settings) {
        if other.enable_toc.is_some() {
            self.enable_toc = other.enable_toc;
        }
        if other.navigation_title.is_some() {
            self.navigation_title = other.navigation_title.clone();
        }
        if other.navigation_style.is_some() {
            self.navigation_style = other.navigation_style;
        }
        if other.source_label.is_some() {
            self.source_label = other.source_label.clone();
        }
        if other.enable_section_split.is_some() {
            self.enable_section_split = other.enable_section_split;
        }
        if other.enable_section_reorder.is_some() {
            self.enable_section_reorder = other.enable_section_reorder;
        }
        if other.official_section_title.is_some() {
            self.official_section_title = other.official_section_title.clone();
        }
        if other.other_section_title.is_some() {
            self.other_section_title = other.other_section_title.clone();
        }
        if other.strip_original_sections.is_some() {
            self.strip_original_sections = other.strip_original_sections;
        }

        if !other.strip_titles.is_empty() {
            self.strip_titles = other.strip_titles.clone();
        }
        if !other.official_origins.is_empty() {
            self.official_origins = other.official_origins.clone();
        }
        if !other.section_priority.is_empty() {
            self.section_priority = other.section_priority.clone();
        }
    }

    /// Apply this layer to a config
    pub fn apply_to(&self, config: &mut RestructureConfig) {
        if let Some(value) = self.enable_toc {
            config.enable_toc = value;
        }
        if let Some(value) = &self.navigation_title {
            config.navigation_title = value.clone();
        }
        if let Some(value) = self.navigation_style {
            config.navigation_style = value;
        }
        if let Some(value) = &self.source_label {
            config.source_label = value.clone();
        }
        if let Some(value) = self.enable_section_split {
            config.enable_section_split = value;
        }
        if let Some(value) = self.enable_section_reorder {
            config.enable_section_reorder = value;
        }
        if let Some(value) = &self.official_section_title {
            config.official_section_title = value.clone();
        }
        if let Some(value) = &self.other_section_title {
            config.other_section_title = value.clone();
        }
        if let Some(value) = self.strip_original_sections {
            config.strip_original_sections = value;
        }

        if !self.strip_titles.is_empty() {
            config.strip_titles = self.strip_titles.clone();
        }
        if !self.official_origins.is_empty() {
            config.official_origins = self.official_origins.clone();
        }
        if !self.section_priority.is_empty() {
            config.section_priority = self.section_priority.clone();
        }
    }

    /// Build a config from the defaults plus this layer
    pub fn to_config(&self) -> RestructureConfig {
        let mut config = RestructureConfig::default();
        self.apply_to(&mut config);
        config
    }

    /// Check if this layer sets nothing
    pub fn is_empty(&self) -> bool {
        *self == Settings::default()
    }
}

/// Parse a `key: value` settings line
pub fn parse_directive(line: &str) -> Result<Directive> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Err(DigestError::ConfigError("Empty or comment line".to_string()));
    }

    match line.split_once(':') {
        Some((key, value)) => parse_setting(key, value),
        None => Err(DigestError::ConfigError(format!("Invalid directive format: {}", line))),
    }
}

/// Parse one setting given its key and raw value
pub fn parse_setting(key: &str, value: &str) -> Result<Directive> {
    let key = key.trim().to_lowercase();
    let value = value.trim();

    match key.as_str() {
        "enable_toc" => Ok(Directive::EnableToc(parse_boolean(&key, value)?)),
        "navigation_title" => Ok(Directive::NavigationTitle(value.to_string())),
        "navigation_style" => Ok(Directive::NavigationStyle(value.parse()?)),
        "source_label" => Ok(Directive::SourceLabel(value.to_string())),

        "enable_section_split" => Ok(Directive::EnableSectionSplit(parse_boolean(&key, value)?)),
        "enable_section_reorder" => Ok(Directive::EnableSectionReorder(parse_boolean(&key, value)?)),
        "official_section_title" => Ok(Directive::OfficialSectionTitle(value.to_string())),
        "other_section_title" => Ok(Directive::OtherSectionTitle(value.to_string())),

        "strip_original_sections" => Ok(Directive::StripOriginalSections(parse_boolean(&key, value)?)),

        "strip_titles" | "strip_title" => Ok(Directive::StripTitles(parse_list(value))),
        "official_origins" | "official_origin" => Ok(Directive::OfficialOrigins(parse_list(value))),
        "section_priority" => Ok(Directive::SectionPriority(parse_list(value))),

        _ => Err(DigestError::ConfigError(format!("Unknown directive: {}", key))),
    }
}

/// Parse a boolean value
fn parse_boolean(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "yes" | "true" | "1" | "on" => Ok(true),
        "no" | "false" | "0" | "off" => Ok(false),
        _ => Err(DigestError::InvalidSetting { key: key.to_string(), value: value.to_string() }),
    }
}

/// Split a comma-separated list, dropping blank entries
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
