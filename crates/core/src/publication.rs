//! Publication output type.
//!
//! The text generator answers with one blob: the article HTML, a
//! `---SUMMARY---` marker, and a short summary for the notification message.
//! [`GeneratedArticle`] splits that blob; [`Publication`] is the restructured,
//! titled result handed to the publishing host.

use serde::Serialize;

use crate::config::RestructureConfig;
use crate::markup::title_heading_text;
use crate::restructure::restructure_with_report;
use crate::Result;

/// Marker separating the article from its summary in generator output.
pub const SUMMARY_MARKER: &str = "---SUMMARY---";

/// Title used when the article has no `<h1>` heading.
pub const DEFAULT_TITLE: &str = "Еженедельный AI-дайджест";

/// Output format options for a publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The restructured HTML.
    Html,
    /// The whole publication as JSON.
    Json,
    /// Only the summary text.
    Summary,
}

/// Raw generator output split into its two parts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedArticle {
    pub html: String,
    pub summary: String,
}

impl GeneratedArticle {
    /// Split a generator response on [`SUMMARY_MARKER`].
    ///
    /// Without the marker the whole response is the article and the summary
    /// is empty.
    pub fn from_response(raw: &str) -> Self {
        match raw.split_once(SUMMARY_MARKER) {
            Some((html, summary)) => Self { html: html.trim().to_string(), summary: summary.trim().to_string() },
            None => Self { html: raw.trim().to_string(), summary: String::new() },
        }
    }

    pub fn has_summary(&self) -> bool {
        !self.summary.is_empty()
    }
}

/// A restructured digest ready for publishing.
#[derive(Debug, Clone, Serialize)]
pub struct Publication {
    /// Page title, from the first `<h1>` or [`DEFAULT_TITLE`].
    pub title: String,

    /// Restructured article HTML.
    pub content: String,

    /// Notification summary, possibly empty.
    pub summary: String,

    /// Number of item blocks in the article.
    pub block_count: usize,

    /// Items placed under the official section.
    pub official_count: usize,

    /// Items placed anywhere else.
    pub other_count: usize,

    /// Section headings in output order.
    pub sections: Vec<String>,
}

impl Publication {
    /// Restructure a generated article into a publication.
    pub fn from_generated(generated: &GeneratedArticle, config: &RestructureConfig) -> Self {
        let title = title_heading_text(&generated.html).unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let report = restructure_with_report(&generated.html, config);

        Self {
            title,
            content: report.html,
            summary: generated.summary.clone(),
            block_count: report.block_count,
            official_count: report.official_count,
            other_count: report.other_count,
            sections: report.sections,
        }
    }

    /// Restructure plain article HTML that carries no summary.
    pub fn from_html(html: &str, config: &RestructureConfig) -> Self {
        let generated = GeneratedArticle { html: html.to_string(), summary: String::new() };
        Self::from_generated(&generated, config)
    }

    /// Converts the publication to the specified format.
    pub fn to_format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Html => Ok(self.content.clone()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Summary => Ok(self.summary.clone()),
        }
    }

    /// Gets the publication as structured JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = concat!(
        "<h1>AI за неделю</h1><p>Intro</p>",
        r#"<h4><a href="https://t.me/officialchan/5">Title One</a></h4><p>Body one</p>"#,
        "\n---SUMMARY---\n",
        "Short summary.\n",
    );

    fn config() -> RestructureConfig {
        RestructureConfig::builder().official_origins(["officialchan"]).build()
    }

    #[test]
    fn test_split_response() {
        let generated = GeneratedArticle::from_response(RESPONSE);
        assert!(generated.html.ends_with("<p>Body one</p>"));
        assert_eq!(generated.summary, "Short summary.");
        assert!(generated.has_summary());
    }

    #[test]
    fn test_response_without_marker() {
        let generated = GeneratedArticle::from_response("  <p>Only html</p>\n");
        assert_eq!(generated.html, "<p>Only html</p>");
        assert!(!generated.has_summary());
    }

    #[test]
    fn test_publication_from_generated() {
        let publication = Publication::from_generated(&GeneratedArticle::from_response(RESPONSE), &config());
        assert_eq!(publication.title, "AI за неделю");
        assert_eq!(publication.summary, "Short summary.");
        assert_eq!(publication.block_count, 1);
        assert_eq!(publication.official_count, 1);
        assert!(publication.content.contains("<h3>Официальные источники</h3>"));
    }

    #[test]
    fn test_default_title() {
        let publication = Publication::from_html("<p>No heading</p>", &config());
        assert_eq!(publication.title, DEFAULT_TITLE);
        assert_eq!(publication.content, "<p>No heading</p>");
    }

    #[test]
    fn test_to_format() {
        let publication = Publication::from_generated(&GeneratedArticle::from_response(RESPONSE), &config());

        assert_eq!(publication.to_format(OutputFormat::Html).unwrap(), publication.content);
        assert_eq!(publication.to_format(OutputFormat::Summary).unwrap(), "Short summary.");

        let json = publication.to_format(OutputFormat::Json).unwrap();
        assert!(json.contains(r#""title": "AI за неделю""#));
    }

    #[test]
    fn test_to_json() {
        let publication = Publication::from_html("<h4>Item</h4><p>x</p>", &config());
        let json = publication.to_json().unwrap();
        assert!(json.is_object());
        assert_eq!(json.get("block_count").and_then(|v| v.as_u64()), Some(1));
        assert!(json.get("content").is_some());
    }
}
