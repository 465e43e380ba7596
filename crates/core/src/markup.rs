//! Tag patterns and text helpers shared by the pipeline stages.
//!
//! The engine never builds a DOM for the document as a whole. Structure is
//! located with the patterns below; scraper is only used to turn a short
//! heading fragment into its visible text.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

/// Tag that opens every item block.
pub const BLOCK_HEADING_TAG: &str = "h4";

/// Attribute on a block heading that carries its category.
pub const CATEGORY_ATTRIBUTE: &str = "data-category";

pub(crate) static BLOCK_HEADING_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<h4(\s[^>]*)?>").expect("valid block heading pattern"));

pub(crate) static BLOCK_HEADING_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</h4\s*>").expect("valid block heading close pattern"));

pub(crate) static SECTION_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h3(?:\s[^>]*)?>(.*?)</h3\s*>").expect("valid section heading pattern"));

pub(crate) static SECTION_HEADING_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<h3(?:\s[^>]*)?>").expect("valid section heading open pattern"));

static FIRST_HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<a\s(?:[^>]*?\s)?href\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid href pattern")
});

static CATEGORY_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bdata-category\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid category pattern")
});

static TITLE_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h1(?:\s[^>]*)?>(.*?)</h1\s*>").expect("valid title pattern"));

/// Visible text of a markup fragment: tags stripped, entities decoded, trimmed.
pub fn text_content(markup: &str) -> String {
    if !markup.contains('<') && !markup.contains('&') {
        return markup.trim().to_string();
    }

    let fragment = Html::parse_fragment(markup);
    let text: String = fragment.root_element().text().collect();
    text.trim().to_string()
}

/// Escape text for use inside element content or a double-quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The href of the first hyperlink in a fragment, or an empty string.
pub(crate) fn first_href(markup: &str) -> String {
    FIRST_HREF
        .captures(markup)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// The non-empty category attribute value of an opening tag, if any.
pub(crate) fn category_attribute(open_tag: &str) -> Option<String> {
    CATEGORY_ATTR
        .captures(open_tag)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| text_content(m.as_str()))
        .filter(|value| !value.is_empty())
}

/// Text of the first `<h1>` heading, if it has any.
pub fn title_heading_text(html: &str) -> Option<String> {
    TITLE_HEADING
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| text_content(m.as_str()))
        .filter(|title| !title.is_empty())
}

/// Case-insensitive substring test that works for non-ASCII titles.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
