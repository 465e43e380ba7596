//! Source classification.
//!
//! A source link such as `https://t.me/officialchan/5` names its origin in the
//! first path segment after the host. A block is official when that origin is
//! one of the configured official origins.

use url::Url;

/// Lower-cased origin named by a source URL, if it has one.
pub fn source_origin(source_url: &str) -> Option<String> {
    let url = Url::parse(source_url.trim()).ok()?;
    url.path_segments()?
        .find(|segment| !segment.is_empty())
        .map(|segment| segment.to_lowercase())
}

/// Whether `source_url` points at one of `official_origins`.
///
/// Empty or unparseable URLs are never official.
pub fn is_official_source<S: AsRef<str>>(source_url: &str, official_origins: &[S]) -> bool {
    let Some(origin) = source_origin(source_url) else {
        return false;
    };

    official_origins
        .iter()
        .any(|official| official.as_ref().trim().trim_start_matches('@').to_lowercase() == origin)
}
