use crate::error::{DigestError, Result};
use crate::settings::directives::{Settings, parse_directive, parse_setting};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Settings file parser
#[derive(Debug)]
pub struct SettingsParser;

impl SettingsParser {
    /// Parse a settings file
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Settings> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DigestError::FileNotFound(path.to_path_buf()));
        }

        let file = std::fs::File::open(path)
            .map_err(|e| DigestError::ConfigError(format!("Cannot open file {}: {}", path.display(), e)))?;

        Self::parse_reader(BufReader::new(file))
    }

    /// Parse settings from a reader
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<Settings> {
        let mut settings = Settings::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_number = idx + 1;
            let line =
                line.map_err(|e| DigestError::ConfigError(format!("Read error at line {}: {}", line_number, e)))?;
            Self::parse_line(&mut settings, &line, line_number)?;
        }

        Ok(settings)
    }

    /// Parse settings from a string
    pub fn parse_string(content: &str) -> Result<Settings> {
        let mut settings = Settings::new();

        for (idx, line) in content.lines().enumerate() {
            Self::parse_line(&mut settings, line, idx + 1)?;
        }

        Ok(settings)
    }

    /// Parse `DIGEST_*` style variables, e.g. `DIGEST_ENABLE_TOC=no`.
    ///
    /// Variables without the prefix are ignored; an unknown key after the
    /// prefix is an error.
    pub fn parse_vars<I, K, V>(vars: I, prefix: &str) -> Result<Settings>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut settings = Settings::new();

        for (name, value) in vars {
            let Some(key) = name.as_ref().strip_prefix(prefix) else {
                continue;
            };
            let directive = parse_setting(key, value.as_ref())
                .map_err(|e| DigestError::ConfigError(format!("Environment variable {}: {}", name.as_ref(), e)))?;
            settings.add_directive(directive);
        }

        Ok(settings)
    }

    fn parse_line(settings: &mut Settings, line: &str, line_number: usize) -> Result<()> {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        match parse_directive(line) {
            Ok(directive) => {
                settings.add_directive(directive);
                Ok(())
            }
            Err(e) => Err(DigestError::ConfigError(format!(
                "Parse error at line {}: {}",
                line_number, e
            ))),
        }
    }
}
