use crate::config::RestructureConfig;
use crate::error::{DigestError, Result};
use crate::settings::directives::Settings;
use crate::settings::parser::SettingsParser;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix of environment variables that override settings.
pub const ENV_PREFIX: &str = "DIGEST_";

/// File name looked up in the default settings directory.
pub const SETTINGS_FILE_NAME: &str = "digest.conf";

/// Resolves and layers settings into a [`RestructureConfig`].
///
/// Layers, lowest first: built-in defaults, the settings file, `DIGEST_*`
/// environment variables. Callers layer their own overrides on the result.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Explicitly requested settings file; must exist
    path: Option<PathBuf>,
    /// Directory searched for `digest.conf` when no path is given
    default_dir: Option<PathBuf>,
    /// Whether to read `DIGEST_*` variables
    use_env: bool,
}

impl ConfigLoader {
    /// Create a loader using the platform config directory and the environment
    pub fn new() -> Self {
        Self { path: None, default_dir: Self::default_settings_dir(), use_env: true }
    }

    /// Load the layered configuration
    pub fn load(&self) -> Result<RestructureConfig> {
        Ok(self.load_settings()?.to_config())
    }

    /// Load the file and environment layers merged, without defaults applied
    pub fn load_settings(&self) -> Result<Settings> {
        let mut settings = match self.resolve_path()? {
            Some(path) => {
                debug!(path = %path.display(), "loading settings file");
                SettingsParser::parse_file(&path)?
            }
            None => Settings::new(),
        };

        if self.use_env {
            let env = SettingsParser::parse_vars(std::env::vars(), ENV_PREFIX)?;
            if !env.is_empty() {
                debug!("applying {} overrides", ENV_PREFIX);
            }
            settings.merge(&env);
        }

        Ok(settings)
    }

    /// The settings file that will be read, if any
    pub fn resolve_path(&self) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.path {
            if !path.exists() {
                return Err(DigestError::FileNotFound(path.clone()));
            }
            return Ok(Some(path.clone()));
        }

        Ok(self
            .default_dir
            .as_ref()
            .map(|dir| dir.join(SETTINGS_FILE_NAME))
            .filter(|path| path.exists()))
    }

    /// Get default settings directory (`<config dir>/digest`)
    fn default_settings_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("digest"))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for ConfigLoader
#[derive(Debug)]
pub struct ConfigLoaderBuilder {
    path: Option<PathBuf>,
    default_dir: Option<PathBuf>,
    use_env: bool,
}

impl ConfigLoaderBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self { path: None, default_dir: ConfigLoader::default_settings_dir(), use_env: true }
    }

    /// Read this settings file instead of searching the default directory
    pub fn path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Search this directory for `digest.conf`
    pub fn default_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.default_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Do not search any directory
    pub fn no_default_dir(mut self) -> Self {
        self.default_dir = None;
        self
    }

    /// Enable or disable environment overrides
    pub fn use_env(mut self, value: bool) -> Self {
        self.use_env = value;
        self
    }

    /// Build the loader
    pub fn build(self) -> ConfigLoader {
        ConfigLoader { path: self.path, default_dir: self.default_dir, use_env: self.use_env }
    }
}

impl Default for ConfigLoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
