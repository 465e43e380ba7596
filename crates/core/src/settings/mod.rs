pub mod directives;
pub mod loader;
pub mod parser;

pub use directives::{Directive, SETTING_KEYS, Settings};
pub use loader::{ConfigLoader, ConfigLoaderBuilder, ENV_PREFIX, SETTINGS_FILE_NAME};
pub use parser::SettingsParser;
