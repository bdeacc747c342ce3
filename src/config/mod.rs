//! Configuration for formdeck
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/formdeck/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod fields;
mod logging;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use fields::FieldSpec;
pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_TITLE: &str = "Form";
pub const DEFAULT_THEME: &str = "Deck Dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Heading shown above the form fields
    pub title: String,

    /// Theme name: "Deck Dark", "Deck Light", "Terminal" or a file in the themes dir
    pub theme: String,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Initial Field Configuration List (empty = built-in defaults)
    pub fields: Vec<FieldSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            theme: DEFAULT_THEME.to_string(),
            logging: LoggingConfig::default(),
            fields: Vec::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub title: Option<String>,
    pub theme: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,

    /// Optional [[fields]] entries
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: $FORMDECK_CONFIG or ~/.config/formdeck/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("FORMDECK_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|p| p.join(".config").join("formdeck").join("config.toml"))
    }

    /// Directory holding user theme files
    pub fn themes_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("formdeck").join("themes"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but does not parse is fatal: the user gets
    /// the parse error rather than a silent fallback to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match Self::parse_file_config(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: every [[fields]] entry needs `name` and `kind`.");
                    eprintln!("  Run `formdeck config --reset` to start over.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Merge a parsed file config over the defaults (no env lookups)
    pub(crate) fn from_file(file: FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            title: file.title.unwrap_or(defaults.title),
            theme: file.theme.unwrap_or(defaults.theme),
            logging: LoggingConfig::from_file(file.logging),
            fields: file.fields,
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        let mut config = Self::from_file(Self::load_file_config());

        if let Ok(theme) = std::env::var("FORMDECK_THEME") {
            config.theme = theme;
        }
        if let Ok(title) = std::env::var("FORMDECK_TITLE") {
            config.title = title;
        }

        config
    }
}
