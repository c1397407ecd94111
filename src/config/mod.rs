//! Configuration system for openapi-inspect.
//!
//! Settings are read from a TOML file and only affect presentation; every
//! field has a default, so an absent or partial file is fine. Command-line
//! flags take precedence over the file.
//!
//! # Example
//!
//! ```
//! use openapi_inspect::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.schema_format, "yaml");
//! assert_eq!(config.indent_size, 2);
//!
//! let custom = Config {
//!     schema_format: "json".to_string(),
//!     ..Config::default()
//! };
//! assert_eq!(custom.indent_size, 2);
//! ```

use crate::output::dump::DumpFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the openapi-inspect application.
///
/// # Fields
///
/// * `schema_format` - Default dump format for `schema`: "yaml" or "json" (default: "yaml")
/// * `indent_size` - Spaces per indentation level in JSON dumps (default: 2)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default dump format for the `schema` command
    #[serde(default = "default_schema_format")]
    pub schema_format: String,

    /// Number of spaces per indentation level in JSON dumps
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,
}

fn default_schema_format() -> String {
    "yaml".to_string()
}

fn default_indent_size() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_format: default_schema_format(),
            indent_size: default_indent_size(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/openapi-inspect/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("openapi-inspect");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist. A file
    /// that exists but can't be read or parsed is reported on stderr and
    /// ignored.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        Self::load_from(&config_path).unwrap_or_else(|err| {
            eprintln!("Warning: ignoring config file: {:#}", err);
            Self::default()
        })
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or isn't valid TOML.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// The configured dump format.
    ///
    /// An unrecognised name falls back to YAML with a warning on stderr.
    pub fn dump_format(&self) -> DumpFormat {
        DumpFormat::from_name(&self.schema_format).unwrap_or_else(|| {
            eprintln!(
                "Warning: unknown schema_format '{}', using yaml",
                self.schema_format
            );
            DumpFormat::Yaml
        })
    }
}
