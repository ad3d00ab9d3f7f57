//! Configuration management for the knowledgebase core
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (skb.toml)
//! - Environment variables (SKB_*)
//!
//! ## Example config file (skb.toml):
//! ```toml
//! [registry]
//! lookup = "index"
//!
//! [logging]
//! filter = "sivrad_knowledgebase_core=debug"
//! ansi = false
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for the knowledgebase core
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Registry settings
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Registry configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// How collections are looked up by identifier
    #[serde(default)]
    pub lookup: LookupStrategy,
}

/// Lookup strategy for identifier queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupStrategy {
    /// Linear scan over the collections in insertion order
    #[default]
    Scan,
    /// Identifier-to-position map, built during construction
    Index,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directives used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Colored output
    #[serde(default = "default_true")]
    pub ansi: bool,
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            ansi: true,
        }
    }
}

impl CoreConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, layering a specific file over the default locations
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = ["skb.toml", ".skb.toml", "config/skb.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(config_dir) = directories::ProjectDirs::from("dev", "sivrad", "skb") {
            let xdg_config = config_dir.config_dir().join("skb.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }

        // SKB_REGISTRY__LOOKUP=index, SKB_LOGGING__FILTER=debug, ...
        builder = builder.add_source(
            Environment::with_prefix("SKB")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}
