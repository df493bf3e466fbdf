//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rscalc/rscalc.toml`
//! 3. Environment variables: `RSCALC_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "rscalc.toml";

/// Runtime settings for result formatting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Decimal places for printed results (default: shortest representation)
    pub precision: Option<u8>,
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// `config_dir` overrides the global config location (used by tests);
    /// `None` reads `$XDG_CONFIG_HOME/rscalc/rscalc.toml` if present.
    pub fn load(config_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match config_dir {
            Some(dir) => Some(dir.join(CONFIG_FILE_NAME)),
            None => Self::global_config_path(),
        };

        let mut builder = Config::builder();
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(Environment::with_prefix("RSCALC").try_parsing(true));

        builder.build()?.try_deserialize()
    }

    /// Path of the global config file, if a home directory can be determined.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "rscalc").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Render the merged settings as TOML (for `config show`).
    ///
    /// TOML omits unset options, so a fully-default config renders as a
    /// commented placeholder instead of empty output.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let rendered =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Message(e.to_string()))?;
        if rendered.is_empty() {
            return Ok("# precision unset\n".to_string());
        }
        Ok(rendered)
    }

    /// Format a result value according to the configured precision.
    pub fn format_value(&self, value: f64) -> String {
        match self.precision {
            Some(p) => format!("{:.*}", p as usize, value),
            None => format!("{}", value),
        }
    }
}
