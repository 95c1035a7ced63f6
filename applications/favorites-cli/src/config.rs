/// CLI configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use soul_favorites::PlaylistConfig;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "favorites.toml";

/// Environment variable prefix (`SOUL_FAVORITES__OUTPUT__FORMAT=json`)
pub const ENV_PREFIX: &str = "SOUL_FAVORITES";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub playlist: PlaylistConfig,

    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_prompt")]
    pub prompt: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable status lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `favorites.toml` is used when
    /// present in the working directory.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with SOUL_FAVORITES)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }
}

impl CliConfig {
    /// Apply command-line flags on top of the loaded settings
    ///
    /// `--json` forces JSON output whatever the file or environment says.
    pub fn apply_flags(&mut self, json: bool) {
        if json {
            self.output.format = OutputFormat::Json;
        }
    }
}

fn default_prompt() -> String {
    "favorites> ".to_string()
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            prompt: default_prompt(),
        }
    }
}
