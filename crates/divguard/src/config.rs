use serde::{Deserialize, Serialize};

const FILE_NAMES: [&str; 2] = ["divguard.toml", ".divguard.toml"];

/// Configuration for the divguard harness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Numerator for every case
    pub numerator: i32,

    /// Denominator produced by the `fixed` source
    pub fixed_denominator: i32,

    /// Report faults from the unguarded path instead of letting them abort the process
    pub catch_faults: bool,

    /// Seed for the `random` source; a fresh seed is drawn when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            numerator: 100,
            fixed_denominator: 2,
            catch_faults: true,
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Find and load configuration from standard locations
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(mut current_dir) = std::env::current_dir() {
            loop {
                for filename in FILE_NAMES {
                    let path = current_dir.join(filename);
                    if path.exists() {
                        return Self::from_file(&path);
                    }
                }

                if !current_dir.pop() {
                    break;
                }
            }
        }

        if let Some(home_dir) = dirs::home_dir() {
            let path = home_dir.join(".config/divguard/divguard.toml");
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Generate a default configuration file content
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}
