//! divguard: runs the CWE-369 guarded and unguarded division cases and
//! prints one line per case.

pub mod config;
pub mod logging;
pub mod runner;

pub use config::{Config, ConfigError};
pub use runner::{run_case, run_demo};

#[derive(Debug, thiserror::Error)]
pub enum DivguardError {
    #[error("Failed to read denominator: {0}")]
    SourceError(#[from] divguard_core::SourceError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, DivguardError>;
