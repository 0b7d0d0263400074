//! Runtime errors of the inspection layer.
//!
//! Resolution itself never fails at runtime; unsupported callables are
//! compile errors. These cover catalogue selection and configuration.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectError {
    /// A requested name is not in the catalogue
    #[error("Unknown catalogue entry `{name}` (available: {available})")]
    UnknownEntry { name: String, available: String },

    /// Config file could not be read
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has unknown keys
    #[error("Failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// JSON output failed
    #[error("Failed to serialize descriptors: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Terminal output failed
    #[error("Failed to render report: {0}")]
    Render(#[from] std::fmt::Error),
}
