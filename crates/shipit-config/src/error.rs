//! Configuration resolution errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unrecognized environment `{0}` (expected one of: dev, prod)")]
    UnknownEnvironment(String),

    #[error("missing required setting {key} ({hint})")]
    MissingKey { key: String, hint: String },

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
