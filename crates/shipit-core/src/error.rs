//! Error types for shipit.
//!
//! Every error here is fatal to the deploy run: there is no retry, no rollback
//! and no partial-success bookkeeping. The orchestrator stops at the first one.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("usage: {0}")]
    Usage(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("build step `{command}` failed with exit code {code:?}")]
    Build {
        command: String,
        code: Option<i32>,
    },

    #[error("object store error: {0}")]
    Store(String),

    #[error("upload failed for `{key}`: {message}")]
    Upload { key: String, message: String },

    #[error("cache invalidation error: {0}")]
    Cache(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
