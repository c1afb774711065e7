//! Environment resolution for shipit.
//!
//! This crate handles:
//! - Target environment selection (dev/prod)
//! - `.env`-style file parsing (optional seeding, never overrides process env)
//! - Resolution into an immutable [`DeployConfig`]

pub mod envfile;
pub mod environment;
pub mod error;
pub mod settings;

pub use envfile::{load_env_file, parse_env_file};
pub use environment::Environment;
pub use error::{ConfigError, ConfigResult};
pub use settings::{DeployConfig, resolve, resolve_from};
