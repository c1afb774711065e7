//! Deploy configuration resolution.
//!
//! Resolution is pure: variables (process environment overlaid on the optional
//! env file) go in, an immutable [`DeployConfig`] comes out. Nothing here
//! mutates the process environment.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{ConfigError, ConfigResult, Environment, load_env_file};

/// Region used when `SHIPIT_REGION` is not set.
pub const DEFAULT_REGION: &str = "eu-west-3";

/// Build output directory used when `SHIPIT_BUILD_DIR` is not set.
pub const DEFAULT_BUILD_DIR: &str = ".output/public";

/// Resolved configuration for one deploy run.
///
/// Built once at process start and passed by reference to every step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    pub environment: Environment,
    /// Target object-storage bucket.
    pub bucket: String,
    /// Edge cache distribution id; `None` disables invalidation.
    pub distribution: Option<String>,
    /// Public URL reported after a successful deploy.
    pub public_url: Option<Url>,
    /// Provider region for all API calls.
    pub region: String,
    /// Build output directory, relative to the project directory.
    pub build_dir: PathBuf,
}

fn lookup<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Resolve a [`DeployConfig`] from an already-merged variable map.
///
/// The bucket is required; the distribution and public URL are optional, with
/// empty values normalized to `None`.
pub fn resolve_from(
    environment: Environment,
    vars: &HashMap<String, String>,
) -> ConfigResult<DeployConfig> {
    let infix = environment.var_infix();

    let bucket_key = format!("SHIPIT_{infix}_BUCKET");
    let bucket = lookup(vars, &bucket_key)
        .ok_or_else(|| ConfigError::MissingKey {
            key: bucket_key.clone(),
            hint: format!("set it in the process environment or in .env.{environment}"),
        })?
        .to_string();

    let distribution =
        lookup(vars, &format!("SHIPIT_{infix}_DISTRIBUTION")).map(str::to_string);

    let public_url_key = format!("SHIPIT_{infix}_PUBLIC_URL");
    let public_url = match lookup(vars, &public_url_key) {
        Some(raw) => Some(Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
            key: public_url_key,
            message: e.to_string(),
        })?),
        None => None,
    };

    let region = lookup(vars, "SHIPIT_REGION")
        .unwrap_or(DEFAULT_REGION)
        .to_string();

    let build_dir = PathBuf::from(lookup(vars, "SHIPIT_BUILD_DIR").unwrap_or(DEFAULT_BUILD_DIR));

    Ok(DeployConfig {
        environment,
        bucket,
        distribution,
        public_url,
        region,
        build_dir,
    })
}

/// Overlay process variables on top of file-seeded ones.
///
/// A variable already set in the process environment always wins; file values
/// only fill gaps.
fn overlay(
    mut file_vars: HashMap<String, String>,
    process_vars: impl IntoIterator<Item = (String, String)>,
) -> HashMap<String, String> {
    for (key, value) in process_vars {
        file_vars.insert(key, value);
    }
    file_vars
}

/// Resolve configuration for `environment`, reading the env file under
/// `project_dir` and overlaying the process environment on top.
pub fn resolve(environment: Environment, project_dir: &Path) -> ConfigResult<DeployConfig> {
    let file_vars = load_env_file(project_dir, environment)?;
    let vars = overlay(file_vars, std::env::vars());
    resolve_from(environment, &vars)
}
