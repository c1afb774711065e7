//! Linear deploy orchestration.
//!
//! The sequence is fixed: resolve configuration, install dependencies, build,
//! clear the bucket, upload the build output, invalidate the edge cache. Every
//! step returns a `Result` and the first failure ends the run; there is no
//! rollback and no state carried between runs.

use std::path::Path;

use anyhow::Context;
use aws_config::{BehaviorVersion, Region};
use shipit_build::ShellStep;
use shipit_config::Environment;
use shipit_core::cache::EdgeCache;
use shipit_store::{CloudFrontCache, S3Store, cloudfront};
use tracing::{info, warn};

/// What a successful run did, reported to the invoker.
#[derive(Debug)]
pub struct DeploySummary {
    pub deleted: u64,
    pub uploaded: u64,
    /// Invalidation id, when a distribution was configured.
    pub invalidation: Option<String>,
}

/// Run the whole deploy sequence for `environment`.
pub async fn run(environment: Environment, project_dir: &Path) -> anyhow::Result<DeploySummary> {
    let config = shipit_config::resolve(environment, project_dir)
        .context("failed to resolve deploy configuration")?;
    info!(
        environment = %config.environment,
        bucket = %config.bucket,
        region = %config.region,
        "resolved configuration"
    );

    shipit_build::run(project_dir, &ShellStep::npm_install()).await?;
    shipit_build::run(project_dir, &ShellStep::npm_generate()).await?;

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;

    let store = S3Store::new(aws_sdk_s3::Client::new(&sdk_config), &config.bucket);
    let build_root = project_dir.join(&config.build_dir);
    let sync = shipit_store::synchronize(&store, &build_root).await?;
    info!(
        deleted = sync.deleted,
        uploaded = sync.uploaded,
        bucket = %config.bucket,
        "bucket synchronized"
    );

    let invalidation = match config.distribution.as_deref() {
        Some(distribution) => {
            let cache = CloudFrontCache::new(
                aws_sdk_cloudfront::Client::new(&sdk_config),
                distribution,
            );
            let id = cache.invalidate_all(&cloudfront::caller_reference()).await?;
            info!(distribution, invalidation = %id, "cache invalidation requested");
            Some(id)
        }
        None => {
            warn!("no cache distribution configured, skipping invalidation");
            None
        }
    };

    info!(environment = %config.environment, "deploy complete");
    if let Some(url) = &config.public_url {
        info!(url = %url, "site available");
    }

    Ok(DeploySummary {
        deleted: sync.deleted,
        uploaded: sync.uploaded,
        invalidation,
    })
}
