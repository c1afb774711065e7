//! Backend-generic bucket synchronization.
//!
//! The remote object set is replaced wholesale on every deploy: clear the
//! bucket, then upload the build output. No diffing, no partial continuation;
//! the first failure aborts the run.

use std::path::Path;

use shipit_core::artifact::{ArtifactFile, collect_artifacts};
use shipit_core::store::{ObjectStore, RemoteObject};
use shipit_core::{Error, Result};
use tracing::{debug, info};

/// Counts reported by a completed synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSummary {
    pub deleted: u64,
    pub uploaded: u64,
}

/// Delete every object in the store, paging until the listing is exhausted.
///
/// An already-empty bucket is a success with zero deletions.
pub async fn clear(store: &dyn ObjectStore) -> Result<u64> {
    let mut deleted = 0u64;
    let mut continuation: Option<String> = None;
    loop {
        let page = store.list_page(continuation.take()).await?;
        if !page.keys.is_empty() {
            let count = page.keys.len();
            store.delete_batch(page.keys).await?;
            deleted += count as u64;
            debug!(count, "deleted object batch");
        }
        match page.next {
            Some(next) => continuation = Some(next),
            None => break,
        }
    }
    info!(deleted, "bucket cleared");
    Ok(deleted)
}

/// Upload every artifact under its storage key, in traversal order.
pub async fn upload(store: &dyn ObjectStore, files: &[ArtifactFile]) -> Result<u64> {
    let mut uploaded = 0u64;
    for file in files {
        let body = tokio::fs::read(&file.path)
            .await
            .map_err(|e| Error::Upload {
                key: file.key.clone(),
                message: e.to_string(),
            })?;
        store
            .put(RemoteObject {
                key: file.key.clone(),
                body: body.into(),
                content_type: file.content_type.clone(),
            })
            .await?;
        info!(key = %file.key, content_type = %file.content_type, "uploaded");
        uploaded += 1;
    }
    Ok(uploaded)
}

/// Clear the store, then upload everything under `build_root`.
pub async fn synchronize(store: &dyn ObjectStore, build_root: &Path) -> Result<SyncSummary> {
    let deleted = clear(store).await?;
    let files = collect_artifacts(build_root)?;
    let uploaded = upload(store, &files).await?;
    Ok(SyncSummary { deleted, uploaded })
}
