//! Object store trait and remote object types.
//!
//! Backends (S3 in shipit-store) implement [`ObjectStore`]; the sync logic is
//! written against the trait so it can be exercised without a cloud account.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::Result;

/// A (key, content, media type) triple stored in the bucket.
#[derive(Debug, Clone)]
pub struct RemoteObject {
    pub key: String,
    pub body: Bytes,
    pub content_type: String,
}

/// One page of keys from a paginated listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectPage {
    /// Keys on this page (possibly empty).
    pub keys: Vec<String>,
    /// Continuation token for the next page; `None` on the last page.
    pub next: Option<String>,
}

/// Trait for object storage backends.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List one page of object keys, continuing from `continuation` if given.
    async fn list_page(&self, continuation: Option<String>) -> Result<ObjectPage>;

    /// Delete a batch of objects by key. Never called with an empty batch.
    async fn delete_batch(&self, keys: Vec<String>) -> Result<()>;

    /// Store an object under its key with its content-type metadata.
    async fn put(&self, object: RemoteObject) -> Result<()>;
}
