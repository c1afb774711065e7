//! Edge cache trait.

use async_trait::async_trait;

use crate::Result;

/// Trait for edge cache backends (CloudFront in shipit-store).
///
/// Invalidation is fire-and-forget: the call submits the request and returns
/// the provider's invalidation id without polling for completion.
#[async_trait]
pub trait EdgeCache: Send + Sync {
    /// Request invalidation of every cached path (`/*`).
    ///
    /// `caller_reference` is the caller-supplied idempotency token; it must be
    /// unique per request.
    async fn invalidate_all(&self, caller_reference: &str) -> Result<String>;
}
