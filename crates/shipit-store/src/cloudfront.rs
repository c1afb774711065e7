//! CloudFront edge cache backend.

use async_trait::async_trait;
use aws_sdk_cloudfront::Client;
use aws_sdk_cloudfront::error::DisplayErrorContext;
use aws_sdk_cloudfront::types::{InvalidationBatch, Paths};
use chrono::Utc;
use shipit_core::cache::EdgeCache;
use shipit_core::{Error, Result};

/// `EdgeCache` implementation backed by a CloudFront distribution.
pub struct CloudFrontCache {
    client: Client,
    distribution: String,
}

impl CloudFrontCache {
    pub fn new(client: Client, distribution: impl Into<String>) -> Self {
        Self {
            client,
            distribution: distribution.into(),
        }
    }
}

/// Unique idempotency token for an invalidation request, derived from the
/// current time.
pub fn caller_reference() -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("shipit-{nanos}")
}

#[async_trait]
impl EdgeCache for CloudFrontCache {
    async fn invalidate_all(&self, caller_reference: &str) -> Result<String> {
        let paths = Paths::builder()
            .quantity(1)
            .items("/*")
            .build()
            .map_err(|e| Error::Cache(e.to_string()))?;
        let batch = InvalidationBatch::builder()
            .paths(paths)
            .caller_reference(caller_reference)
            .build()
            .map_err(|e| Error::Cache(e.to_string()))?;

        let output = self
            .client
            .create_invalidation()
            .distribution_id(&self.distribution)
            .invalidation_batch(batch)
            .send()
            .await
            .map_err(|e| Error::Cache(DisplayErrorContext(e).to_string()))?;

        Ok(output
            .invalidation()
            .map(|i| i.id().to_string())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_reference_shape() {
        let reference = caller_reference();
        assert!(reference.starts_with("shipit-"));
        assert!(reference.len() > "shipit-".len());
    }
}
