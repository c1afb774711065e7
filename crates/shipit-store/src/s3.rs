//! S3 object store backend.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{Delete, ObjectIdentifier};
use shipit_core::store::{ObjectPage, ObjectStore, RemoteObject};
use shipit_core::{Error, Result};
use tracing::debug;

/// `ObjectStore` implementation backed by an S3 bucket.
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn list_page(&self, continuation: Option<String>) -> Result<ObjectPage> {
        let output = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .set_continuation_token(continuation)
            .send()
            .await
            .map_err(|e| Error::Store(DisplayErrorContext(e).to_string()))?;

        let keys = output
            .contents()
            .iter()
            .filter_map(|o| o.key().map(str::to_string))
            .collect::<Vec<_>>();
        debug!(bucket = %self.bucket, count = keys.len(), "listed object page");

        Ok(ObjectPage {
            keys,
            next: output.next_continuation_token().map(str::to_string),
        })
    }

    async fn delete_batch(&self, keys: Vec<String>) -> Result<()> {
        let objects = keys
            .into_iter()
            .map(|key| ObjectIdentifier::builder().key(key).build())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::Store(e.to_string()))?;

        let delete = Delete::builder()
            .set_objects(Some(objects))
            .build()
            .map_err(|e| Error::Store(e.to_string()))?;

        self.client
            .delete_objects()
            .bucket(&self.bucket)
            .delete(delete)
            .send()
            .await
            .map_err(|e| Error::Store(DisplayErrorContext(e).to_string()))?;
        Ok(())
    }

    async fn put(&self, object: RemoteObject) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&object.key)
            .content_type(&object.content_type)
            .body(ByteStream::from(object.body))
            .send()
            .await
            .map_err(|e| Error::Upload {
                key: object.key.clone(),
                message: DisplayErrorContext(e).to_string(),
            })?;
        Ok(())
    }
}
