//! Object store and edge cache backends for shipit.
//!
//! Provides:
//! - S3 implementation of the `ObjectStore` seam
//! - CloudFront implementation of the `EdgeCache` seam
//! - Backend-generic clear/upload synchronization

pub mod cloudfront;
pub mod s3;
pub mod sync;

pub use cloudfront::CloudFrontCache;
pub use s3::S3Store;
pub use sync::{SyncSummary, clear, synchronize, upload};
