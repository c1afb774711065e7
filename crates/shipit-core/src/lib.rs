//! Core domain types and traits for the shipit deploy tool.
//!
//! This crate contains:
//! - The error taxonomy shared by every deploy step
//! - Build artifact collection (storage keys, media types)
//! - Object store and edge cache trait seams (backends live in shipit-store)

pub mod artifact;
pub mod cache;
pub mod error;
pub mod store;

pub use error::{Error, Result};
