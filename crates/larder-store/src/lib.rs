//! Thread-safe in-memory cookbook registry for Larder.
//!
//! This crate provides the storage layer: a `Cookbook` mapping unique entry
//! names to validated entries behind a reader/writer lock, and `CookbookView`
//! for consistent multi-lookup reads.

pub mod cookbook;

pub use cookbook::{Cookbook, CookbookView};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("an entry named '{0}' already exists")]
    DuplicateName(String),
}
