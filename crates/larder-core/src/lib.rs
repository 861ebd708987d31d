//! Core cookbook engine for Larder.
//!
//! This crate ties together name normalization, entry validation, and the
//! shared cookbook store into the `Engine`, the central API for registering
//! entries and expanding recipes into flat ingredient summaries.

pub mod engine;
pub mod resolve;

pub use engine::Engine;
pub use resolve::resolve_summary;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("name error: {0}")]
    Name(#[from] larder_schema::InvalidName),
    #[error("entry error: {0}")]
    Entry(#[from] larder_schema::EntryError),
    #[error("store error: {0}")]
    Store(#[from] larder_store::StoreError),
    #[error("no recipe named '{0}' exists")]
    NotFound(String),
    #[error("'{0}' is an ingredient, not a recipe")]
    RootIsNotRecipe(String),
    #[error("recipe references unknown entry '{0}'")]
    MissingSubentry(String),
    #[error("recipe '{0}' depends on itself")]
    CyclicRecipe(String),
}
