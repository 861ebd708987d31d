//! Entry model, wire drafts, and name normalization for Larder.
//!
//! This crate defines the schema layer: the `Entry` sum type stored in the
//! cookbook (`Ingredient`/`Recipe`), the unvalidated `EntryDraft` shape that
//! arrives on the wire, draft validation (`EntryDraft::into_entry`), the
//! `Summary` returned by resolution, and the recipe-name normalizer.

pub mod entry;
pub mod normalize;
pub mod summary;

pub use entry::{Entry, EntryDraft, EntryError, Ingredient, Recipe, RequiredItem};
pub use normalize::{normalize_name, InvalidName};
pub use summary::{IngredientTotal, Summary};
