use crate::resolve::resolve_summary;
use crate::CoreError;
use larder_schema::{normalize_name, EntryDraft, Summary};
use larder_store::{Cookbook, StoreError};
use tracing::{debug, info};

/// Central cookbook engine for Larder.
///
/// Owns the shared entry registry and exposes the four operations the
/// service is built from: normalizing handwritten recipe names, registering
/// validated entries, expanding recipes into ingredient summaries, and
/// resetting the registry.
pub struct Engine {
    cookbook: Cookbook,
}

impl Engine {
    /// Create an engine with an empty cookbook.
    pub fn new() -> Self {
        Self {
            cookbook: Cookbook::new(),
        }
    }

    /// Fold a raw handwritten recipe name into canonical `Title Case` form.
    pub fn normalize_name(&self, raw: &str) -> Result<String, CoreError> {
        let name = normalize_name(raw)?;
        debug!("normalized '{raw}' to '{name}'");
        Ok(name)
    }

    /// Validate `draft` and register it under its name.
    ///
    /// A taken name is reported before any shape validation of the draft
    /// itself. The insert re-checks under the write lock, so racing creates
    /// of one name admit exactly one entry. A rejected draft leaves the
    /// cookbook untouched.
    pub fn create_entry(&self, draft: EntryDraft) -> Result<(), CoreError> {
        if self.cookbook.contains(&draft.name) {
            return Err(CoreError::Store(StoreError::DuplicateName(draft.name)));
        }
        let entry = draft.into_entry()?;
        info!("registering entry '{}'", entry.name());
        self.cookbook.insert(entry)?;
        Ok(())
    }

    /// Expand the recipe registered under `name` into a flat summary.
    ///
    /// The cookbook is pinned once for the whole expansion, so the summary
    /// always reflects a single registry state.
    pub fn summary(&self, name: &str) -> Result<Summary, CoreError> {
        debug!("summarizing recipe '{name}'");
        let view = self.cookbook.read();
        resolve_summary(&view, name)
    }

    /// Discard every registered entry. Safe to call repeatedly.
    pub fn reset(&self) {
        info!("clearing cookbook");
        self.cookbook.clear();
    }

    pub fn cookbook(&self) -> &Cookbook {
        &self.cookbook
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
