use crate::StoreError;
use larder_schema::Entry;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard};

/// The shared entry registry.
///
/// Names are unique across both entry kinds. Writers take the lock
/// exclusively; readers obtain a [`CookbookView`] that pins one consistent
/// state for as many lookups as they need.
#[derive(Debug, Default)]
pub struct Cookbook {
    entries: RwLock<HashMap<String, Entry>>,
}

impl Cookbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry` under its name, failing if the name is taken.
    ///
    /// The existence check and the insert happen under one write lock, so
    /// two concurrent inserts of the same name cannot both succeed.
    pub fn insert(&self, entry: Entry) -> Result<(), StoreError> {
        let mut entries = self.entries.write().expect("cookbook lock poisoned");
        if entries.contains_key(entry.name()) {
            return Err(StoreError::DuplicateName(entry.name().to_owned()));
        }
        entries.insert(entry.name().to_owned(), entry);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .read()
            .expect("cookbook lock poisoned")
            .contains_key(name)
    }

    /// Pin the current state for a sequence of lookups.
    ///
    /// Writers block until the view is dropped, so a traversal that follows
    /// references between entries sees one coherent cookbook throughout.
    pub fn read(&self) -> CookbookView<'_> {
        CookbookView {
            entries: self.entries.read().expect("cookbook lock poisoned"),
        }
    }

    /// Discard every entry. Safe to call on an empty cookbook.
    pub fn clear(&self) {
        self.entries.write().expect("cookbook lock poisoned").clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().expect("cookbook lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A read guard over the cookbook, valid for multiple lookups.
pub struct CookbookView<'a> {
    entries: RwLockReadGuard<'a, HashMap<String, Entry>>,
}

impl CookbookView<'_> {
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
