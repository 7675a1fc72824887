//! Id-to-label lookup tables

use std::collections::HashMap;

use crate::model::Reference;

/// An id→label map built from a reference collection.
///
/// Lookups are rebuilt from scratch whenever their source collection
/// changes, never patched in place, so a lookup can never hold entries
/// from two different fetches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lookup {
    entries: HashMap<u64, String>,
}

impl Lookup {
    /// Creates an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a lookup from a reference collection.
    pub fn from_references<R: Reference>(items: &[R]) -> Self {
        Self {
            entries: items
                .iter()
                .map(|item| (item.id(), item.label().to_string()))
                .collect(),
        }
    }

    /// Returns the label for an id, if present.
    pub fn get(&self, id: u64) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the lookup has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
