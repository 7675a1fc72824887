//! Reference collections used for client-side joins

use serde::Deserialize;

/// An entry of a reference collection that can feed a lookup table.
pub trait Reference {
    /// Stable id the lookup is keyed on.
    fn id(&self) -> u64;
    /// Display label for the entry.
    fn label(&self) -> &str;
}

/// A tree species.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Species {
    /// Unique species id.
    pub id: u64,
    /// Species display name.
    pub name: String,
}

impl Reference for Species {
    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

/// A capture tag from the tag reference collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Unique tag id.
    pub id: u64,
    /// Tag display name.
    pub tag_name: String,
}

impl Reference for Tag {
    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.tag_name
    }
}
