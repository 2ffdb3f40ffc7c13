use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Someone who can post snippets.
///
/// Two authors are the same entity when their ids match; `name` is display
/// data only, so equality and hashing ignore it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    /// Opaque, stable identifier. Used in profile paths.
    pub id: String,
    /// Display name shown next to each snippet.
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Canonical profile path, e.g. `/authors/0`.
    pub fn uri(&self) -> String {
        format!("/authors/{}", self.id)
    }

    /// Whether `other` refers to the same author.
    pub fn is(&self, other: &Author) -> bool {
        self.id == other.id
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
