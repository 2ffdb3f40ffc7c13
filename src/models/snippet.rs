use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Author;

/// A posted snippet.
///
/// Snippets are append-only: once a store hands one back it is never
/// mutated. `posted_at` is stamped by the store at insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub author: Author,
    pub posted_at: DateTime<Utc>,
    /// Raw text as submitted. No length or content constraints.
    pub body: String,
}

/// Input for appending a snippet to a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSnippet {
    pub author: Author,
    pub body: String,
    /// Explicit timestamp, used when seeding. When `None` the store stamps
    /// the insertion time. Never affects feed order.
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
}

impl NewSnippet {
    pub fn new(author: Author, body: impl Into<String>) -> Self {
        Self {
            author,
            body: body.into(),
            posted_at: None,
        }
    }

    pub fn posted_at(mut self, at: DateTime<Utc>) -> Self {
        self.posted_at = Some(at);
        self
    }

    /// Finalize into a stored snippet, stamping `now` if no time was given.
    pub(crate) fn into_snippet(self, now: DateTime<Utc>) -> Snippet {
        Snippet {
            author: self.author,
            posted_at: self.posted_at.unwrap_or(now),
            body: self.body,
        }
    }
}

/// Request body for posting a snippet through the JSON API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSnippetInput {
    /// Posting author's id. Missing or unknown ids post as the default author.
    #[serde(default)]
    pub author_id: Option<String>,
    pub body: String,
}
