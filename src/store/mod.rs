//! In-memory stores for authors and snippets.
//!
//! The [`AuthorDirectory`] is built once at startup and only read afterwards.
//! The [`SnippetStore`] is the single source of truth for snippets and is
//! shared across request handlers.

mod authors;
mod memory;

pub use authors::AuthorDirectory;
pub use memory::InMemorySnippetStore;

use thiserror::Error;

use crate::models::{Author, NewSnippet, Snippet};

/// Failures a snippet store may report on write.
///
/// A failed write leaves the store exactly as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("snippet store is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
}

/// Append-only snippet storage, safe to share between threads.
///
/// Feeds are ordered newest-insertion first. Order reflects when a snippet
/// was added, not its `posted_at` value.
pub trait SnippetStore: Send + Sync {
    /// Snapshot of every snippet, most recently added first.
    fn list_all(&self) -> Vec<Snippet>;

    /// Snippets whose author has the same id as `author`, in feed order.
    fn list_by_author(&self, author: &Author) -> Vec<Snippet>;

    /// Append a snippet at the head of the feed and return the stored copy.
    fn add(&self, snippet: NewSnippet) -> Result<Snippet, StoreError>;

    /// Number of stored snippets.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
