use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use super::{SnippetStore, StoreError};
use crate::models::{Author, NewSnippet, Snippet};

/// Snippet store backed by a `RwLock`-guarded deque.
///
/// Writers take the lock exclusively and push at the front; readers share the
/// lock and copy out what they need, so callers never hold references into
/// the collection. Cloning the store yields another handle to the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnippetStore {
    snippets: Arc<RwLock<VecDeque<Snippet>>>,
    capacity: Option<usize>,
}

impl InMemorySnippetStore {
    /// Unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects writes once it holds `capacity` snippets.
    ///
    /// The limit is only checked on `add`; nothing is reserved up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snippets: Arc::default(),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    // The only mutation is a single push_front after all checks, so a panic
    // elsewhere cannot leave the deque half-updated. Recover from poisoning.
    fn read(&self) -> RwLockReadGuard<'_, VecDeque<Snippet>> {
        self.snippets.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, VecDeque<Snippet>> {
        self.snippets.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SnippetStore for InMemorySnippetStore {
    fn list_all(&self) -> Vec<Snippet> {
        self.read().iter().cloned().collect()
    }

    fn list_by_author(&self, author: &Author) -> Vec<Snippet> {
        self.read()
            .iter()
            .filter(|s| author.is(&s.author))
            .cloned()
            .collect()
    }

    fn add(&self, snippet: NewSnippet) -> Result<Snippet, StoreError> {
        let mut snippets = self.write();

        if let Some(capacity) = self.capacity {
            if snippets.len() >= capacity {
                tracing::warn!(capacity, "rejecting snippet, store is full");
                return Err(StoreError::CapacityExceeded { capacity });
            }
        }

        // Stamp under the lock so timestamps follow insertion order.
        let stored = snippet.into_snippet(Utc::now());
        snippets.push_front(stored.clone());
        tracing::debug!(author = %stored.author.id, total = snippets.len(), "snippet added");

        Ok(stored)
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_adds_are_not_lost() {
        let store = InMemorySnippetStore::new();
        let author = Author::new("0", "christian scott");

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                let author = author.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        store
                            .add(NewSnippet::new(author.clone(), format!("{t}-{i}")))
                            .expect("unbounded add failed");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("writer panicked");
        }

        let all = store.list_all();
        assert_eq!(all.len(), 400);

        let mut bodies: Vec<_> = all.iter().map(|s| s.body.clone()).collect();
        bodies.sort();
        bodies.dedup();
        assert_eq!(bodies.len(), 400);
    }

    #[test]
    fn each_writer_sees_its_own_order_preserved() {
        let store = InMemorySnippetStore::new();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let store = store.clone();
                thread::spawn(move || {
                    let author = Author::new(t.to_string(), format!("writer {t}"));
                    for i in 0..25 {
                        store
                            .add(NewSnippet::new(author.clone(), i.to_string()))
                            .expect("unbounded add failed");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("writer panicked");
        }

        for t in 0..4 {
            let author = Author::new(t.to_string(), "");
            let bodies: Vec<usize> = store
                .list_by_author(&author)
                .iter()
                .map(|s| s.body.parse().expect("numeric body"))
                .collect();
            let expected: Vec<usize> = (0..25).rev().collect();
            assert_eq!(bodies, expected);
        }
    }

    #[test]
    fn readers_never_see_partial_writes() {
        let store = InMemorySnippetStore::new();
        let author = Author::new("0", "christian scott");

        let writer = {
            let store = store.clone();
            let author = author.clone();
            thread::spawn(move || {
                for i in 0..200 {
                    store
                        .add(NewSnippet::new(author.clone(), i.to_string()))
                        .expect("unbounded add failed");
                }
            })
        };

        let reader = {
            let store = store.clone();
            thread::spawn(move || {
                let mut last = 0;
                for _ in 0..200 {
                    let snapshot = store.list_all();
                    assert!(snapshot.len() >= last, "feed shrank");
                    // Newest first: bodies count down to zero.
                    for (pos, s) in snapshot.iter().enumerate() {
                        assert_eq!(s.body, (snapshot.len() - 1 - pos).to_string());
                    }
                    last = snapshot.len();
                }
            })
        };

        writer.join().expect("writer panicked");
        reader.join().expect("reader panicked");
        assert_eq!(store.len(), 200);
    }
}
