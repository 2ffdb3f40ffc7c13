//! Feed projection: turns stored snippets into display-ready entries.
//!
//! Projection is pure. The caller supplies "now" so the relative time labels
//! are computed against a single instant for the whole feed.

mod humanize;

pub use humanize::relative_time;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{FeedEntry, Snippet};
use crate::store::{AuthorDirectory, SnippetStore};

/// Errors surfaced by the feed flows. Feeds only read, so the one failure is
/// an unknown author.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    #[error("author not found: {0}")]
    AuthorNotFound(String),
}

/// Project a single snippet as of `now`.
pub fn project(snippet: &Snippet, now: DateTime<Utc>) -> FeedEntry {
    FeedEntry {
        posted_at: relative_time(snippet.posted_at, now),
        posted_at_utc: snippet.posted_at,
        body: snippet.body.clone(),
        author_name: snippet.author.name.clone(),
        author_uri: snippet.author.uri(),
    }
}

/// Project a feed, preserving its order.
pub fn project_all(snippets: &[Snippet], now: DateTime<Utc>) -> Vec<FeedEntry> {
    snippets.iter().map(|s| project(s, now)).collect()
}

/// The global feed, newest first.
pub fn global_feed(store: &dyn SnippetStore, now: DateTime<Utc>) -> Vec<FeedEntry> {
    project_all(&store.list_all(), now)
}

/// One author's feed, newest first.
///
/// An unknown id yields [`FeedError::AuthorNotFound`]; callers map it to a
/// client error.
pub fn author_feed(
    authors: &AuthorDirectory,
    store: &dyn SnippetStore,
    author_id: &str,
    now: DateTime<Utc>,
) -> Result<Vec<FeedEntry>, FeedError> {
    let author = authors
        .get_by_id(author_id)
        .ok_or_else(|| FeedError::AuthorNotFound(author_id.to_string()))?;

    Ok(project_all(&store.list_by_author(&author), now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Author, NewSnippet};
    use crate::store::InMemorySnippetStore;
    use chrono::Duration;

    #[test]
    fn projects_author_fields_and_relative_time() {
        let now = Utc::now();
        let snippet = Snippet {
            author: Author::new("0", "christian scott"),
            posted_at: now - Duration::minutes(3),
            body: "I worked on this snippets tool".to_string(),
        };

        let entry = project(&snippet, now);

        assert_eq!(entry.posted_at, "3 minutes ago");
        assert_eq!(entry.posted_at_utc, snippet.posted_at);
        assert_eq!(entry.body, snippet.body);
        assert_eq!(entry.author_name, "christian scott");
        assert_eq!(entry.author_uri, "/authors/0");
    }

    #[test]
    fn unknown_author_is_not_found() {
        let authors = AuthorDirectory::new(vec![Author::new("0", "christian scott")]);
        let store = InMemorySnippetStore::new();

        let result = author_feed(&authors, &store, "nonexistent", Utc::now());

        assert_eq!(
            result,
            Err(FeedError::AuthorNotFound("nonexistent".to_string()))
        );
    }

    #[test]
    fn author_feed_keeps_feed_order() {
        let a = Author::new("0", "A");
        let b = Author::new("1", "B");
        let authors = AuthorDirectory::new(vec![a.clone(), b.clone()]);
        let store = InMemorySnippetStore::new();
        for (author, body) in [(&a, "s1"), (&b, "s2"), (&a, "s3")] {
            store
                .add(NewSnippet::new(author.clone(), body))
                .expect("add failed");
        }

        let now = Utc::now();
        let bodies: Vec<_> = author_feed(&authors, &store, "0", now)
            .expect("known author")
            .into_iter()
            .map(|e| e.body)
            .collect();
        assert_eq!(bodies, ["s3", "s1"]);

        let global: Vec<_> = global_feed(&store, now).into_iter().map(|e| e.body).collect();
        assert_eq!(global, ["s3", "s2", "s1"]);
    }
}
