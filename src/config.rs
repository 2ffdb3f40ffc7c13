//! Server configuration loaded from environment variables.
//!
//! - `SNIPPETS_HOST` - bind address (default `127.0.0.1`)
//! - `SNIPPETS_PORT` - listen port (default `8080`)
//! - `SNIPPETS_STORE_CAPACITY` - maximum number of snippets (default unbounded)
//! - `SNIPPETS_AUTHORS` - known authors as `id:name` pairs, comma-separated
//! - `SNIPPETS_SEED` - post a welcome snippet at startup (default `true`)

use crate::models::{Author, NewSnippet};
use crate::store::{AuthorDirectory, InMemorySnippetStore, SnippetStore, StoreError};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration for the snippet board.
#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Upper bound on stored snippets. `None` means unbounded.
    pub store_capacity: Option<usize>,
    /// Authors known to the directory, in registration order.
    pub authors: Vec<Author>,
    /// Author credited for posts that do not name a known author.
    pub default_poster: Author,
    pub seed: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = std::env::var("SNIPPETS_HOST").unwrap_or(defaults.host);

        let port = std::env::var("SNIPPETS_PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let store_capacity = std::env::var("SNIPPETS_STORE_CAPACITY")
            .ok()
            .and_then(|s| s.parse::<usize>().ok());

        let authors = std::env::var("SNIPPETS_AUTHORS")
            .ok()
            .map(|s| parse_authors(&s))
            .filter(|a| !a.is_empty())
            .unwrap_or(defaults.authors);

        let seed = std::env::var("SNIPPETS_SEED")
            .ok()
            .map(|s| !matches!(s.trim(), "0" | "false" | "no" | "off"))
            .unwrap_or(defaults.seed);

        Self {
            host,
            port,
            store_capacity,
            authors,
            default_poster: defaults.default_poster,
            seed,
        }
    }

    /// Build the author directory.
    pub fn author_directory(&self) -> AuthorDirectory {
        AuthorDirectory::new(self.authors.clone())
    }

    /// Build an empty snippet store honoring the configured capacity.
    pub fn snippet_store(&self) -> InMemorySnippetStore {
        match self.store_capacity {
            Some(capacity) => InMemorySnippetStore::with_capacity(capacity),
            None => InMemorySnippetStore::new(),
        }
    }

    /// Post the welcome snippet as the first registered author.
    pub fn seed_store(&self, store: &dyn SnippetStore) -> Result<(), StoreError> {
        if !self.seed {
            return Ok(());
        }
        if let Some(author) = self.authors.first() {
            store.add(NewSnippet::new(
                author.clone(),
                "I worked on this snippets tool",
            ))?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            store_capacity: None,
            authors: vec![Author::new("0", "christian scott")],
            default_poster: Author::new("1", "Someone New"),
            seed: true,
        }
    }
}

/// Parse `id:name,id:name`. Entries without a colon use the id as the name.
fn parse_authors(raw: &str) -> Vec<Author> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(':') {
            Some((id, name)) => Author::new(id.trim(), name.trim()),
            None => Author::new(entry, entry),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_author_pairs() {
        let authors = parse_authors("0:christian scott, 7:Ada ,solo");

        assert_eq!(authors.len(), 3);
        assert_eq!(authors[0].name, "christian scott");
        assert_eq!(authors[1].id, "7");
        assert_eq!(authors[1].name, "Ada");
        assert_eq!(authors[2].id, "solo");
        assert_eq!(authors[2].name, "solo");
    }

    #[test]
    fn ignores_empty_entries() {
        assert!(parse_authors(" , ,").is_empty());
    }

    #[test]
    fn seeding_posts_one_welcome_snippet() {
        let config = Config::default();
        let store = config.snippet_store();

        config.seed_store(&store).expect("seed failed");

        let all = store.list_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].author.id, "0");
    }

    #[test]
    fn maximum_capacity_builds_and_seeds() {
        let config = Config {
            store_capacity: Some(usize::MAX),
            ..Config::default()
        };
        let store = config.snippet_store();

        config.seed_store(&store).expect("seed failed");

        assert_eq!(store.capacity(), Some(usize::MAX));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn seeding_can_be_disabled() {
        let config = Config {
            seed: false,
            ..Config::default()
        };
        let store = config.snippet_store();

        config.seed_store(&store).expect("seed failed");

        assert!(store.is_empty());
    }
}
