use crate::models::Author;

/// Registry of known authors, fixed at startup.
///
/// Lookups are a linear scan; the directory is small and immutable, so it is
/// shared behind an `Arc` without any locking.
#[derive(Debug, Clone, Default)]
pub struct AuthorDirectory {
    authors: Vec<Author>,
}

impl AuthorDirectory {
    pub fn new(authors: Vec<Author>) -> Self {
        Self { authors }
    }

    /// All authors in registration order.
    pub fn list(&self) -> Vec<Author> {
        self.authors.clone()
    }

    /// First author registered with `id`, if any.
    pub fn get_by_id(&self, id: &str) -> Option<Author> {
        self.authors.iter().find(|a| a.id == id).cloned()
    }
}

impl FromIterator<Author> for AuthorDirectory {
    fn from_iter<T: IntoIterator<Item = Author>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
