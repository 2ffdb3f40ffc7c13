mod error;
mod handlers;

pub use error::ApiError;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::models::Author;
use crate::store::{AuthorDirectory, SnippetStore};

/// Shared handles passed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub authors: Arc<AuthorDirectory>,
    pub snippets: Arc<dyn SnippetStore>,
    /// Credited for posts that do not name a known author.
    pub default_poster: Author,
}

impl AppState {
    pub fn new(
        authors: AuthorDirectory,
        snippets: impl SnippetStore + 'static,
        default_poster: Author,
    ) -> Self {
        Self {
            authors: Arc::new(authors),
            snippets: Arc::new(snippets),
            default_poster,
        }
    }

    /// Resolve the posting author for a write. Unknown or missing ids fall
    /// back to the default poster; writes are never rejected for this.
    pub fn resolve_poster(&self, author_id: Option<&str>) -> Author {
        author_id
            .and_then(|id| self.authors.get_by_id(id))
            .unwrap_or_else(|| self.default_poster.clone())
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Authors
        .route("/authors", get(handlers::list_authors))
        .route("/authors/{id}", get(handlers::get_author))
        .route("/authors/{id}/snippets", get(handlers::list_author_snippets))
        // Snippets
        .route("/snippets", get(handlers::list_snippets))
        .route("/snippets", post(handlers::create_snippet))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        // HTML pages
        .route("/", get(handlers::view_snippets).post(handlers::post_snippet))
        .route("/authors/{id}", get(handlers::view_author_snippets))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
