//! HTTP client for the snippet board JSON API.
//!
//! Used by the `post`, `feed` and `authors` subcommands. Configuration is via
//! environment variables:
//! - `SNIPPETS_URL` - Base URL (default: `http://127.0.0.1:8080/api/v1`)

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::*;

/// Default URL for a locally running server.
const DEFAULT_URL: &str = "http://127.0.0.1:8080/api/v1";

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// HTTP client for the snippet board API.
#[derive(Debug, Clone)]
pub struct SnippetsClient {
    base_url: String,
    client: Client,
}

impl SnippetsClient {
    /// Create client from environment variables.
    pub fn from_env() -> Self {
        let base_url = std::env::var("SNIPPETS_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Handle response, converting HTTP errors to ClientError.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(body)),
                _ => Err(ClientError::Server(format!("{}: {}", status, body))),
            }
        }
    }

    /// List known authors.
    pub async fn list_authors(&self) -> Result<Vec<Author>, ClientError> {
        let response = self.client.get(self.url(&["authors"])?).send().await?;
        self.handle_response(response).await
    }

    /// The global feed, newest first.
    pub async fn list_snippets(&self) -> Result<Vec<FeedEntry>, ClientError> {
        let response = self.client.get(self.url(&["snippets"])?).send().await?;
        self.handle_response(response).await
    }

    /// One author's feed, newest first.
    pub async fn list_author_snippets(&self, author_id: &str) -> Result<Vec<FeedEntry>, ClientError> {
        let response = self
            .client
            .get(self.url(&["authors", author_id, "snippets"])?)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Post a snippet.
    pub async fn create_snippet(&self, input: &CreateSnippetInput) -> Result<Snippet, ClientError> {
        let response = self
            .client
            .post(self.url(&["snippets"])?)
            .json(input)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
