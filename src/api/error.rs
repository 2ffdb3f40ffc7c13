use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::feed::FeedError;
use crate::render;
use crate::store::StoreError;

/// Errors returned by JSON handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Unavailable(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::NotFound(msg) | ApiError::Unavailable(msg) => msg.as_str(),
        }
    }

    /// Same error, rendered as an HTML page for browser routes.
    pub fn into_html(self) -> Response {
        let body = match &self {
            ApiError::NotFound(msg) => render::render_error("Not found", msg),
            ApiError::Unavailable(_) => {
                render::render_error("Unavailable", "Snippets are unavailable right now")
            }
        };
        (self.status(), Html(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        tracing::error!("Store error: {}", e);
        ApiError::Unavailable(e.to_string())
    }
}

impl From<FeedError> for ApiError {
    fn from(e: FeedError) -> Self {
        match e {
            FeedError::AuthorNotFound(id) => {
                tracing::warn!("Unknown author requested: {}", id);
                ApiError::NotFound(format!("Author not found: {}", id))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.message(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
