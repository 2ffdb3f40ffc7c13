use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::Utc;
use serde::Deserialize;

use super::{ApiError, AppState};
use crate::feed;
use crate::models::*;
use crate::render::{self, SnippetsPage};

// ============================================================
// Health
// ============================================================

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "snippets": state.snippets.len()
    }))
}

// ============================================================
// HTML pages
// ============================================================

/// Form posted by the "new snippet" box on the front page.
#[derive(Debug, Deserialize)]
pub struct SnippetForm {
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub author: Option<String>,
}

pub async fn view_snippets(State(state): State<AppState>) -> Html<String> {
    let page = SnippetsPage {
        title: "All snippets".to_string(),
        show_new_snippet_form: true,
        snippets: feed::global_feed(state.snippets.as_ref(), Utc::now()),
    };
    Html(render::render_snippets_page(&page))
}

pub async fn post_snippet(State(state): State<AppState>, Form(form): Form<SnippetForm>) -> Response {
    let author = state.resolve_poster(form.author.as_deref());

    match state.snippets.add(NewSnippet::new(author, form.snippet)) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => ApiError::from(e).into_html(),
    }
}

pub async fn view_author_snippets(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let snippets = match feed::author_feed(&state.authors, state.snippets.as_ref(), &id, Utc::now()) {
        Ok(entries) => entries,
        Err(e) => return ApiError::from(e).into_html(),
    };
    let name = state.authors.get_by_id(&id).map(|a| a.name).unwrap_or(id);

    let page = SnippetsPage {
        title: format!("Snippets by {}", name),
        show_new_snippet_form: false,
        snippets,
    };
    Html(render::render_snippets_page(&page)).into_response()
}

// ============================================================
// Authors
// ============================================================

pub async fn list_authors(State(state): State<AppState>) -> Json<Vec<Author>> {
    Json(state.authors.list())
}

pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Author>, ApiError> {
    state
        .authors
        .get_by_id(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Author not found: {}", id)))
}

pub async fn list_author_snippets(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<FeedEntry>>, ApiError> {
    let entries = feed::author_feed(&state.authors, state.snippets.as_ref(), &id, Utc::now())?;
    Ok(Json(entries))
}

// ============================================================
// Snippets
// ============================================================

pub async fn list_snippets(State(state): State<AppState>) -> Json<Vec<FeedEntry>> {
    Json(feed::global_feed(state.snippets.as_ref(), Utc::now()))
}

pub async fn create_snippet(
    State(state): State<AppState>,
    Json(input): Json<CreateSnippetInput>,
) -> Result<(StatusCode, Json<Snippet>), ApiError> {
    let author = state.resolve_poster(input.author_id.as_deref());
    let snippet = state.snippets.add(NewSnippet::new(author, input.body))?;

    tracing::info!("Snippet posted by {}", snippet.author.id);
    Ok((StatusCode::CREATED, Json(snippet)))
}
