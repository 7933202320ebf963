//! Page handlers.
//!
//! htmx requests (`HX-Request` present) get the page fragment. Anything else
//! is a full navigation and gets the document shell, which then loads the
//! fragment for the same URL through htmx.

use super::error::{ServerError, ServerErrorExt};
use super::state::AppState;
use crate::content::{ContentError, ContentStore};
use crate::render::Page;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use folio_domain::constants::{DEFAULT_START_LINK, HX_REQUEST};
use minijinja::{Value, context};
use tracing::debug;

type PageResult = Result<Response, ServerError>;

pub(super) async fn index(State(state): State<AppState>) -> PageResult {
    shell(&state, DEFAULT_START_LINK)
}

pub(super) async fn posts(State(state): State<AppState>, headers: HeaderMap) -> PageResult {
    if !is_fragment(&headers) {
        return shell(&state, "/posts");
    }

    let posts = load(&state, ContentStore::posts).await?;
    render(&state, Page::Posts, context! { posts })
}

pub(super) async fn post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> PageResult {
    if !is_fragment(&headers) {
        return shell(&state, &format!("/post/{id}"));
    }

    let post = load(&state, move |store| store.post(&id)).await?;
    render(&state, Page::Post, context! { post })
}

pub(super) async fn tag(
    State(state): State<AppState>,
    Path(tag): Path<String>,
    headers: HeaderMap,
) -> PageResult {
    if !is_fragment(&headers) {
        return shell(&state, &format!("/tag/{tag}"));
    }

    let filter = tag.clone();
    let posts = load(&state, move |store| store.posts_tagged(&filter)).await?;
    debug!(tag = %tag, count = posts.len(), "Filtered posts by tag");
    render(&state, Page::Posts, context! { posts, tag })
}

pub(super) async fn projects(State(state): State<AppState>, headers: HeaderMap) -> PageResult {
    if !is_fragment(&headers) {
        return shell(&state, "/projects");
    }

    let projects = load(&state, ContentStore::projects).await?;
    render(&state, Page::Projects, context! { projects })
}

pub(super) async fn project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> PageResult {
    if !is_fragment(&headers) {
        return shell(&state, &format!("/project/{id}"));
    }

    let project = load(&state, move |store| store.project(&id)).await?;
    render(&state, Page::Project, context! { project })
}

pub(super) async fn about(State(state): State<AppState>, headers: HeaderMap) -> PageResult {
    if !is_fragment(&headers) {
        return shell(&state, "/about");
    }

    render(&state, Page::About, context! {})
}

fn is_fragment(headers: &HeaderMap) -> bool {
    headers.contains_key(HX_REQUEST)
}

fn shell(state: &AppState, start_link: &str) -> PageResult {
    render(state, Page::Index, context! { start_link })
}

fn render(state: &AppState, page: Page, ctx: Value) -> PageResult {
    let html = state.renderer.render(page, ctx).context(format!("page {page}"))?;
    Ok(Html(html).into_response())
}

/// Runs a blocking content lookup off the async workers.
async fn load<T, F>(state: &AppState, f: F) -> Result<T, ServerError>
where
    T: Send + 'static,
    F: FnOnce(&ContentStore) -> Result<T, ContentError> + Send + 'static,
{
    let store = state.content.clone();
    let result = tokio::task::spawn_blocking(move || f(&store)).await.context("content lookup")?;
    Ok(result?)
}
