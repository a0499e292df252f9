//! HTTP front-end: search, paging, saved results and summaries.
//!
//! ## Endpoints
//!
//! - `GET /`: current page of results plus saved results (JSON)
//! - `POST /`: run a search and redirect to its first page
//! - `POST /save_result`: save one result
//! - `POST /delete_saved_result`: remove a saved result by index
//! - `GET /clear_session`: forget everything for this browser
//! - `GET /summarize`: short summary of an article
//! - `GET /health`: liveness

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use scour_search::{ContentType, DEFAULT_SENTENCES, SearchResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::dispatch::{Searcher, perform_search};
use crate::error::{AppError, Result};
use crate::pagination::paginate;
use crate::session::SessionStore;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "scour_session";

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    store: SessionStore,
    searcher: Arc<dyn Searcher>,
    per_page: usize,
}

impl AppState {
    /// State with a default-sized session store.
    pub fn new(searcher: Arc<dyn Searcher>, per_page: usize) -> Self {
        Self::with_store(searcher, per_page, SessionStore::new())
    }

    pub fn with_store(searcher: Arc<dyn Searcher>, per_page: usize, store: SessionStore) -> Self {
        Self {
            store,
            searcher,
            per_page,
        }
    }

    /// The session store, for inspection.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}

/// Build the router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(run_search))
        .route("/save_result", post(save_result))
        .route("/delete_saved_result", post(delete_saved_result))
        .route("/clear_session", get(clear_session))
        .route("/summarize", get(summarize))
        .route("/health", get(health))
        .with_state(state)
}

/// Bind to the configured address and serve until the task is dropped.
///
/// # Errors
///
/// Returns [`AppError::Io`] if the listener cannot bind or the server fails.
pub async fn serve(config: &AppConfig, searcher: Arc<dyn Searcher>) -> Result<()> {
    config.validate()?;

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr()).await?;
    let local_addr = listener.local_addr()?;

    let store = SessionStore::with_limits(
        config.session.max_sessions,
        config.session.idle_timeout(),
    );
    let app = router(AppState::with_store(
        searcher,
        config.pagination.per_page,
        store,
    ));

    tracing::info!("scour listening on http://{local_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Session cookie
// ---------------------------------------------------------------------------

struct Session {
    id: Uuid,
    is_new: bool,
}

impl Session {
    fn from_headers(headers: &HeaderMap) -> Self {
        let existing = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .and_then(|(_, value)| Uuid::parse_str(value).ok());

        match existing {
            Some(id) => Self { id, is_new: false },
            None => Self {
                id: SessionStore::new_session_id(),
                is_new: true,
            },
        }
    }

    /// Attach a `Set-Cookie` header when the session was just created.
    fn respond(&self, response: impl IntoResponse) -> Response {
        let mut response = response.into_response();
        if self.is_new {
            let cookie = format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.id);
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
        }
        response
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct IndexParams {
    query: Option<String>,
    page: Option<usize>,
}

/// Body of `GET /`.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexView {
    pub query: Option<String>,
    pub page: usize,
    pub total_pages: usize,
    pub results: Vec<SearchResult>,
    pub saved: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchForm {
    query: String,
    #[serde(default)]
    engine: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SaveForm {
    result_title: Option<String>,
    result_link: Option<String>,
    result_source: Option<String>,
    result_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeleteForm {
    index: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SummarizeParams {
    url: String,
    sentences: Option<usize>,
}

/// Body of `GET /summarize`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryView {
    pub url: String,
    pub summary: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<IndexParams>,
) -> Response {
    let session = Session::from_headers(&headers);

    let query = params.query.filter(|q| !q.is_empty());
    if query.is_none() {
        state.store.clear_results(session.id);
    }

    let data = state.store.get(session.id);
    let page = paginate(&data.results, params.page.unwrap_or(1), state.per_page);

    session.respond(Json(IndexView {
        query,
        page: page.page,
        total_pages: page.total_pages,
        results: page.items,
        saved: data.saved,
    }))
}

async fn run_search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SearchForm>,
) -> Response {
    let session = Session::from_headers(&headers);
    let engine = form.engine.unwrap_or_default();

    tracing::trace!(query = %form.query, %engine, "search requested");
    let results = perform_search(state.searcher.as_ref(), &engine, &form.query).await;
    tracing::debug!(count = results.len(), "search stored in session");
    state.store.set_results(session.id, results);

    let location = format!("/?query={}&page=1", urlencoding::encode(&form.query));
    session.respond(Redirect::to(&location))
}

async fn save_result(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SaveForm>,
) -> Result<Response> {
    let session = Session::from_headers(&headers);
    let result = result_from_form(form)?;
    state.store.save_result(session.id, result)?;
    Ok(session.respond(Redirect::to("/")))
}

fn result_from_form(form: SaveForm) -> Result<SearchResult> {
    let invalid = || AppError::BadRequest("Invalid result data".into());
    let non_empty = |field: Option<String>| field.filter(|v| !v.is_empty());

    let title = non_empty(form.result_title).ok_or_else(invalid)?;
    let link = non_empty(form.result_link).ok_or_else(invalid)?;
    let source = non_empty(form.result_source).ok_or_else(invalid)?;
    let content_type = non_empty(form.result_type)
        .and_then(|t| ContentType::from_str(&t).ok())
        .ok_or_else(invalid)?;

    Ok(SearchResult {
        title,
        link,
        source,
        content_type,
    })
}

async fn delete_saved_result(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<DeleteForm>,
) -> Result<Response> {
    let session = Session::from_headers(&headers);

    let index: i64 = form
        .index
        .as_deref()
        .and_then(|raw| raw.trim().parse().ok())
        .ok_or_else(|| {
            tracing::warn!(index = ?form.index, "bad saved-result index");
            AppError::BadRequest("Error deleting saved result".into())
        })?;

    if let Ok(index) = usize::try_from(index) {
        state.store.delete_saved(session.id, index);
    }
    Ok(session.respond(Redirect::to("/")))
}

async fn clear_session(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let session = Session::from_headers(&headers);
    state.store.clear(session.id);
    session.respond(Redirect::to("/"))
}

async fn summarize(
    State(state): State<AppState>,
    Query(params): Query<SummarizeParams>,
) -> Json<SummaryView> {
    let sentences = params.sentences.unwrap_or(DEFAULT_SENTENCES);
    let summary = state.searcher.summarize(&params.url, sentences).await;
    Json(SummaryView {
        url: params.url,
        summary,
    })
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok"
    }))
}
