//! Drives the HTTP front-end in-process with a stub searcher.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use scour::web::{IndexView, SESSION_COOKIE, SummaryView};
use scour::{AppState, EngineChoice, Searcher, SessionStore, router};
use scour_search::{ContentType, SearchResult};
use tower::ServiceExt;

/// Returns `count` results per search and records each choice it was given.
struct StubSearcher {
    count: usize,
    calls: Mutex<Vec<(EngineChoice, String)>>,
}

impl StubSearcher {
    fn new(count: usize) -> Arc<Self> {
        Arc::new(Self {
            count,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(EngineChoice, String)> {
        self.calls.lock().expect("lock").clone()
    }
}

#[async_trait]
impl Searcher for StubSearcher {
    async fn search(&self, choice: EngineChoice, query: &str) -> Vec<SearchResult> {
        self.calls
            .lock()
            .expect("lock")
            .push((choice, query.to_string()));
        (0..self.count)
            .map(|i| SearchResult {
                title: format!("{query} #{i}"),
                link: format!("https://example.org/{i}"),
                source: "example.org".into(),
                content_type: ContentType::Article,
            })
            .collect()
    }

    async fn summarize(&self, url: &str, sentences: usize) -> Option<String> {
        url.contains("article")
            .then(|| format!("{sentences} sentences of {url}"))
    }
}

fn app(searcher: Arc<StubSearcher>, per_page: usize) -> Router {
    router(AppState::new(searcher, per_page))
}

fn form(uri: &str, cookie: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .expect("request")
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

async fn json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

async fn text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8_lossy(&bytes).into_owned()
}

fn cookie() -> String {
    format!("{SESSION_COOKIE}={}", uuid::Uuid::new_v4())
}

#[tokio::test]
async fn health_is_ok() {
    let response = app(StubSearcher::new(0), 10)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn first_visit_sets_session_cookie() {
    let response = app(StubSearcher::new(0), 10)
        .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(set_cookie.starts_with(SESSION_COOKIE));
}

#[tokio::test]
async fn search_redirects_and_pages_results() {
    let searcher = StubSearcher::new(25);
    let app = app(searcher.clone(), 10);
    let cookie = cookie();

    let response = app
        .clone()
        .oneshot(form("/", &cookie, "query=deep+learning&engine=scholar"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?query=deep%20learning&page=1");
    // Returning session: no new cookie.
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    assert_eq!(
        searcher.calls(),
        vec![(
            EngineChoice::One(scour_search::Engine::GoogleScholar),
            "deep learning".to_string()
        )]
    );

    let first: IndexView = json(
        app.clone()
            .oneshot(get("/?query=deep%20learning&page=1", &cookie))
            .await
            .expect("response"),
    )
    .await;
    assert_eq!(first.query.as_deref(), Some("deep learning"));
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.results.len(), 10);
    assert_eq!(first.results[0].title, "deep learning #0");

    let last: IndexView = json(
        app.oneshot(get("/?query=deep%20learning&page=3", &cookie))
            .await
            .expect("response"),
    )
    .await;
    assert_eq!(last.page, 3);
    assert_eq!(last.results.len(), 5);
    assert_eq!(last.results[0].title, "deep learning #20");
}

#[tokio::test]
async fn search_all_uses_every_source() {
    let searcher = StubSearcher::new(1);
    let response = app(searcher.clone(), 10)
        .oneshot(form("/", &cookie(), "query=rust&engine=all"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(searcher.calls()[0].0, EngineChoice::All);
}

#[tokio::test]
async fn unknown_engine_stores_nothing() {
    let searcher = StubSearcher::new(5);
    let app = app(searcher.clone(), 10);
    let cookie = cookie();

    app.clone()
        .oneshot(form("/", &cookie, "query=rust&engine=altavista"))
        .await
        .expect("response");
    assert!(searcher.calls().is_empty());

    let view: IndexView = json(
        app.oneshot(get("/?query=rust", &cookie))
            .await
            .expect("response"),
    )
    .await;
    assert!(view.results.is_empty());
    assert_eq!(view.total_pages, 0);
}

#[tokio::test]
async fn index_without_query_clears_results() {
    let app = app(StubSearcher::new(3), 10);
    let cookie = cookie();

    app.clone()
        .oneshot(form("/", &cookie, "query=rust&engine=bing"))
        .await
        .expect("response");

    let view: IndexView = json(app.clone().oneshot(get("/", &cookie)).await.expect("response")).await;
    assert!(view.query.is_none());
    assert!(view.results.is_empty());

    let again: IndexView = json(
        app.oneshot(get("/?query=rust", &cookie))
            .await
            .expect("response"),
    )
    .await;
    assert!(again.results.is_empty());
}

#[tokio::test]
async fn save_delete_and_clear_saved_results() {
    let app = app(StubSearcher::new(0), 10);
    let cookie = cookie();

    for title in ["First", "Second"] {
        let body = format!(
            "result_title={title}&result_link=https%3A%2F%2Farxiv.org%2Fabs%2F1&result_source=arXiv&result_type=Research+Paper"
        );
        let response = app
            .clone()
            .oneshot(form("/save_result", &cookie, &body))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }

    let view: IndexView = json(app.clone().oneshot(get("/", &cookie)).await.expect("response")).await;
    assert_eq!(view.saved.len(), 2);
    assert_eq!(view.saved[0].content_type, ContentType::ResearchPaper);

    // Out of range and negative indexes are ignored.
    for index in ["7", "-1"] {
        let response = app
            .clone()
            .oneshot(form("/delete_saved_result", &cookie, &format!("index={index}")))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    app.clone()
        .oneshot(form("/delete_saved_result", &cookie, "index=0"))
        .await
        .expect("response");
    let view: IndexView = json(app.clone().oneshot(get("/", &cookie)).await.expect("response")).await;
    assert_eq!(view.saved.len(), 1);
    assert_eq!(view.saved[0].title, "Second");

    let response = app
        .clone()
        .oneshot(get("/clear_session", &cookie))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let view: IndexView = json(app.oneshot(get("/", &cookie)).await.expect("response")).await;
    assert!(view.saved.is_empty());
}

#[tokio::test]
async fn save_with_missing_field_is_bad_request() {
    let response = app(StubSearcher::new(0), 10)
        .oneshot(form(
            "/save_result",
            &cookie(),
            "result_title=T&result_link=https%3A%2F%2Fx%2F&result_type=Article",
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(text(response).await, "Invalid result data");
}

#[tokio::test]
async fn delete_with_bad_index_is_bad_request() {
    let response = app(StubSearcher::new(0), 10)
        .oneshot(form("/delete_saved_result", &cookie(), "index=first"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn summarize_uses_default_sentence_count() {
    let app = app(StubSearcher::new(0), 10);

    let view: SummaryView = json(
        app.clone()
            .oneshot(get("/summarize?url=https%3A%2F%2Fnews.example%2Farticle", &cookie()))
            .await
            .expect("response"),
    )
    .await;
    assert_eq!(
        view.summary.as_deref(),
        Some("3 sentences of https://news.example/article")
    );

    let view: SummaryView = json(
        app.oneshot(get("/summarize?url=https%3A%2F%2Fnews.example%2Fpaywall&sentences=1", &cookie()))
            .await
            .expect("response"),
    )
    .await;
    assert!(view.summary.is_none());
}

#[tokio::test]
async fn cookieless_searches_do_not_grow_sessions_without_bound() {
    let store = SessionStore::with_limits(32, Duration::from_secs(3600));
    let app = router(AppState::with_store(StubSearcher::new(1), 10, store.clone()));

    for _ in 0..1000 {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("query=x&engine=bing"))
            .expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let live = store.len();
    assert!(live <= 32, "live sessions: {live}");
}
