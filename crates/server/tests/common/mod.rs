//! Common test utilities for API testing with mocks.
//!
//! This module provides a test fixture that creates an in-process router
//! with a mock catalog and in-memory storage, so the whole HTTP surface can
//! be exercised without network access.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use reelscout_core::{
    load_config_from_str, testing::MockCatalog, KeyValueStore, MemoryStore, MovieApp,
    MovieCatalog, Presenter,
};
use reelscout_server::api::{create_router, WsBroadcaster};
use reelscout_server::presenter::ViewPresenter;
use reelscout_server::state::AppState;

/// Re-export fixtures for test convenience
pub use reelscout_core::testing::fixtures;

const TEST_CONFIG: &str = r#"
[catalog]
api_key = "test-key"

[storage]
backend = "memory"

[server]
host = "127.0.0.1"
port = 8080
"#;

/// Test fixture for API testing with mock dependencies.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_search() {
///     let fixture = TestFixture::new();
///     fixture.catalog.set_page(&MovieList::search("batman"), page).await;
///
///     let response = fixture.post("/api/v1/search", json!({ "query": "batman" })).await;
///
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock catalog - configure listing pages and failures
    pub catalog: MockCatalog,
    /// Backing store for favorites and watch history
    pub store: Arc<MemoryStore>,
    /// Application facade, for driving startup directly
    pub app: Arc<MovieApp>,
    /// Server-side view the handlers read from
    pub view: Arc<ViewPresenter>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with an empty mock catalog.
    pub fn new() -> Self {
        let config = load_config_from_str(TEST_CONFIG).expect("Failed to parse test config");

        let catalog = MockCatalog::new();
        let store = Arc::new(MemoryStore::new());
        let view = Arc::new(ViewPresenter::new(WsBroadcaster::default()));

        let app = Arc::new(MovieApp::new(
            Arc::new(catalog.clone()) as Arc<dyn MovieCatalog>,
            Arc::clone(&store) as Arc<dyn KeyValueStore>,
            Arc::clone(&view) as Arc<dyn Presenter>,
        ));

        let state = Arc::new(AppState::new(config, Arc::clone(&app), Arc::clone(&view)));
        let router = create_router(state);

        Self {
            router,
            catalog,
            store,
            app,
            view,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a POST request without a body.
    pub async fn post_empty(&self, path: &str) -> TestResponse {
        self.request("POST", path, None).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Send a GET request and return the raw body text.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        (status, String::from_utf8_lossy(&body_bytes).into_owned())
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        let request = request_builder.body(body).unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
