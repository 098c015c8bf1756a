//! Shared helpers for HTTP level tests.

use axum::{
    body::Body,
    http::{header::COOKIE, HeaderMap, HeaderValue},
    response::Response,
};
use lingo::server::{config::Config, model::app::AppState, startup};
use lingo_test_utils::TestContext;

/// Extension trait for TestContext to create an AppState wired to the mock server
pub trait TestContextExt {
    fn to_app_state(&self) -> AppState;
    fn session_headers(&self) -> HeaderMap;
}

impl TestContextExt for TestContext {
    fn to_app_state(&self) -> AppState {
        let env = self.env();
        let config = Config::from_lookup(|key| {
            env.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.clone())
        })
        .expect("mock server configuration should be valid");

        startup::build_app_state(&config, self.http.clone())
    }

    fn session_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&self.session_cookie()).expect("valid cookie header"),
        );
        headers
    }
}

/// Reads a JSON response body
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");

    serde_json::from_slice(&bytes).expect("JSON body")
}
