//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns the mock
//! provider server and an HTTP client, and knows how to describe itself as environment variables so
//! tests can build the real configuration against the mock server.

use mockito::{Mock, Server, ServerGuard};

use crate::{
    constant::{
        TEST_ELEVENLABS_API_KEY, TEST_GENAI_API_KEY, TEST_GENAI_MODEL, TEST_PROJECT_ID,
        TEST_SESSION_COOKIE, TEST_SESSION_SECRET, TEST_TAVUS_API_KEY,
    },
    error::TestError,
};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new().with_valid_session().build().await?;
///
/// let client = IdentityClient::new(test.http.clone(), &test.url(), TEST_PROJECT_ID);
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// HTTP client for provider clients under test
    pub http: reqwest::Client,

    /// Mock HTTP server standing in for every provider
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context with a fresh mock server.
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let http = reqwest::Client::builder().build()?;

        Ok(TestContext {
            http,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock server.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Environment variables configuring every provider against the mock server.
    ///
    /// Intended for `Config::from_lookup`.
    pub fn env(&self) -> Vec<(&'static str, String)> {
        let url = self.url();

        vec![
            ("IDENTITY_ENDPOINT", url.clone()),
            ("IDENTITY_PROJECT_ID", TEST_PROJECT_ID.to_string()),
            ("SESSION_COOKIE_NAME", TEST_SESSION_COOKIE.to_string()),
            ("TAVUS_API_KEY", TEST_TAVUS_API_KEY.to_string()),
            ("TAVUS_API_URL", url.clone()),
            ("ELEVENLABS_API_KEY", TEST_ELEVENLABS_API_KEY.to_string()),
            ("ELEVENLABS_API_URL", url.clone()),
            ("GENAI_API_KEY", TEST_GENAI_API_KEY.to_string()),
            ("GENAI_API_URL", url),
            ("GENAI_MODEL", TEST_GENAI_MODEL.to_string()),
        ]
    }

    /// `Cookie` header value carrying the test session secret.
    pub fn session_cookie(&self) -> String {
        format!("{}={}", TEST_SESSION_COOKIE, TEST_SESSION_SECRET)
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
