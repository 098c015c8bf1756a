//! Voice provider HTTP mock endpoint creation utilities.

use mockito::Mock;
use serde_json::Value;

use crate::{constant::TEST_ELEVENLABS_API_KEY, TestContext};

pub struct ElevenLabsFixtures<'a> {
    pub(crate) setup: &'a mut TestContext,
}

impl<'a> ElevenLabsFixtures<'a> {
    /// Create a `GET /v1/user` endpoint answering with `status`.
    pub fn create_health_endpoint(&mut self, status: usize) -> Mock {
        self.setup
            .server
            .mock("GET", "/v1/user")
            .match_header("xi-api-key", TEST_ELEVENLABS_API_KEY)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"subscription":{"tier":"starter"}}"#)
            .create()
    }

    pub fn create_voices_endpoint(&mut self, body: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", "/v1/voices")
            .match_header("xi-api-key", TEST_ELEVENLABS_API_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
