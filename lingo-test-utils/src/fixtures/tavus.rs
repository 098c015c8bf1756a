//! Avatar provider HTTP mock endpoint creation utilities.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{constant::TEST_TAVUS_API_KEY, TestContext};

pub struct TavusFixtures<'a> {
    pub(crate) setup: &'a mut TestContext,
}

impl<'a> TavusFixtures<'a> {
    /// Create a `HEAD /v2/replicas` endpoint answering with `status`.
    pub fn create_health_endpoint(&mut self, status: usize) -> Mock {
        self.setup
            .server
            .mock("HEAD", "/v2/replicas")
            .match_header("x-api-key", TEST_TAVUS_API_KEY)
            .with_status(status)
            .create()
    }

    pub fn create_replicas_endpoint(&mut self, body: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", "/v2/replicas")
            .match_header("x-api-key", TEST_TAVUS_API_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    pub fn create_video_endpoint(
        &mut self,
        video_id: &str,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", format!("/v2/videos/{}", video_id).as_str())
            .match_header("x-api-key", TEST_TAVUS_API_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a `GET /v2/conversations/{id}?verbose=true` endpoint.
    pub fn create_conversation_endpoint(
        &mut self,
        conversation_id: &str,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(
                "GET",
                format!("/v2/conversations/{}", conversation_id).as_str(),
            )
            .match_query(Matcher::UrlEncoded("verbose".into(), "true".into()))
            .match_header("x-api-key", TEST_TAVUS_API_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
