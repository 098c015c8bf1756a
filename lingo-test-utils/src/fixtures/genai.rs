//! Generative provider HTTP mock endpoint creation utilities.

use mockito::Mock;
use serde_json::Value;

use crate::{
    constant::{TEST_GENAI_API_KEY, TEST_GENAI_MODEL},
    TestContext,
};

pub struct GenAiFixtures<'a> {
    pub(crate) setup: &'a mut TestContext,
}

impl<'a> GenAiFixtures<'a> {
    pub fn create_generation_endpoint(&mut self, body: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock(
                "POST",
                format!("/v1beta/models/{}:generateContent", TEST_GENAI_MODEL).as_str(),
            )
            .match_header("x-goog-api-key", TEST_GENAI_API_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
