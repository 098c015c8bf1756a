//! Declarative test builder.
//!
//! `TestBuilder` collects the upstream endpoints a test needs; all of them are registered on a fresh
//! mock server during the final `build()` call.

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Custom mock endpoints
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Identity provider
    valid_session: bool,
    rejected_session: bool,
    session_deletions: Vec<usize>, // response status

    // Avatar provider
    tavus_health: Vec<usize>,
    replica_endpoints: Vec<(Value, usize)>, // (body, expected_requests)
    video_endpoints: Vec<(String, Value, usize)>,
    conversation_endpoints: Vec<(String, Value, usize)>,

    // Voice provider
    elevenlabs_health: Vec<usize>,
    voice_endpoints: Vec<(Value, usize)>,

    // Generative provider
    generation_endpoints: Vec<(Value, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            valid_session: false,
            rejected_session: false,
            session_deletions: Vec::new(),
            tavus_health: Vec::new(),
            replica_endpoints: Vec::new(),
            video_endpoints: Vec::new(),
            conversation_endpoints: Vec::new(),
            elevenlabs_health: Vec::new(),
            voice_endpoints: Vec::new(),
            generation_endpoints: Vec::new(),
        }
    }

    /// Accept the test session secret at `GET /account`.
    ///
    /// The mock expects exactly one verification request.
    pub fn with_valid_session(mut self) -> Self {
        self.valid_session = true;
        self
    }

    /// Reject every session at `GET /account` with 401.
    pub fn with_rejected_session(mut self) -> Self {
        self.rejected_session = true;
        self
    }

    /// Answer `DELETE /account/sessions/current` with `status`.
    pub fn with_session_deletion(mut self, status: usize) -> Self {
        self.session_deletions.push(status);
        self
    }

    /// Answer `HEAD /v2/replicas` with `status`.
    pub fn with_tavus_health(mut self, status: usize) -> Self {
        self.tavus_health.push(status);
        self
    }

    pub fn with_replicas_endpoint(mut self, body: Value, expected_requests: usize) -> Self {
        self.replica_endpoints.push((body, expected_requests));
        self
    }

    pub fn with_video_endpoint(
        mut self,
        video_id: impl Into<String>,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.video_endpoints
            .push((video_id.into(), body, expected_requests));
        self
    }

    pub fn with_conversation_endpoint(
        mut self,
        conversation_id: impl Into<String>,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.conversation_endpoints
            .push((conversation_id.into(), body, expected_requests));
        self
    }

    /// Answer `GET /v1/user` with `status`.
    pub fn with_elevenlabs_health(mut self, status: usize) -> Self {
        self.elevenlabs_health.push(status);
        self
    }

    pub fn with_voices_endpoint(mut self, body: Value, expected_requests: usize) -> Self {
        self.voice_endpoints.push((body, expected_requests));
        self
    }

    pub fn with_generation_endpoint(mut self, body: Value, expected_requests: usize) -> Self {
        self.generation_endpoints.push((body, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context, registering every configured endpoint.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Mock server running with all endpoints registered
    /// - `Err(TestError::HttpClientError)` - HTTP client could not be built
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // Custom endpoints are created first so they take precedence over helper endpoints on the
        // same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        if self.valid_session {
            mocks.push(setup.identity().create_account_endpoint(1));
        }

        if self.rejected_session {
            mocks.push(setup.identity().create_rejecting_account_endpoint());
        }

        for status in self.session_deletions {
            mocks.push(setup.identity().create_delete_session_endpoint(status));
        }

        for status in self.tavus_health {
            mocks.push(setup.tavus().create_health_endpoint(status));
        }

        for (body, expected) in self.replica_endpoints {
            mocks.push(setup.tavus().create_replicas_endpoint(body, expected));
        }

        for (video_id, body, expected) in self.video_endpoints {
            mocks.push(setup.tavus().create_video_endpoint(&video_id, body, expected));
        }

        for (conversation_id, body, expected) in self.conversation_endpoints {
            mocks.push(
                setup
                    .tavus()
                    .create_conversation_endpoint(&conversation_id, body, expected),
            );
        }

        for status in self.elevenlabs_health {
            mocks.push(setup.elevenlabs().create_health_endpoint(status));
        }

        for (body, expected) in self.voice_endpoints {
            mocks.push(setup.elevenlabs().create_voices_endpoint(body, expected));
        }

        for (body, expected) in self.generation_endpoints {
            mocks.push(setup.genai().create_generation_endpoint(body, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
