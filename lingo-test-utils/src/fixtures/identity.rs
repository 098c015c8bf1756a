//! Identity provider HTTP mock endpoint creation utilities.

use mockito::Mock;

use crate::{
    constant::{TEST_PROJECT_ID, TEST_SESSION_SECRET},
    fixtures::factory,
    TestContext,
};

pub struct IdentityFixtures<'a> {
    pub(crate) setup: &'a mut TestContext,
}

impl<'a> IdentityFixtures<'a> {
    /// Create a `GET /account` endpoint accepting only the test session secret.
    pub fn create_account_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", "/account")
            .match_header("x-appwrite-project", TEST_PROJECT_ID)
            .match_header("x-appwrite-session", TEST_SESSION_SECRET)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(factory::account().to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a `GET /account` endpoint rejecting every session with 401.
    pub fn create_rejecting_account_endpoint(&mut self) -> Mock {
        self.setup
            .server
            .mock("GET", "/account")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"User (role: guests) missing scope (account)","code":401}"#)
            .create()
    }

    /// Create a `DELETE /account/sessions/current` endpoint answering with `status`.
    pub fn create_delete_session_endpoint(&mut self, status: usize) -> Mock {
        self.setup
            .server
            .mock("DELETE", "/account/sessions/current")
            .match_header("x-appwrite-session", TEST_SESSION_SECRET)
            .with_status(status)
            .expect(1)
            .create()
    }
}
