use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::IntoResponse,
};
use lingo::server::controller::auth::{get_user, logout};
use lingo_test_utils::prelude::*;

use crate::util::{body_json, TestContextExt};

mod logout {
    use super::*;

    fn set_cookies(headers: &HeaderMap) -> Vec<String> {
        headers
            .get_all(SET_COOKIE)
            .iter()
            .map(|value| value.to_str().unwrap().to_string())
            .collect()
    }

    /// Expect success and both cookies cleared after deleting the upstream session
    #[tokio::test]
    async fn clears_cookies_after_deleting_session() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_session_deletion(204)
            .build()
            .await?;

        let resp = logout(State(test.to_app_state()), test.session_headers())
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let cookies = set_cookies(resp.headers());
        assert_eq!(cookies.len(), 2);
        assert!(cookies[0].starts_with(&format!("{}=;", TEST_SESSION_COOKIE)));
        assert!(cookies[1].starts_with(&format!("{}_legacy=;", TEST_SESSION_COOKIE)));
        assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));
        test.assert_mocks();

        let body = body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "success": true }));

        Ok(())
    }

    /// Expect success and cleared cookies even when the upstream deletion fails
    #[tokio::test]
    async fn succeeds_when_upstream_deletion_fails() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_session_deletion(500)
            .build()
            .await?;

        let resp = logout(State(test.to_app_state()), test.session_headers())
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(set_cookies(resp.headers()).len(), 2);

        let body = body_json(resp).await;
        assert_eq!(body["success"], true);

        Ok(())
    }

    /// Expect success and cleared cookies when the identity provider is unreachable
    #[tokio::test]
    async fn succeeds_when_identity_provider_unreachable() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let mut state = test.to_app_state();
        state.identity = lingo::server::provider::identity::IdentityClient::new(
            test.http.clone(),
            "http://127.0.0.1:1",
            TEST_PROJECT_ID,
        );

        let resp = logout(State(state), test.session_headers())
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(set_cookies(resp.headers()).len(), 2);

        Ok(())
    }

    /// Expect success and cleared cookies without a session cookie
    #[tokio::test]
    async fn succeeds_without_session_cookie() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let resp = logout(State(test.to_app_state()), HeaderMap::new())
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(set_cookies(resp.headers()).len(), 2);

        Ok(())
    }
}

mod get_user {
    use super::*;

    /// Expect the current user for a valid session
    #[tokio::test]
    async fn returns_current_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_valid_session().build().await?;

        let result = get_user(State(test.to_app_state()), test.session_headers()).await;

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        test.assert_mocks();

        let body = body_json(resp).await;
        assert_eq!(body["id"], TEST_USER_ID);
        assert_eq!(body["email"], TEST_USER_EMAIL);

        Ok(())
    }

    /// Expect 401 without a session cookie
    #[tokio::test]
    async fn fails_without_session_cookie() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = get_user(State(test.to_app_state()), HeaderMap::new()).await;

        assert!(result.is_err());
        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect 500 when the identity provider fails while verifying the session
    #[tokio::test]
    async fn fails_when_identity_provider_errors() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| server.mock("GET", "/account").with_status(503).create())
            .build()
            .await?;

        let result = get_user(State(test.to_app_state()), test.session_headers()).await;

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(resp).await;
        assert_eq!(body["error"], "Internal server error");

        Ok(())
    }
}
