//! Requests dispatched through the full router.

use axum::{
    body::Body,
    http::{header::COOKIE, Method, Request, StatusCode},
};
use lingo::server::router;
use lingo_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{body_json, TestContextExt};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Expect the exact healthy body from the avatar health route
#[tokio::test]
async fn tavus_health_reports_healthy() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tavus_health(200).build().await?;
    let app = router::routes().with_state(test.to_app_state());

    let resp = app.oneshot(get("/api/tavus/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({ "status": "healthy", "service": "tavus", "available": true })
    );

    Ok(())
}

/// Expect the exact authentication error body from a protected route
#[tokio::test]
async fn voices_require_session_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = router::routes().with_state(test.to_app_state());

    let resp = app.oneshot(get("/api/elevenlabs/voices")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "error": "Authentication required" }));

    Ok(())
}

/// Expect path parameters to reach the conversation handler
#[tokio::test]
async fn routes_conversation_path_parameter() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_valid_session()
        .with_conversation_endpoint("c_9", factory::conversation("c_9", true), 1)
        .build()
        .await?;
    let app = router::routes().with_state(test.to_app_state());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/language-test/conversation/c_9")
        .header(COOKIE, test.session_cookie())
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    test.assert_mocks();

    let body = body_json(resp).await;
    assert_eq!(body["conversation_id"], "c_9");

    Ok(())
}

/// Expect logout to be accepted only as POST
#[tokio::test]
async fn logout_rejects_get() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = router::routes().with_state(test.to_app_state());

    let resp = app.oneshot(get("/api/auth/logout")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}

/// Expect the OpenAPI document to list every API route
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = router::routes().with_state(test.to_app_state());

    let resp = app.oneshot(get("/api/docs/openapi.json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/api/auth/logout",
        "/api/auth/user",
        "/api/elevenlabs/health",
        "/api/elevenlabs/voices",
        "/api/tavus/health",
        "/api/tavus/replicas",
        "/api/tavus/videos/{video_id}",
        "/api/language-test/conversation/{conversation_id}",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }

    Ok(())
}
