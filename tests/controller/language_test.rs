use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use lingo::server::controller::language_test::get_conversation;
use lingo_test_utils::prelude::*;

use crate::util::{body_json, TestContextExt};

/// Expect conversation details with the spoken turns of the transcript
#[tokio::test]
async fn returns_conversation_with_transcript() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_valid_session()
        .with_conversation_endpoint("c_1", factory::conversation("c_1", true), 1)
        .build()
        .await?;

    let result = get_conversation(
        State(test.to_app_state()),
        test.session_headers(),
        Path("c_1".to_string()),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    test.assert_mocks();

    let body = body_json(resp).await;
    assert_eq!(body["conversation_id"], "c_1");
    assert_eq!(body["status"], "ended");
    assert_eq!(
        body["transcript"],
        serde_json::json!([
            { "role": "assistant", "content": "¿Cómo te llamas?" },
            { "role": "user", "content": "Me llamo Ana." }
        ])
    );
    assert!(body.get("callback_url").is_none());

    Ok(())
}

/// Expect an empty transcript before the transcription event arrives
#[tokio::test]
async fn returns_empty_transcript_before_transcription() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_valid_session()
        .with_conversation_endpoint("c_2", factory::conversation("c_2", false), 1)
        .build()
        .await?;

    let result = get_conversation(
        State(test.to_app_state()),
        test.session_headers(),
        Path("c_2".to_string()),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["transcript"], serde_json::json!([]));

    Ok(())
}

/// Expect a null event log from the provider to yield an empty transcript
#[tokio::test]
async fn returns_empty_transcript_for_null_events() -> Result<(), TestError> {
    let mut conversation = factory::conversation("c_3", true);
    conversation["events"] = serde_json::Value::Null;
    let test = TestBuilder::new()
        .with_valid_session()
        .with_conversation_endpoint("c_3", conversation, 1)
        .build()
        .await?;

    let result = get_conversation(
        State(test.to_app_state()),
        test.session_headers(),
        Path("c_3".to_string()),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["transcript"], serde_json::json!([]));

    Ok(())
}

/// Expect 401 when the identity provider rejects the session
#[tokio::test]
async fn fails_for_rejected_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_rejected_session()
        .with_conversation_endpoint("c_1", factory::conversation("c_1", true), 0)
        .build()
        .await?;

    let result = get_conversation(
        State(test.to_app_state()),
        test.session_headers(),
        Path("c_1".to_string()),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    test.assert_mocks();

    let body = body_json(resp).await;
    assert_eq!(body["error"], "Invalid or expired session");

    Ok(())
}

/// Expect 401 without a session cookie
#[tokio::test]
async fn fails_without_session_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_conversation(
        State(test.to_app_state()),
        HeaderMap::new(),
        Path("c_1".to_string()),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "Authentication required");

    Ok(())
}

/// Expect 400 for an over-long conversation identifier
#[tokio::test]
async fn fails_for_invalid_conversation_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_valid_session().build().await?;

    let result = get_conversation(
        State(test.to_app_state()),
        test.session_headers(),
        Path("c".repeat(129)),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "Invalid conversation ID");

    Ok(())
}
