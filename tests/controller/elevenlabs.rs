use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use lingo::server::controller::elevenlabs::{get_voices, health};
use lingo_test_utils::prelude::*;

use crate::util::{body_json, TestContextExt};

mod health {
    use super::*;

    /// Expect 200 healthy when the voice provider accepts the key
    #[tokio::test]
    async fn reports_healthy() -> Result<(), TestError> {
        let test = TestBuilder::new().with_elevenlabs_health(200).build().await?;

        let resp = health(State(test.to_app_state())).await.into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({ "status": "healthy", "service": "elevenlabs", "available": true })
        );

        Ok(())
    }

    /// Expect 503 unhealthy when the voice provider rejects the key
    #[tokio::test]
    async fn reports_unhealthy() -> Result<(), TestError> {
        let test = TestBuilder::new().with_elevenlabs_health(401).build().await?;

        let resp = health(State(test.to_app_state())).await.into_response();

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(resp).await;
        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["available"], false);

        Ok(())
    }
}

mod get_voices {
    use super::*;

    const VOICE_FIELDS: [&str; 7] = [
        "available_for_tiers",
        "category",
        "description",
        "name",
        "preview_url",
        "settings",
        "voice_id",
    ];

    /// Expect the reshaped catalog with exactly the exposed fields
    #[tokio::test]
    async fn returns_reshaped_voices() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_valid_session()
            .with_voices_endpoint(factory::voices(4), 1)
            .build()
            .await?;

        let result = get_voices(State(test.to_app_state()), test.session_headers()).await;

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        test.assert_mocks();

        let body = body_json(resp).await;
        let voices = body["voices"].as_array().unwrap();
        assert_eq!(body["total"], 4);
        assert_eq!(voices.len(), 4);
        for voice in voices {
            let mut fields: Vec<&str> = voice
                .as_object()
                .unwrap()
                .keys()
                .map(|k| k.as_str())
                .collect();
            fields.sort();
            assert_eq!(fields, VOICE_FIELDS);
        }

        Ok(())
    }

    /// Expect null tiers from the provider to be returned as an empty list
    #[tokio::test]
    async fn returns_empty_tiers_for_null_upstream_value() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_valid_session()
            .with_voices_endpoint(
                serde_json::json!({ "voices": [
                    { "voice_id": "v1", "name": "Rachel", "available_for_tiers": null }
                ]}),
                1,
            )
            .build()
            .await?;

        let result = get_voices(State(test.to_app_state()), test.session_headers()).await;

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["voices"][0]["available_for_tiers"], serde_json::json!([]));
        assert_eq!(body["voices"][0]["settings"], serde_json::Value::Null);

        Ok(())
    }

    /// Expect 401 with an error body without a session cookie
    #[tokio::test]
    async fn fails_without_session_cookie() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_voices_endpoint(factory::voices(1), 0)
            .build()
            .await?;

        let result = get_voices(State(test.to_app_state()), HeaderMap::new()).await;

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        test.assert_mocks();

        let body = body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({ "error": "Authentication required" })
        );

        Ok(())
    }

    /// Expect 401 when the identity provider rejects the session
    #[tokio::test]
    async fn fails_for_rejected_session() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_rejected_session()
            .with_voices_endpoint(factory::voices(1), 0)
            .build()
            .await?;

        let result = get_voices(State(test.to_app_state()), test.session_headers()).await;

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        test.assert_mocks();

        let body = body_json(resp).await;
        assert!(body["error"].is_string());

        Ok(())
    }
}
