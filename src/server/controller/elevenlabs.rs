use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        voice::VoiceListDto,
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::{health::HealthService, voice::VoiceService},
    },
};

pub static ELEVENLABS_TAG: &str = "elevenlabs";

/// Reports whether the voice provider accepts the server's API key
///
/// # Responses
/// - 200 (Success): Voice provider available
/// - 503 (Service Unavailable): Voice provider unreachable or rejecting the key
#[utoipa::path(
    get,
    path = "/api/elevenlabs/health",
    tag = ELEVENLABS_TAG,
    responses(
        (status = 200, description = "Voice provider available", body = HealthDto),
        (status = 503, description = "Voice provider unavailable", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let health = HealthService::elevenlabs(&state.elevenlabs).await;

    let status = if health.available {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(health))
}

/// Lists the voices available for lecture narration
///
/// # Responses
/// - 200 (Success): Voice catalog
/// - 401 (Unauthorized): Session cookie missing or rejected
/// - 500 (Internal Server Error): Voice provider unreachable or returned an unexpected payload
#[utoipa::path(
    get,
    path = "/api/elevenlabs/voices",
    tag = ELEVENLABS_TAG,
    responses(
        (status = 200, description = "Voice catalog", body = VoiceListDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_voices(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &headers).await?;

    let voices = VoiceService::new(&state.elevenlabs).list_voices().await?;

    Ok((StatusCode::OK, Json(voices)))
}
