use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        avatar::{ReplicaListDto, VideoStatusDto},
    },
    server::{
        controller::util::{get_user::get_user_from_session, path::validate_resource_id},
        error::Error,
        model::app::AppState,
        service::{avatar::AvatarService, health::HealthService},
    },
};

pub static TAVUS_TAG: &str = "tavus";

/// Reports whether the avatar provider accepts the server's API key
///
/// # Responses
/// - 200 (Success): Avatar provider available
/// - 503 (Service Unavailable): Avatar provider unreachable or rejecting the key
#[utoipa::path(
    get,
    path = "/api/tavus/health",
    tag = TAVUS_TAG,
    responses(
        (status = 200, description = "Avatar provider available", body = HealthDto),
        (status = 503, description = "Avatar provider unavailable", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let health = HealthService::tavus(&state.tavus).await;

    let status = if health.available {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(health))
}

/// Lists the avatar replicas available for lectures and interviews
///
/// # Responses
/// - 200 (Success): Replica listing
/// - 401 (Unauthorized): Session cookie missing or rejected
/// - 500 (Internal Server Error): Avatar provider unreachable or returned an unexpected payload
#[utoipa::path(
    get,
    path = "/api/tavus/replicas",
    tag = TAVUS_TAG,
    responses(
        (status = 200, description = "Replica listing", body = ReplicaListDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_replicas(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &headers).await?;

    let replicas = AvatarService::new(&state.tavus).list_replicas().await?;

    Ok((StatusCode::OK, Json(replicas)))
}

/// Returns the generation status of an avatar video
///
/// # Responses
/// - 200 (Success): Video status
/// - 400 (Bad Request): Malformed video ID
/// - 401 (Unauthorized): Session cookie missing or rejected
/// - 404 (Not Found): Video does not exist at the avatar provider
/// - 500 (Internal Server Error): Avatar provider unreachable or returned an unexpected payload
#[utoipa::path(
    get,
    path = "/api/tavus/videos/{video_id}",
    tag = TAVUS_TAG,
    params(
        ("video_id" = String, Path, description = "Avatar provider video ID")
    ),
    responses(
        (status = 200, description = "Video status", body = VideoStatusDto),
        (status = 400, description = "Invalid video ID", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Video not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_video(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(video_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &headers).await?;

    let video_id = validate_resource_id("video ID", &video_id)?;

    let video = AvatarService::new(&state.tavus)
        .get_video_status(video_id)
        .await?;

    Ok((StatusCode::OK, Json(video)))
}
