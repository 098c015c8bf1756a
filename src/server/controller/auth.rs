use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{AppendHeaders, IntoResponse},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, LogoutDto},
        user::UserDto,
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::session::SessionService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Logs the user out by deleting their session and clearing the session cookies
///
/// The upstream session deletion is best effort: cookies are cleared and success is reported even
/// when the identity provider fails or no session cookie was sent.
///
/// # Responses
/// - 200 (Success): Session cookies cleared
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cookies cleared", body = LogoutDto),
    ),
)]
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let token = state.session_cookies.token(&headers);

    SessionService::new(&state.identity)
        .logout(token.as_deref())
        .await;

    let [primary, legacy] = state.session_cookies.removal_cookies();

    (
        StatusCode::OK,
        AppendHeaders([
            (SET_COOKIE, primary.to_string()),
            (SET_COOKIE, legacy.to_string()),
        ]),
        Json(LogoutDto { success: true }),
    )
}

/// Returns the user owning the current session
///
/// # Responses
/// - 200 (Success): Session is valid
/// - 401 (Unauthorized): Session cookie missing or rejected by the identity provider
/// - 500 (Internal Server Error): Identity provider unreachable or failing
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &headers).await?;

    Ok((StatusCode::OK, Json(user)))
}
