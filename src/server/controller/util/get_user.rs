use axum::http::HeaderMap;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::app::AppState,
        service::session::SessionService,
    },
};

/// Retrieves the user owning the session cookie of the request
///
/// # Arguments
/// - `state`: Application state with the identity provider client
/// - `headers`: Request headers carrying the `Cookie` header
///
/// # Returns
/// - `Ok(UserDto)`: Session accepted by the identity provider
/// - `Err(Error::AuthError(AuthError::SessionMissing))`: No session cookie in the request
/// - `Err(Error::AuthError(AuthError::SessionRejected))`: Identity provider rejected the session
/// - `Err(Error)`: Identity provider unreachable or failing
pub async fn get_user_from_session(state: &AppState, headers: &HeaderMap) -> Result<UserDto, Error> {
    let Some(token) = state.session_cookies.token(headers) else {
        return Err(Error::AuthError(AuthError::SessionMissing));
    };

    let user = SessionService::new(&state.identity).verify(&token).await?;

    tracing::debug!(user_id = %user.id, "Session verified");

    Ok(user)
}
