use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Session cookie is not present in request")]
    SessionMissing,
    #[error("Session cookie was rejected by the identity provider")]
    SessionRejected,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::SessionMissing => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::SessionRejected => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Invalid or expired session")
            }
        }
    }
}
