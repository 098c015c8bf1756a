//! Error types for the Lingo server application.
//!
//! Request errors are split by domain (authentication, upstream providers) and aggregated into a
//! single [`Error`] type. Configuration errors are reported at startup and never reach a handler.
//! Every error implements `IntoResponse` so handlers can return `Result<impl IntoResponse, Error>`
//! and rely on `?` for the HTTP mapping. All error bodies use the `{ "error": "..." }` shape of
//! [`ErrorDto`].

pub mod auth;
pub mod config;
pub mod provider;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, provider::ProviderError},
};

/// Main error type for the Lingo server application.
///
/// Aggregates the domain-specific error types and external library errors. `#[from]` conversions
/// allow the `?` operator to lift any of them into `Error`.
///
/// # Error Categories
/// - Authentication errors (missing or rejected session cookie)
/// - Provider errors (upstream not found, upstream failure, invalid resource identifiers)
/// - HTTP client errors (transport failures, undecodable bodies)
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication error (session cookie missing or rejected by the identity provider).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Upstream provider error (404, other non-2xx status, invalid identifiers).
    #[error(transparent)]
    ProviderError(#[from] ProviderError),
    /// Parse error (an upstream payload did not have the expected shape).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Outbound HTTP client error (connection, timeout, body decoding).
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid resource identifier in the request path
/// - 401 Unauthorized - Session cookie missing or rejected
/// - 404 Not Found - Upstream resource does not exist
/// - Upstream status - Any other non-2xx status returned by a provider
/// - 500 Internal Server Error - Everything else (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::ProviderError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking upstream
/// details or credentials.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
