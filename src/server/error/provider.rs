//! Upstream provider error types.
//!
//! These errors describe how a third-party API answered a proxied request. They map onto the
//! gateway's HTTP contract: a provider 404 becomes a 404, any other non-2xx status is forwarded
//! with a generic message, and a malformed identifier in the inbound path becomes a 400 before
//! any upstream call is made.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{
    error::{error_response, InternalServerError},
    provider::Provider,
};

/// Provider error type.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider answered 404 for the requested resource.
    ///
    /// # Fields
    /// - `provider` - Which upstream service was called
    /// - `resource` - Human readable resource name used in the response, e.g. `Video`
    #[error("{resource} not found at {provider}")]
    NotFound {
        provider: Provider,
        resource: &'static str,
    },

    /// The provider answered with a non-2xx status other than 404.
    ///
    /// The status is forwarded to the client as-is with a generic message.
    #[error("{provider} responded with status {status} while fetching {resource}")]
    Upstream {
        provider: Provider,
        resource: &'static str,
        status: StatusCode,
    },

    /// The provider answered with a status the gateway cannot interpret for this operation.
    ///
    /// Used where no status can be forwarded meaningfully, e.g. the identity provider failing
    /// while a session is being verified.
    #[error("{provider} responded with unexpected status {status}")]
    UnexpectedStatus {
        provider: Provider,
        status: StatusCode,
    },

    /// A resource identifier taken from the request path failed validation.
    #[error("Invalid {field}: {value:?}")]
    InvalidIdentifier { field: &'static str, value: String },
}

impl IntoResponse for ProviderError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { resource, .. } => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            Self::Upstream {
                resource, status, ..
            } => {
                tracing::warn!("{}", self);

                error_response(status, format!("Failed to fetch {}", resource.to_lowercase()))
            }
            Self::UnexpectedStatus { .. } => InternalServerError(self).into_response(),
            Self::InvalidIdentifier { field, .. } => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, format!("Invalid {}", field))
            }
        }
    }
}
