//! Clients for the third-party APIs the gateway proxies.
//!
//! Each client is a cheap-to-clone handle holding the shared `reqwest::Client`, the provider's base
//! URL and its server-held credential. Clients return the provider's own payload types; reshaping
//! into API DTOs happens in the service layer.

pub mod elevenlabs;
pub mod genai;
pub mod identity;
pub mod tavus;

use std::fmt;

use axum::http::StatusCode;

use crate::server::error::{provider::ProviderError, Error};

/// Upstream services the gateway talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Identity,
    Tavus,
    ElevenLabs,
    GenAi,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Tavus => "tavus",
            Self::ElevenLabs => "elevenlabs",
            Self::GenAi => "genai",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a non-2xx upstream status into a [`ProviderError`].
///
/// 404 becomes `NotFound`, everything else `Upstream` carrying the original status.
pub(crate) fn ensure_success(
    response: reqwest::Response,
    provider: Provider,
    resource: &'static str,
) -> Result<reqwest::Response, Error> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        return Err(ProviderError::NotFound { provider, resource }.into());
    }

    Err(ProviderError::Upstream {
        provider,
        resource,
        status,
    }
    .into())
}
