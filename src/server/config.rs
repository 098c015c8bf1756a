//! Environment configuration.
//!
//! Every provider credential is mandatory: the server refuses to start when one is absent rather
//! than falling back to a built-in key. Base URLs default to the public provider hosts and can be
//! overridden, which is how tests point the gateway at a mock server.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

pub const DEFAULT_TAVUS_API_URL: &str = "https://tavusapi.com";
pub const DEFAULT_ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io";
pub const DEFAULT_GENAI_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GENAI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

#[derive(Clone, Debug)]
pub struct Config {
    pub identity_endpoint: String,
    pub identity_project_id: String,
    pub session_cookie_name: String,
    pub tavus_api_key: String,
    pub tavus_api_url: String,
    pub elevenlabs_api_key: String,
    pub elevenlabs_api_url: String,
    pub genai_api_key: String,
    pub genai_api_url: String,
    pub genai_model: String,
    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required =
            |key: &str| get(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let identity_project_id = required("IDENTITY_PROJECT_ID")?;
        let session_cookie_name = get("SESSION_COOKIE_NAME")
            .unwrap_or_else(|| format!("a_session_{}", identity_project_id.to_lowercase()));

        let bind_address = get("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            identity_endpoint: parse_url("IDENTITY_ENDPOINT", required("IDENTITY_ENDPOINT")?)?,
            identity_project_id,
            session_cookie_name,
            tavus_api_key: required("TAVUS_API_KEY")?,
            tavus_api_url: parse_url(
                "TAVUS_API_URL",
                get("TAVUS_API_URL").unwrap_or_else(|| DEFAULT_TAVUS_API_URL.to_string()),
            )?,
            elevenlabs_api_key: required("ELEVENLABS_API_KEY")?,
            elevenlabs_api_url: parse_url(
                "ELEVENLABS_API_URL",
                get("ELEVENLABS_API_URL").unwrap_or_else(|| DEFAULT_ELEVENLABS_API_URL.to_string()),
            )?,
            genai_api_key: required("GENAI_API_KEY")?,
            genai_api_url: parse_url(
                "GENAI_API_URL",
                get("GENAI_API_URL").unwrap_or_else(|| DEFAULT_GENAI_API_URL.to_string()),
            )?,
            genai_model: get("GENAI_MODEL").unwrap_or_else(|| DEFAULT_GENAI_MODEL.to_string()),
            bind_address,
        })
    }
}

/// Validates the scheme and strips trailing slashes so paths can be appended with `format!`.
fn parse_url(var: &str, value: String) -> Result<String, ConfigError> {
    let value = value.trim();

    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "expected an http:// or https:// URL".to_string(),
        });
    }

    Ok(value.trim_end_matches('/').to_string())
}
