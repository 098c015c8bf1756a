use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Availability of an upstream provider as reported by the health endpoints
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct HealthDto {
    /// Either `healthy` or `unhealthy`
    pub status: String,
    /// Name of the probed provider, e.g. `tavus`
    pub service: String,
    /// Whether the provider answered the probe successfully
    pub available: bool,
}

impl HealthDto {
    pub fn healthy(service: &str) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.to_string(),
            available: true,
        }
    }

    pub fn unhealthy(service: &str) -> Self {
        Self {
            status: "unhealthy".to_string(),
            service: service.to_string(),
            available: false,
        }
    }
}

/// The response after logging out
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct LogoutDto {
    pub success: bool,
}
