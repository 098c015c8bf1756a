//! Provider health probes.
//!
//! A provider is healthy when its probe answers with a 2xx status. Transport failures and any
//! other status count as unhealthy; the probe itself never errors.

use std::future::Future;

use crate::{
    model::api::HealthDto,
    server::{
        error::Error,
        provider::{elevenlabs::ElevenLabsClient, tavus::TavusClient, Provider},
    },
};

pub struct HealthService;

impl HealthService {
    pub async fn tavus(client: &TavusClient) -> HealthDto {
        Self::probe(Provider::Tavus, client.probe()).await
    }

    pub async fn elevenlabs(client: &ElevenLabsClient) -> HealthDto {
        Self::probe(Provider::ElevenLabs, client.probe()).await
    }

    async fn probe<F>(provider: Provider, probe: F) -> HealthDto
    where
        F: Future<Output = Result<reqwest::StatusCode, Error>>,
    {
        match probe.await {
            Ok(status) if status.is_success() => HealthDto::healthy(provider.as_str()),
            Ok(status) => {
                tracing::warn!(
                    provider = %provider,
                    status = %status,
                    "Health probe returned non-success status"
                );

                HealthDto::unhealthy(provider.as_str())
            }
            Err(err) => {
                tracing::warn!(provider = %provider, "Health probe failed: {}", err);

                HealthDto::unhealthy(provider.as_str())
            }
        }
    }
}
