//! Voice provider (ElevenLabs) client.

use serde::Deserialize;

use crate::server::{
    error::Error,
    provider::{ensure_success, Provider},
};

pub const API_KEY_HEADER: &str = "xi-api-key";

#[derive(Debug, Clone, Deserialize)]
pub struct ElevenLabsVoice {
    pub voice_id: String,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub preview_url: Option<String>,
    /// `null` for voices without tier restrictions
    pub available_for_tiers: Option<Vec<String>>,
    pub settings: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ElevenLabsVoicePage {
    voices: Option<Vec<ElevenLabsVoice>>,
}

#[derive(Clone)]
pub struct ElevenLabsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ElevenLabsClient {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Requests the account behind the API key and returns the raw status.
    pub async fn probe(&self) -> Result<reqwest::StatusCode, Error> {
        let response = self
            .http
            .get(format!("{}/v1/user", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        Ok(response.status())
    }

    pub async fn list_voices(&self) -> Result<Vec<ElevenLabsVoice>, Error> {
        let response = self
            .http
            .get(format!("{}/v1/voices", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let page: ElevenLabsVoicePage = ensure_success(response, Provider::ElevenLabs, "Voices")?
            .json()
            .await?;

        Ok(page.voices.unwrap_or_default())
    }
}
