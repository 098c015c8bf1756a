//! Avatar video provider (Tavus) client.

use serde::Deserialize;

use crate::server::{
    error::Error,
    provider::{ensure_success, Provider},
};

pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Clone, Deserialize)]
pub struct TavusReplica {
    pub replica_id: String,
    pub replica_name: Option<String>,
    pub thumbnail_video_url: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TavusReplicaPage {
    data: Option<Vec<TavusReplica>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TavusVideo {
    pub video_id: String,
    pub video_name: Option<String>,
    pub status: Option<String>,
    pub download_url: Option<String>,
    pub hosted_url: Option<String>,
    pub stream_url: Option<String>,
    pub status_details: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TavusConversation {
    pub conversation_id: String,
    pub conversation_name: Option<String>,
    pub status: Option<String>,
    pub conversation_url: Option<String>,
    pub replica_id: Option<String>,
    pub persona_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    /// Only present when requested with `verbose=true`, may be `null` before the call starts
    pub events: Option<Vec<TavusEvent>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TavusEvent {
    pub event_type: String,
    #[serde(default)]
    pub properties: serde_json::Value,
}

#[derive(Clone)]
pub struct TavusClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TavusClient {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Sends a `HEAD` request to the replica listing and returns the raw status.
    pub async fn probe(&self) -> Result<reqwest::StatusCode, Error> {
        let response = self
            .http
            .head(format!("{}/v2/replicas", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        Ok(response.status())
    }

    pub async fn list_replicas(&self) -> Result<Vec<TavusReplica>, Error> {
        let response = self
            .http
            .get(format!("{}/v2/replicas", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let page: TavusReplicaPage = ensure_success(response, Provider::Tavus, "Replicas")?
            .json()
            .await?;

        Ok(page.data.unwrap_or_default())
    }

    pub async fn get_video(&self, video_id: &str) -> Result<TavusVideo, Error> {
        let response = self
            .http
            .get(format!("{}/v2/videos/{}", self.base_url, video_id))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        Ok(ensure_success(response, Provider::Tavus, "Video")?
            .json()
            .await?)
    }

    /// Fetches a conversation including its event log (transcripts, perception analysis).
    pub async fn get_conversation(&self, conversation_id: &str) -> Result<TavusConversation, Error> {
        let response = self
            .http
            .get(format!(
                "{}/v2/conversations/{}",
                self.base_url, conversation_id
            ))
            .query(&[("verbose", "true")])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        Ok(ensure_success(response, Provider::Tavus, "Conversation")?
            .json()
            .await?)
    }
}
