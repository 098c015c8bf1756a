//! Generative content client.
//!
//! Thin handle to a hosted generative-AI model used to produce lecture and interview text. Prompt
//! design lives with the callers; this client only knows how to send a prompt and collect the text
//! of the first candidate.

use serde::{Deserialize, Serialize};

use crate::server::{
    error::Error,
    provider::{ensure_success, Provider},
};

pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// A single text generation request.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub prompt: String,
    pub system_instruction: Option<String>,
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<ContentBody>,
    contents: Vec<ContentBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfigBody>,
}

#[derive(Serialize, Deserialize, Default)]
struct ContentBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<PartBody>,
}

#[derive(Serialize, Deserialize)]
struct PartBody {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
struct GenerationConfigBody {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<CandidateBody>,
}

#[derive(Deserialize)]
struct CandidateBody {
    #[serde(default)]
    content: ContentBody,
}

#[derive(Clone)]
pub struct GenerativeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GenerativeClient {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generates text for `request` and returns the concatenated parts of the first candidate.
    ///
    /// # Returns
    /// - `Ok(String)` - Generated text
    /// - `Err(Error::ParseError)` - Provider answered without any candidate text
    /// - `Err(Error::ProviderError)` - Provider answered with a non-2xx status
    pub async fn generate_text(&self, request: GenerationRequest) -> Result<String, Error> {
        let body = GenerateContentBody {
            system_instruction: request.system_instruction.map(|text| ContentBody {
                role: None,
                parts: vec![PartBody { text }],
            }),
            contents: vec![ContentBody {
                role: Some("user".to_string()),
                parts: vec![PartBody {
                    text: request.prompt,
                }],
            }],
            generation_config: request
                .temperature
                .map(|temperature| GenerationConfigBody { temperature }),
        };

        let response = self
            .http
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let generated: GenerateContentResponse =
            ensure_success(response, Provider::GenAi, "Generated content")?
                .json()
                .await?;

        let text: String = generated
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::ParseError(format!(
                "{} returned no candidate text for model {}",
                Provider::GenAi,
                self.model
            )));
        }

        Ok(text)
    }
}
