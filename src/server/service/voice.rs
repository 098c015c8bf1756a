use crate::{
    model::voice::{VoiceDto, VoiceListDto},
    server::{error::Error, provider::elevenlabs::ElevenLabsClient},
};

/// Service for the voice provider's catalog.
pub struct VoiceService<'a> {
    client: &'a ElevenLabsClient,
}

impl<'a> VoiceService<'a> {
    pub fn new(client: &'a ElevenLabsClient) -> Self {
        Self { client }
    }

    /// Lists the voice catalog reduced to the fields exposed by the API.
    pub async fn list_voices(&self) -> Result<VoiceListDto, Error> {
        let voices: Vec<VoiceDto> = self
            .client
            .list_voices()
            .await?
            .into_iter()
            .map(|voice| VoiceDto {
                voice_id: voice.voice_id,
                name: voice.name,
                category: voice.category,
                description: voice.description,
                preview_url: voice.preview_url,
                available_for_tiers: voice.available_for_tiers.unwrap_or_default(),
                settings: voice.settings,
            })
            .collect();

        Ok(VoiceListDto {
            total: voices.len(),
            voices,
        })
    }
}
