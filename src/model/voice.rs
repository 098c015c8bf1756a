use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A voice from the voice provider's catalog
#[derive(Clone, Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct VoiceDto {
    pub voice_id: String,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub preview_url: Option<String>,
    pub available_for_tiers: Vec<String>,
    /// Provider-defined synthesis settings (stability, similarity boost, ...)
    #[schema(value_type = Option<Object>)]
    pub settings: Option<serde_json::Value>,
}

/// Voice catalog listing, `total` always equals the number of entries in `voices`
#[derive(Clone, Serialize, Deserialize, ToSchema, Debug)]
pub struct VoiceListDto {
    pub voices: Vec<VoiceDto>,
    pub total: usize,
}
