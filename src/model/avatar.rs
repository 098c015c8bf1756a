use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A replica (trained avatar) available from the avatar provider
#[derive(Clone, Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct ReplicaDto {
    pub replica_id: String,
    pub replica_name: Option<String>,
    pub thumbnail_video_url: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

/// Replica listing, `total` always equals the number of entries in `replicas`
#[derive(Clone, Serialize, Deserialize, ToSchema, Debug)]
pub struct ReplicaListDto {
    pub replicas: Vec<ReplicaDto>,
    pub total: usize,
}

/// Generation status of an avatar video
#[derive(Clone, Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct VideoStatusDto {
    pub video_id: String,
    pub video_name: Option<String>,
    pub status: String,
    pub download_url: Option<String>,
    pub hosted_url: Option<String>,
    pub stream_url: Option<String>,
    pub status_details: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A single spoken turn of a conversation transcript
#[derive(Clone, Serialize, Deserialize, ToSchema, Debug, PartialEq, Eq)]
pub struct TranscriptTurnDto {
    /// `user`, `assistant` or `system`
    pub role: String,
    pub content: String,
}

/// Details of a conversational-video session used for language tests
#[derive(Clone, Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct ConversationDto {
    pub conversation_id: String,
    pub conversation_name: Option<String>,
    pub status: String,
    pub conversation_url: Option<String>,
    pub replica_id: Option<String>,
    pub persona_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub transcript: Vec<TranscriptTurnDto>,
}
