//! Avatar video service.
//!
//! Reshapes replica listings, video generation status and conversation details from the avatar
//! provider. Conversation transcripts are lifted out of the provider's event log so the language
//! test pages do not need to understand the event format.

use serde::Deserialize;

use crate::{
    model::avatar::{
        ConversationDto, ReplicaDto, ReplicaListDto, TranscriptTurnDto, VideoStatusDto,
    },
    server::{
        error::Error,
        provider::tavus::{TavusClient, TavusEvent},
    },
};

/// Event carrying the final transcript of a conversation.
pub const TRANSCRIPTION_READY_EVENT: &str = "application.transcription_ready";

/// Status reported when the provider omits one.
pub const UNKNOWN_STATUS: &str = "unknown";

#[derive(Deserialize)]
struct TranscriptTurn {
    #[serde(default)]
    role: String,
    #[serde(default)]
    content: String,
}

/// Service for avatar replicas, videos and conversations.
pub struct AvatarService<'a> {
    client: &'a TavusClient,
}

impl<'a> AvatarService<'a> {
    pub fn new(client: &'a TavusClient) -> Self {
        Self { client }
    }

    pub async fn list_replicas(&self) -> Result<ReplicaListDto, Error> {
        let replicas: Vec<ReplicaDto> = self
            .client
            .list_replicas()
            .await?
            .into_iter()
            .map(|replica| ReplicaDto {
                replica_id: replica.replica_id,
                replica_name: replica.replica_name,
                thumbnail_video_url: replica.thumbnail_video_url,
                status: replica.status,
                created_at: replica.created_at,
            })
            .collect();

        Ok(ReplicaListDto {
            total: replicas.len(),
            replicas,
        })
    }

    pub async fn get_video_status(&self, video_id: &str) -> Result<VideoStatusDto, Error> {
        let video = self.client.get_video(video_id).await?;

        Ok(VideoStatusDto {
            video_id: video.video_id,
            video_name: video.video_name,
            status: video.status.unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
            download_url: video.download_url,
            hosted_url: video.hosted_url,
            stream_url: video.stream_url,
            status_details: video.status_details,
            created_at: video.created_at,
            updated_at: video.updated_at,
        })
    }

    pub async fn get_conversation(&self, conversation_id: &str) -> Result<ConversationDto, Error> {
        let conversation = self.client.get_conversation(conversation_id).await?;
        let events = conversation.events.unwrap_or_default();

        Ok(ConversationDto {
            transcript: extract_transcript(&events),
            conversation_id: conversation.conversation_id,
            conversation_name: conversation.conversation_name,
            status: conversation
                .status
                .unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
            conversation_url: conversation.conversation_url,
            replica_id: conversation.replica_id,
            persona_id: conversation.persona_id,
            created_at: conversation.created_at,
            updated_at: conversation.updated_at,
        })
    }
}

/// Collects the spoken turns of the first `transcription_ready` event.
///
/// System turns hold the persona prompt and are never returned. Malformed turns are skipped.
pub fn extract_transcript(events: &[TavusEvent]) -> Vec<TranscriptTurnDto> {
    let Some(turns) = events
        .iter()
        .find(|event| event.event_type == TRANSCRIPTION_READY_EVENT)
        .and_then(|event| event.properties.get("transcript"))
        .and_then(|transcript| transcript.as_array())
    else {
        return Vec::new();
    };

    turns
        .iter()
        .filter_map(|turn| TranscriptTurn::deserialize(turn).ok())
        .filter(|turn| turn.role != "system" && !turn.content.trim().is_empty())
        .map(|turn| TranscriptTurnDto {
            role: turn.role,
            content: turn.content,
        })
        .collect()
}
