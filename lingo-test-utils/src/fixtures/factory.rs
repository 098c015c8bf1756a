//! Provider payload factories.
//!
//! Payloads include fields the gateway drops when reshaping so tests can check they never leak.

use serde_json::{json, Value};

use crate::constant::{TEST_USER_EMAIL, TEST_USER_ID};

/// Identity provider account for the test session.
pub fn account() -> Value {
    json!({
        "$id": TEST_USER_ID,
        "$createdAt": "2025-01-10T09:00:00.000+00:00",
        "name": "Test Learner",
        "email": TEST_USER_EMAIL,
        "emailVerification": true,
        "prefs": {}
    })
}

/// Voice catalog with `count` voices named `voice_0..`.
pub fn voices(count: usize) -> Value {
    let voices: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "voice_id": format!("voice_{}", i),
                "name": format!("Voice {}", i),
                "category": "premade",
                "description": "Warm and clear",
                "preview_url": format!("https://cdn.example.com/voices/{}.mp3", i),
                "available_for_tiers": ["free", "starter"],
                "settings": { "stability": 0.5, "similarity_boost": 0.75 },
                "labels": { "accent": "castilian" },
                "samples": null,
                "fine_tuning": { "is_allowed_to_fine_tune": false }
            })
        })
        .collect();

    json!({ "voices": voices })
}

/// Replica listing with `count` replicas named `r_0..`.
pub fn replicas(count: usize) -> Value {
    let data: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "replica_id": format!("r_{}", i),
                "replica_name": format!("Tutor {}", i),
                "thumbnail_video_url": format!("https://cdn.example.com/replicas/{}.mp4", i),
                "training_progress": "100/100",
                "status": "completed",
                "created_at": "2025-01-10 09:00:00.000000"
            })
        })
        .collect();

    json!({ "data": data, "total_count": count })
}

/// Avatar video with the given generation status.
pub fn video(video_id: &str, status: &str) -> Value {
    json!({
        "video_id": video_id,
        "video_name": "Lecture 1",
        "status": status,
        "data": { "script": "Hola a todos" },
        "download_url": format!("https://cdn.example.com/videos/{}.mp4", video_id),
        "hosted_url": format!("https://videos.example.com/{}", video_id),
        "stream_url": format!("https://stream.example.com/{}.m3u8", video_id),
        "status_details": null,
        "created_at": "2025-01-10 09:00:00.000000",
        "updated_at": "2025-01-10 09:05:00.000000"
    })
}

/// Ended conversation, optionally carrying a transcription event with a system, an assistant and
/// a user turn.
pub fn conversation(conversation_id: &str, with_transcript: bool) -> Value {
    let mut events = vec![json!({
        "event_type": "system.replica_joined",
        "message_type": "system",
        "properties": {}
    })];

    if with_transcript {
        events.push(json!({
            "event_type": "application.transcription_ready",
            "message_type": "application",
            "properties": {
                "transcript": [
                    { "role": "system", "content": "You are a Spanish examiner." },
                    { "role": "assistant", "content": "¿Cómo te llamas?" },
                    { "role": "user", "content": "Me llamo Ana." }
                ]
            }
        }));
    }

    json!({
        "conversation_id": conversation_id,
        "conversation_name": "Spanish A2 oral test",
        "status": "ended",
        "conversation_url": format!("https://tavus.daily.co/{}", conversation_id),
        "callback_url": "https://hooks.example.com/tavus",
        "replica_id": "r_0",
        "persona_id": "p_0",
        "created_at": "2025-01-10 09:00:00.000000",
        "updated_at": "2025-01-10 09:20:00.000000",
        "events": events
    })
}

/// Generated content response whose first candidate holds `parts`.
pub fn generated_text(parts: &[&str]) -> Value {
    let parts: Vec<Value> = parts.iter().map(|text| json!({ "text": text })).collect();

    json!({
        "candidates": [{
            "content": { "role": "model", "parts": parts },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "totalTokenCount": 42 }
    })
}
