//! Test fixture modules for provider payloads and mock endpoints.
//!
//! - `factory` - JSON payloads shaped like each provider's responses
//! - `identity` - Identity provider account and session endpoints
//! - `tavus` - Avatar provider replica, video and conversation endpoints
//! - `elevenlabs` - Voice provider catalog and account endpoints
//! - `genai` - Generative provider content endpoint

pub mod elevenlabs;
pub mod factory;
pub mod genai;
pub mod identity;
pub mod tavus;

use crate::TestContext;

impl TestContext {
    pub fn identity<'a>(&'a mut self) -> identity::IdentityFixtures<'a> {
        identity::IdentityFixtures { setup: self }
    }

    pub fn tavus<'a>(&'a mut self) -> tavus::TavusFixtures<'a> {
        tavus::TavusFixtures { setup: self }
    }

    pub fn elevenlabs<'a>(&'a mut self) -> elevenlabs::ElevenLabsFixtures<'a> {
        elevenlabs::ElevenLabsFixtures { setup: self }
    }

    pub fn genai<'a>(&'a mut self) -> genai::GenAiFixtures<'a> {
        genai::GenAiFixtures { setup: self }
    }
}
