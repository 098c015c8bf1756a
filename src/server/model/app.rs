use crate::server::{
    model::session::SessionCookies,
    provider::{
        elevenlabs::ElevenLabsClient, genai::GenerativeClient, identity::IdentityClient,
        tavus::TavusClient,
    },
};

/// State shared by all request handlers.
///
/// Holds only immutable configuration and provider handles; every clone shares the same outbound
/// connection pool.
#[derive(Clone)]
pub struct AppState {
    pub session_cookies: SessionCookies,
    pub identity: IdentityClient,
    pub tavus: TavusClient,
    pub elevenlabs: ElevenLabsClient,
    pub genai: GenerativeClient,
}
