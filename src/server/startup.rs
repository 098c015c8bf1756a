use std::time::Duration;

use crate::server::{
    config::Config,
    error::Error,
    model::{app::AppState, session::SessionCookies},
    provider::{
        elevenlabs::ElevenLabsClient, genai::GenerativeClient, identity::IdentityClient,
        tavus::TavusClient,
    },
};

pub const USER_AGENT: &str = concat!("lingo/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the outbound HTTP client shared by every provider client
pub fn build_http_client() -> Result<reqwest::Client, Error> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Build the provider clients and session cookie model from configuration
pub fn build_app_state(config: &Config, http: reqwest::Client) -> AppState {
    AppState {
        session_cookies: SessionCookies::new(&config.session_cookie_name),
        identity: IdentityClient::new(
            http.clone(),
            &config.identity_endpoint,
            &config.identity_project_id,
        ),
        tavus: TavusClient::new(http.clone(), &config.tavus_api_url, &config.tavus_api_key),
        elevenlabs: ElevenLabsClient::new(
            http.clone(),
            &config.elevenlabs_api_url,
            &config.elevenlabs_api_key,
        ),
        genai: GenerativeClient::new(
            http,
            &config.genai_api_url,
            &config.genai_api_key,
            &config.genai_model,
        ),
    }
}

/// Completes when the process receives Ctrl+C
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
}
