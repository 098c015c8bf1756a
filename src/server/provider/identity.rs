//! Identity provider client.
//!
//! Sessions are issued and verified entirely by the identity backend; the gateway only forwards the
//! session secret taken from the browser's cookie and interprets the answer.

use axum::http::StatusCode;
use serde::Deserialize;

use crate::server::{
    error::{provider::ProviderError, Error},
    provider::{ensure_success, Provider},
};

pub const PROJECT_HEADER: &str = "X-Appwrite-Project";
pub const SESSION_HEADER: &str = "X-Appwrite-Session";

/// Account returned by the identity provider's "get current user" operation.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityAccount {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    endpoint: String,
    project_id: String,
}

impl IdentityClient {
    pub fn new(http: reqwest::Client, endpoint: &str, project_id: &str) -> Self {
        Self {
            http,
            endpoint: endpoint.to_string(),
            project_id: project_id.to_string(),
        }
    }

    /// Fetches the account owning `session`.
    ///
    /// # Returns
    /// - `Ok(Some(IdentityAccount))` - Session is valid
    /// - `Ok(None)` - Identity provider rejected the session (401/403)
    /// - `Err(Error::ProviderError)` - Identity provider answered with any other failure status
    /// - `Err(Error::HttpClientError)` - Transport failure or undecodable body
    pub async fn get_current_user(&self, session: &str) -> Result<Option<IdentityAccount>, Error> {
        let response = self
            .http
            .get(format!("{}/account", self.endpoint))
            .header(PROJECT_HEADER, &self.project_id)
            .header(SESSION_HEADER, session)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Ok(None);
        }

        if !status.is_success() {
            return Err(ProviderError::UnexpectedStatus {
                provider: Provider::Identity,
                status,
            }
            .into());
        }

        Ok(Some(response.json::<IdentityAccount>().await?))
    }

    /// Deletes the session identified by `session` at the identity provider.
    pub async fn delete_current_session(&self, session: &str) -> Result<(), Error> {
        let response = self
            .http
            .delete(format!("{}/account/sessions/current", self.endpoint))
            .header(PROJECT_HEADER, &self.project_id)
            .header(SESSION_HEADER, session)
            .send()
            .await?;

        ensure_success(response, Provider::Identity, "Session")?;

        Ok(())
    }
}
