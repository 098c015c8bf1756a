//! Session verification and logout.

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        provider::identity::IdentityClient,
    },
};

/// Service for session operations delegated to the identity provider.
pub struct SessionService<'a> {
    identity: &'a IdentityClient,
}

impl<'a> SessionService<'a> {
    /// Creates a new instance of SessionService.
    ///
    /// # Arguments
    /// - `identity` - Identity provider client
    pub fn new(identity: &'a IdentityClient) -> Self {
        Self { identity }
    }

    /// Confirms `token` with the identity provider and returns the owning user.
    ///
    /// # Arguments
    /// - `token` - Session secret read from the request cookies
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Session is valid
    /// - `Err(Error::AuthError(AuthError::SessionRejected))` - Identity provider rejected the session
    /// - `Err(Error)` - Identity provider unreachable or failing
    pub async fn verify(&self, token: &str) -> Result<UserDto, Error> {
        let Some(account) = self.identity.get_current_user(token).await? else {
            return Err(AuthError::SessionRejected.into());
        };

        Ok(UserDto {
            id: account.id,
            name: account.name,
            email: account.email,
        })
    }

    /// Deletes the session at the identity provider, if there is one.
    ///
    /// Failures are logged and swallowed: the caller clears the browser's cookies regardless.
    ///
    /// # Returns
    /// - `true` - Upstream session deleted
    /// - `false` - No session was given or the deletion failed
    pub async fn logout(&self, token: Option<&str>) -> bool {
        let Some(token) = token else {
            return false;
        };

        match self.identity.delete_current_session(token).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Failed to delete session at identity provider: {}", err);

                false
            }
        }
    }
}
