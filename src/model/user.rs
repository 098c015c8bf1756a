use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User account owning the current session, as reported by the identity provider
#[derive(Clone, Serialize, Deserialize, ToSchema, Debug)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
}
