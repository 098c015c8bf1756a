//! Service layer.
//!
//! Services sit between the HTTP controllers and the provider clients: they verify sessions, call
//! the upstream APIs and reshape provider payloads into the DTOs the API returns.

pub mod avatar;
pub mod health;
pub mod session;
pub mod voice;
