//! Data transfer objects returned by the HTTP API.
//!
//! Every provider payload is reshaped into one of these types before it leaves the server, so
//! browsers only ever see the fields listed here regardless of what the upstream service sends.

pub mod api;
pub mod avatar;
pub mod user;
pub mod voice;
