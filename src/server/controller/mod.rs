//! HTTP controller endpoints for the Lingo API.
//!
//! Axum handlers for logout, the voice provider, the avatar provider and language tests.
//! Controllers extract the session cookie, run the session gate where required, call a service and
//! return JSON. They are annotated with utoipa for the OpenAPI document.

pub mod auth;
pub mod elevenlabs;
pub mod tavus;
pub mod util;
