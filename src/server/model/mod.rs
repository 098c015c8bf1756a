//! Server application models.
//!
//! Application state shared by every handler and the session cookie model used by the session
//! gate and logout handler.

pub mod app;
pub mod session;
