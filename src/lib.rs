//! Lingo: session-gated API gateway for a language-learning platform.

pub mod model;
pub mod server;
