//! Test utilities for the Lingo gateway.
//!
//! Tests declare the upstream endpoints they need with [`TestBuilder`]; `build()` starts a mockito
//! server, registers the endpoints and returns a [`TestContext`] whose URL stands in for every
//! provider base URL (identity, avatar, voice and generative providers share one mock server).

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::*, fixtures::factory, TestBuilder, TestContext, TestError,
    };
}
