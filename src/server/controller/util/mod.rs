//! Utility functions for controller request handling.
//!
//! Reusable helpers shared by the controllers: the session gate used by every protected endpoint
//! and validation of resource identifiers taken from request paths.

pub mod get_user;
pub mod path;
