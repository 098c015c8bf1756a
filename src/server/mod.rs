//! Server application core modules.
//!
//! This module contains all server-side functionality of the Lingo gateway: configuration, HTTP
//! routing, the session gate, upstream provider clients and the services that reshape provider
//! payloads.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod provider;
pub mod router;
pub mod service;
pub mod startup;
