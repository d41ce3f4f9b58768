//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! survey logic.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root wiring config into a service
//! - [`config`] - Configuration loading, validation, and logging setup

pub mod bootstrap;
pub mod config;
