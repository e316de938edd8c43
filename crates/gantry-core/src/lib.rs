//! Gantry Core - Foundation for the Gantry signing resolver
//!
//! This crate provides the error types, build-variant model, and project
//! configuration (loading, defaults, validation) shared by the Gantry
//! workspace.

pub mod config;
pub mod error;
pub mod variant;

pub use error::{ConfigError, GantryError, Result};
pub use variant::BuildVariant;
