//! Minq Build Core - Settings and subproject model
//!
//! This crate provides the shared types for the minq-build output router:
//! workspace settings, subproject discovery, and error handling.

pub mod config;
pub mod project;
pub mod error;

pub use config::BuildSettings;
pub use project::{Subproject, SubprojectKind, discover_subprojects};
pub use error::{MinqBuildError, Result};

/// minq-build version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "Minq Build";
