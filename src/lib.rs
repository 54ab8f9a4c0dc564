//! Minq Build - Android build output router
//!
//! A small build-orchestration tool that owns the output directory layout
//! of the Minq Android workspace.
//!
//! ## Features
//!
//! - **Build root resolution**: environment-overridable output root with a
//!   platform default
//! - **Output redirection**: every subproject builds into a subdirectory of
//!   the root named after it
//! - **Configuration overrides**: name-keyed SDK and namespace overrides
//!   for individual subprojects
//! - **Packaged-output export**: the debug package step's outputs are
//!   copied to a fixed export location
//! - **Clean task**: one command deletes the whole build root
//!
//! ## Architecture
//!
//! minq-build is organized into two crates:
//!
//! - `minq-build-core`: settings, subproject discovery, and error handling
//! - `minq-build-engine`: build root resolution, layout assignment,
//!   overrides, hooks, and tasks

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod commands;

// Re-export main components for library usage
pub use minq_build_core as core;
pub use minq_build_engine as engine;

pub use minq_build_core::{APP_NAME, VERSION};

/// Prelude module for convenient imports
pub mod prelude {
    pub use minq_build_core::{BuildSettings, Subproject, SubprojectKind, discover_subprojects};
    pub use minq_build_engine::{
        BuildLayout, GradleRunner, OverrideTable, PostPackageCopy,
        clean_build_root, resolve_build_root,
    };
}
