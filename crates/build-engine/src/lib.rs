//! Minq Build Engine
//!
//! Resolves the build output layout for the Minq Android workspace and
//! runs the maintenance tasks around it.

pub mod root;
pub mod layout;
pub mod overrides;
pub mod hooks;
pub mod clean;
pub mod gradle;

pub use root::{resolve_build_root, resolve_build_root_from_env, build_root_path, BUILD_DIR_ENV};
pub use layout::{BuildLayout, SubprojectLayout};
pub use overrides::OverrideTable;
pub use hooks::PostPackageCopy;
pub use clean::clean_build_root;
pub use gradle::GradleRunner;

/// Layout engine errors
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Layout error: {0}")]
    Layout(String),
    #[error("Hook error: {0}")]
    Hook(String),
    #[error("Package step failed: {0}")]
    PackageFailed(String),
    #[error("Toolchain not found: {0}")]
    ToolchainNotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
