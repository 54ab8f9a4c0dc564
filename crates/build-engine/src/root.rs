//! Build Root Resolution
//!
//! Resolves the top-level directory under which all subproject build
//! outputs are placed.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::LayoutError;

/// Environment variable that overrides the build output root
pub const BUILD_DIR_ENV: &str = "MINQ_ANDROID_BUILD_DIR";

/// Compute the build root path without touching the filesystem
///
/// A present, non-blank environment override wins; otherwise the default
/// base joined with the project name is used.
pub fn build_root_path(
    env_value: Option<&str>,
    default_base: &Path,
    project_name: &str,
) -> PathBuf {
    match env_value.map(str::trim) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => default_base.join(project_name),
    }
}

/// Resolve the build root, creating it if absent
///
/// The returned path is absolute and symlink-resolved. Creation or
/// canonicalization failure fails the resolution.
pub async fn resolve_build_root(
    env_value: Option<&str>,
    default_base: &Path,
    project_name: &str,
) -> Result<PathBuf, LayoutError> {
    let requested = build_root_path(env_value, default_base, project_name);

    tokio::fs::create_dir_all(&requested).await?;
    let root = tokio::fs::canonicalize(&requested).await?;

    debug!("Resolved build root: {:?}", root);
    Ok(root)
}

/// Resolve the build root using the process environment
pub async fn resolve_build_root_from_env(
    default_base: &Path,
    project_name: &str,
) -> Result<PathBuf, LayoutError> {
    let env_value = std::env::var(BUILD_DIR_ENV).ok();
    resolve_build_root(env_value.as_deref(), default_base, project_name).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_root_path_default() {
        let path = build_root_path(None, Path::new("/srv/builds"), "minq");
        assert_eq!(path, PathBuf::from("/srv/builds/minq"));
    }

    #[test]
    fn test_build_root_path_blank_override_ignored() {
        let path = build_root_path(Some("   "), Path::new("/srv/builds"), "minq");
        assert_eq!(path, PathBuf::from("/srv/builds/minq"));
    }

    #[test]
    fn test_build_root_path_override_wins() {
        let path = build_root_path(Some("/mnt/fast"), Path::new("/srv/builds"), "minq");
        assert_eq!(path, PathBuf::from("/mnt/fast"));
    }

    #[tokio::test]
    async fn test_resolve_creates_and_canonicalizes() {
        let base = tempfile::tempdir().unwrap();

        let root = resolve_build_root(None, base.path(), "minq").await.unwrap();
        assert!(root.exists());
        assert!(root.is_absolute());
        assert_eq!(
            root,
            tokio::fs::canonicalize(base.path().join("minq")).await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_resolve_env_override() {
        let base = tempfile::tempdir().unwrap();
        let external = tempfile::tempdir().unwrap();
        let override_dir = external.path().join("external_builds");

        let root = resolve_build_root(
            Some(override_dir.to_str().unwrap()),
            base.path(),
            "minq",
        )
        .await
        .unwrap();

        assert_eq!(root, tokio::fs::canonicalize(&override_dir).await.unwrap());
        // The default base was never used
        assert!(!base.path().join("minq").exists());
    }
}
