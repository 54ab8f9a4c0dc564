//! Build Settings
//!
//! Workspace-level settings for the output router:
//! - Project name (appended to the default build base)
//! - Build base override
//! - Packaged-output export target override

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::{info, debug};

use crate::error::{MinqBuildError, Result};

/// Settings file name, looked up in the workspace root
pub const SETTINGS_FILE: &str = "minq-build.toml";

/// Workspace build settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildSettings {
    /// Project name, used as the subdirectory under the default build base
    pub project_name: String,
    /// Override for the default build base directory
    pub build_base: Option<PathBuf>,
    /// Override for the packaged-output export target
    pub copy_target: Option<PathBuf>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            project_name: "minq".to_string(),
            build_base: None,
            copy_target: None,
        }
    }
}

impl BuildSettings {
    /// Default base directory for build outputs
    pub fn default_build_base() -> PathBuf {
        #[cfg(windows)]
        {
            PathBuf::from("C:\\minq_android_build")
        }
        #[cfg(not(windows))]
        {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("minq_android_build")
        }
    }

    /// Get the effective build base (override or platform default)
    pub fn effective_build_base(&self) -> PathBuf {
        self.build_base
            .clone()
            .unwrap_or_else(Self::default_build_base)
    }

    /// Load settings from the workspace root, falling back to defaults
    pub async fn load(workspace_root: &Path) -> Result<Self> {
        let settings_file = workspace_root.join(SETTINGS_FILE);

        if settings_file.exists() {
            debug!("Loading settings from {:?}", settings_file);
            let contents = tokio::fs::read_to_string(&settings_file).await?;
            let settings: BuildSettings = toml::from_str(&contents)?;

            if settings.project_name.trim().is_empty() {
                return Err(MinqBuildError::Config(
                    "project_name must not be empty".into(),
                ));
            }

            Ok(settings)
        } else {
            info!("Settings file not found, using defaults");
            Ok(BuildSettings::default())
        }
    }

    /// Save settings to the workspace root
    pub async fn save(&self, workspace_root: &Path) -> Result<()> {
        let settings_file = workspace_root.join(SETTINGS_FILE);

        let contents = toml::to_string_pretty(self)?;
        tokio::fs::write(&settings_file, contents).await?;

        debug!("Settings saved to {:?}", settings_file);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = BuildSettings::default();
        assert_eq!(settings.project_name, "minq");
        assert!(settings.build_base.is_none());
        assert!(settings.copy_target.is_none());
    }

    #[test]
    fn test_effective_build_base_override() {
        let settings = BuildSettings {
            build_base: Some(PathBuf::from("/srv/builds")),
            ..Default::default()
        };
        assert_eq!(settings.effective_build_base(), PathBuf::from("/srv/builds"));
    }

    #[tokio::test]
    async fn test_settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let settings = BuildSettings {
            project_name: "minq_app".to_string(),
            build_base: Some(PathBuf::from("/srv/builds")),
            copy_target: None,
        };
        settings.save(dir.path()).await.unwrap();

        let loaded = BuildSettings::load(dir.path()).await.unwrap();
        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = BuildSettings::load(dir.path()).await.unwrap();
        assert_eq!(loaded, BuildSettings::default());
    }

    #[tokio::test]
    async fn test_load_rejects_blank_project_name() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join(SETTINGS_FILE), "project_name = \"  \"\n")
            .await
            .unwrap();

        assert!(BuildSettings::load(dir.path()).await.is_err());
    }
}
