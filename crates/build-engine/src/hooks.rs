//! Post-Package Hooks
//!
//! Copies packaged application outputs to the export location after the
//! package-debug step. The export target is fully replaced, never merged.

use std::path::{Path, PathBuf};
use tracing::{info, debug};
use walkdir::WalkDir;

use minq_build_core::project::SubprojectKind;
use crate::layout::BuildLayout;
use crate::LayoutError;

/// Application subproject the hook is gated on
pub const HOOK_SUBPROJECT: &str = "app";

/// Copies the packaged outputs directory to the export target
pub struct PostPackageCopy {
    outputs_dir: PathBuf,
    target_dir: PathBuf,
}

impl PostPackageCopy {
    /// Create the hook from a resolved layout, if it is eligible
    ///
    /// Returns `None` unless the layout contains an application subproject
    /// named exactly `app`.
    pub fn for_layout(layout: &BuildLayout, target_dir: PathBuf) -> Option<Self> {
        let assignment = layout.get(HOOK_SUBPROJECT)?;
        if assignment.kind != SubprojectKind::Application {
            return None;
        }

        Some(Self {
            outputs_dir: assignment.output_dir.join("outputs"),
            target_dir,
        })
    }

    /// Default export target: `build/app/outputs` next to the workspace
    pub fn default_target(workspace_root: &Path) -> PathBuf {
        workspace_root
            .parent()
            .unwrap_or(workspace_root)
            .join("build")
            .join("app")
            .join("outputs")
    }

    /// Directory the packaged outputs are copied from
    pub fn outputs_dir(&self) -> &Path {
        &self.outputs_dir
    }

    /// Directory the packaged outputs are copied to
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Replace the export target with the current outputs contents
    ///
    /// Returns the number of files copied.
    pub async fn run(&self) -> Result<u64, LayoutError> {
        if !self.outputs_dir.exists() {
            return Err(LayoutError::Hook(format!(
                "Outputs directory not found: {:?}",
                self.outputs_dir
            )));
        }

        if self.target_dir.exists() {
            debug!("Removing stale export target {:?}", self.target_dir);
            tokio::fs::remove_dir_all(&self.target_dir).await?;
        }
        tokio::fs::create_dir_all(&self.target_dir).await?;

        let copied = copy_dir_contents(&self.outputs_dir, &self.target_dir).await?;

        info!(
            "Exported {} files from {:?} to {:?}",
            copied, self.outputs_dir, self.target_dir
        );
        Ok(copied)
    }
}

/// Copy the contents of `src` into `dst`, returning the file count
async fn copy_dir_contents(src: &Path, dst: &Path) -> Result<u64, LayoutError> {
    let mut copied = 0u64;

    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry.map_err(|e| LayoutError::Hook(e.to_string()))?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| LayoutError::Hook(e.to_string()))?;
        let dest = dst.join(rel);

        if entry.file_type().is_dir() {
            tokio::fs::create_dir_all(&dest).await?;
        } else {
            if let Some(parent) = dest.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::copy(entry.path(), &dest).await?;
            copied += 1;
        }
    }

    Ok(copied)
}
