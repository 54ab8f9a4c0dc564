//! Output Layout
//!
//! Assigns every subproject an output directory under the build root and
//! persists the resolved layout for later task runs.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::{info, debug};

use minq_build_core::project::{Subproject, SubprojectKind};
use crate::LayoutError;

/// File name of the persisted layout manifest inside the build root
pub const LAYOUT_FILE: &str = "layout.toml";

/// Output assignment for one subproject
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubprojectLayout {
    /// Subproject name
    pub name: String,
    /// Subproject kind
    pub kind: SubprojectKind,
    /// Assigned output directory (build root joined with the name)
    pub output_dir: PathBuf,
    /// Android namespace, if an override set one
    pub namespace: Option<String>,
    /// Compile SDK version
    pub compile_sdk: Option<u32>,
    /// Minimum SDK version
    pub min_sdk: Option<u32>,
}

/// Resolved output layout for the whole workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildLayout {
    /// Build root every output lands under
    pub build_root: PathBuf,
    /// Per-subproject assignments
    pub subprojects: Vec<SubprojectLayout>,
}

impl BuildLayout {
    /// Assign output directories under the build root
    pub fn assign(build_root: PathBuf, subprojects: &[Subproject]) -> Self {
        let subprojects = subprojects
            .iter()
            .map(|sp| SubprojectLayout {
                name: sp.name.clone(),
                kind: sp.kind,
                output_dir: build_root.join(&sp.name),
                namespace: sp.namespace.clone(),
                compile_sdk: sp.compile_sdk,
                min_sdk: sp.min_sdk,
            })
            .collect();

        Self {
            build_root,
            subprojects,
        }
    }

    /// Look up the assignment for a subproject by name
    pub fn get(&self, name: &str) -> Option<&SubprojectLayout> {
        self.subprojects.iter().find(|sp| sp.name == name)
    }

    /// Create every assigned output directory
    pub async fn create_dirs(&self) -> Result<(), LayoutError> {
        for sp in &self.subprojects {
            debug!("Creating output directory {:?}", sp.output_dir);
            tokio::fs::create_dir_all(&sp.output_dir).await?;
        }
        Ok(())
    }

    /// Persist the layout manifest into the build root
    pub async fn save(&self) -> Result<(), LayoutError> {
        let manifest = self.build_root.join(LAYOUT_FILE);

        let contents = toml::to_string_pretty(self)?;
        tokio::fs::write(&manifest, contents).await?;

        info!("Layout manifest saved to {:?}", manifest);
        Ok(())
    }

    /// Load a previously persisted layout from the build root
    pub async fn load(build_root: &Path) -> Result<Self, LayoutError> {
        let manifest = build_root.join(LAYOUT_FILE);

        if !manifest.exists() {
            return Err(LayoutError::Layout(format!(
                "No layout manifest in {:?}, run configure first",
                build_root
            )));
        }

        let contents = tokio::fs::read_to_string(&manifest).await?;
        let layout: BuildLayout = toml::from_str(&contents)?;
        Ok(layout)
    }
}
