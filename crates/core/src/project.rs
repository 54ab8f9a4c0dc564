//! Subproject Discovery
//!
//! Scans the workspace for Gradle subprojects and classifies them by the
//! Android plugin their build file applies.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::{info, debug};

use crate::error::{Result, MinqBuildError};

/// Subproject classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubprojectKind {
    /// Applies the `com.android.library` plugin
    Library,
    /// Applies the `com.android.application` plugin
    Application,
    /// Gradle build file without a recognized Android plugin
    Unknown,
}

impl SubprojectKind {
    /// Classify a subproject from its build file contents
    pub fn from_build_file(contents: &str) -> Self {
        if contents.contains("com.android.application") {
            SubprojectKind::Application
        } else if contents.contains("com.android.library") {
            SubprojectKind::Library
        } else {
            SubprojectKind::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubprojectKind::Library => "library",
            SubprojectKind::Application => "application",
            SubprojectKind::Unknown => "unknown",
        }
    }
}

/// A subproject within the workspace build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subproject {
    /// Subproject name (directory name)
    pub name: String,
    /// Subproject directory
    pub dir: PathBuf,
    /// Kind, detected from the build file
    pub kind: SubprojectKind,
    /// Android namespace, set by configuration overrides
    pub namespace: Option<String>,
    /// Compile SDK version
    pub compile_sdk: Option<u32>,
    /// Minimum SDK version
    pub min_sdk: Option<u32>,
}

impl Subproject {
    /// Open a subproject directory
    pub async fn open(dir: PathBuf) -> Result<Self> {
        let build_file = Self::build_file(&dir).ok_or_else(|| {
            MinqBuildError::Project(format!("No Gradle build file in {:?}", dir))
        })?;

        let contents = tokio::fs::read_to_string(&build_file).await?;
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            name,
            kind: SubprojectKind::from_build_file(&contents),
            compile_sdk: parse_sdk_field(&contents, "compileSdk"),
            min_sdk: parse_sdk_field(&contents, "minSdk"),
            namespace: None,
            dir,
        })
    }

    /// Find the Gradle build file for a subproject directory
    pub fn build_file(dir: &Path) -> Option<PathBuf> {
        for candidate in ["build.gradle.kts", "build.gradle"] {
            let path = dir.join(candidate);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }
}

/// Discover subprojects under the workspace root
///
/// Immediate child directories carrying a Gradle build file are treated as
/// subprojects. Results are sorted by name.
pub async fn discover_subprojects(workspace_root: &Path) -> Result<Vec<Subproject>> {
    if !workspace_root.exists() {
        return Err(MinqBuildError::NotFound(format!(
            "Workspace root not found: {:?}",
            workspace_root
        )));
    }

    let mut subprojects = Vec::new();
    let mut dir = tokio::fs::read_dir(workspace_root).await?;

    while let Some(entry) = dir.next_entry().await? {
        let entry_path = entry.path();
        let name = entry_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        // Skip hidden directories and build outputs
        if name.starts_with('.') || name == "build" || name == "gradle" {
            continue;
        }

        if !entry.metadata().await?.is_dir() {
            continue;
        }

        if Subproject::build_file(&entry_path).is_some() {
            debug!("Found subproject {:?}", entry_path);
            subprojects.push(Subproject::open(entry_path).await?);
        }
    }

    subprojects.sort_by(|a, b| a.name.cmp(&b.name));

    info!(
        "Discovered {} subprojects under {:?}",
        subprojects.len(),
        workspace_root
    );
    Ok(subprojects)
}

/// Extract an SDK version field from Gradle build file contents
///
/// Matches both the assignment form (`minSdk = 21`) and the legacy call
/// form (`minSdkVersion 21`).
fn parse_sdk_field(contents: &str, field: &str) -> Option<u32> {
    for line in contents.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(field) {
            let rest = rest
                .trim_start_matches("Version")
                .trim_start()
                .trim_start_matches('=')
                .trim_start();

            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            if !digits.is_empty() {
                return digits.parse().ok();
            }
        }
    }
    None
}
