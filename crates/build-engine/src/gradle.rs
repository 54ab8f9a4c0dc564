//! Gradle Invocation
//!
//! Runs the debug package step through the project's Gradle wrapper with
//! the resolved build root exported to the child process.

use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{info, debug};

use crate::hooks::HOOK_SUBPROJECT;
use crate::root::BUILD_DIR_ENV;
use crate::LayoutError;

/// Runs Gradle tasks for the workspace
pub struct GradleRunner {
    workspace_root: PathBuf,
    build_root: PathBuf,
}

impl GradleRunner {
    /// Create a runner for a workspace and its resolved build root
    pub fn new(workspace_root: PathBuf, build_root: PathBuf) -> Self {
        Self {
            workspace_root,
            build_root,
        }
    }

    /// Get gradlew path
    fn gradlew_path(&self) -> PathBuf {
        let wrapper_name = if cfg!(windows) {
            "gradlew.bat"
        } else {
            "gradlew"
        };
        self.workspace_root.join(wrapper_name)
    }

    /// Check if the Gradle wrapper exists
    pub fn has_gradle_wrapper(&self) -> bool {
        self.gradlew_path().exists()
    }

    /// Run the package-debug task for the application subproject
    pub async fn package_debug(&self) -> Result<(), LayoutError> {
        if !self.has_gradle_wrapper() {
            return Err(LayoutError::ToolchainNotFound(
                "Gradle wrapper not found".into(),
            ));
        }

        let task = format!(":{}:packageDebug", HOOK_SUBPROJECT);
        info!("Running Gradle task {}", task);
        debug!("Exporting {}={:?}", BUILD_DIR_ENV, self.build_root);

        let output = Command::new(self.gradlew_path())
            .current_dir(&self.workspace_root)
            .arg(&task)
            .arg("--console=plain")
            .env(BUILD_DIR_ENV, &self.build_root)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            return Err(LayoutError::PackageFailed(format!(
                "{}\n{}",
                stdout, stderr
            )));
        }

        info!("Gradle packaging completed successfully");
        Ok(())
    }
}
