//! CLI commands for minq-build
//!
//! Provides command-line interface functionality for automation and scripting.

use std::path::PathBuf;
use anyhow::Result;
use tracing::info;

use minq_build_core::{BuildSettings, discover_subprojects};
use minq_build_engine::{
    BuildLayout, GradleRunner, OverrideTable, PostPackageCopy,
    build_root_path, clean_build_root, resolve_build_root_from_env, BUILD_DIR_ENV,
};

/// Configure command options
pub struct ConfigureCommand {
    /// Workspace root containing the subprojects
    pub workspace_root: PathBuf,
}

impl ConfigureCommand {
    /// Execute the configure command
    ///
    /// Resolves the build root, discovers subprojects, applies the override
    /// table, assigns and creates output directories, and persists the
    /// layout manifest.
    pub async fn execute(&self) -> Result<BuildLayout> {
        let settings = BuildSettings::load(&self.workspace_root).await?;

        let build_root = resolve_build_root_from_env(
            &settings.effective_build_base(),
            &settings.project_name,
        )
        .await?;

        let mut subprojects = discover_subprojects(&self.workspace_root).await?;
        OverrideTable::default().apply_all(&mut subprojects);

        let layout = BuildLayout::assign(build_root, &subprojects);
        layout.create_dirs().await?;
        layout.save().await?;

        info!(
            "Configured {} subprojects under {:?}",
            layout.subprojects.len(),
            layout.build_root
        );
        Ok(layout)
    }
}

/// Package command options
pub struct PackageCommand {
    /// Workspace root containing the subprojects
    pub workspace_root: PathBuf,
}

impl PackageCommand {
    /// Execute the package command
    ///
    /// Configures the layout, runs the Gradle package-debug step, then
    /// exports the packaged outputs.
    pub async fn execute(&self) -> Result<()> {
        let layout = ConfigureCommand {
            workspace_root: self.workspace_root.clone(),
        }
        .execute()
        .await?;

        let settings = BuildSettings::load(&self.workspace_root).await?;
        let target = settings
            .copy_target
            .unwrap_or_else(|| PostPackageCopy::default_target(&self.workspace_root));

        let hook = PostPackageCopy::for_layout(&layout, target)
            .ok_or_else(|| anyhow::anyhow!("No application subproject named 'app'"))?;

        let runner = GradleRunner::new(self.workspace_root.clone(), layout.build_root.clone());
        runner.package_debug().await?;

        let copied = hook.run().await?;
        info!("Packaged outputs exported ({} files)", copied);
        Ok(())
    }
}

/// Clean command options
pub struct CleanCommand {
    /// Workspace root containing the subprojects
    pub workspace_root: PathBuf,
}

impl CleanCommand {
    /// Execute the clean command
    ///
    /// Deletes the build root. Cleaning an already-absent root is a no-op.
    pub async fn execute(&self) -> Result<()> {
        let settings = BuildSettings::load(&self.workspace_root).await?;

        let env_value = std::env::var(BUILD_DIR_ENV).ok();
        let build_root = build_root_path(
            env_value.as_deref(),
            &settings.effective_build_base(),
            &settings.project_name,
        );

        if clean_build_root(&build_root).await? {
            println!("Removed build root: {:?}", build_root);
        } else {
            println!("Build root already clean: {:?}", build_root);
        }
        Ok(())
    }
}

/// Status command options
pub struct StatusCommand {
    /// Workspace root containing the subprojects
    pub workspace_root: PathBuf,
}

impl StatusCommand {
    /// Print the resolved layout
    pub async fn execute(&self) -> Result<()> {
        let settings = BuildSettings::load(&self.workspace_root).await?;

        let env_value = std::env::var(BUILD_DIR_ENV).ok();
        let build_root = build_root_path(
            env_value.as_deref(),
            &settings.effective_build_base(),
            &settings.project_name,
        );

        println!("Minq Build Layout:");
        println!("==================");
        println!("Build root: {:?}", build_root);

        match BuildLayout::load(&build_root).await {
            Ok(layout) => {
                for sp in &layout.subprojects {
                    let sdk = match (sp.compile_sdk, sp.min_sdk) {
                        (Some(c), Some(m)) => format!(" [compileSdk {}, minSdk {}]", c, m),
                        (Some(c), None) => format!(" [compileSdk {}]", c),
                        (None, Some(m)) => format!(" [minSdk {}]", m),
                        (None, None) => String::new(),
                    };
                    println!(
                        "  ✓ {} ({}) -> {:?}{}",
                        sp.name,
                        sp.kind.as_str(),
                        sp.output_dir,
                        sdk
                    );
                }
            }
            Err(_) => {
                println!("  ✗ Not configured (run `minq-build configure`)");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minq_build_core::project::SubprojectKind;

    #[tokio::test]
    async fn test_configure_then_clean() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = dir.path().join("android");
        let build_root = dir.path().join("external_builds");

        let app = workspace.join("app");
        tokio::fs::create_dir_all(&app).await.unwrap();
        tokio::fs::write(
            app.join("build.gradle.kts"),
            "plugins { id(\"com.android.application\") }\n",
        )
        .await
        .unwrap();

        let isar = workspace.join("isar_flutter_libs");
        tokio::fs::create_dir_all(&isar).await.unwrap();
        tokio::fs::write(
            isar.join("build.gradle"),
            "apply plugin: 'com.android.library'\nandroid { minSdkVersion 19 }\n",
        )
        .await
        .unwrap();

        std::env::set_var(BUILD_DIR_ENV, &build_root);

        let layout = ConfigureCommand {
            workspace_root: workspace.clone(),
        }
        .execute()
        .await
        .unwrap();

        let canonical_root = tokio::fs::canonicalize(&build_root).await.unwrap();
        assert_eq!(layout.build_root, canonical_root);
        for sp in &layout.subprojects {
            assert_eq!(sp.output_dir, canonical_root.join(&sp.name));
            assert!(sp.output_dir.is_dir());
        }

        let isar_layout = layout.get("isar_flutter_libs").unwrap();
        assert_eq!(isar_layout.kind, SubprojectKind::Library);
        assert_eq!(isar_layout.min_sdk, Some(21));
        assert_eq!(isar_layout.compile_sdk, Some(34));

        CleanCommand {
            workspace_root: workspace.clone(),
        }
        .execute()
        .await
        .unwrap();
        assert!(!build_root.exists());

        // Cleaning again is a no-op
        CleanCommand {
            workspace_root: workspace,
        }
        .execute()
        .await
        .unwrap();

        std::env::remove_var(BUILD_DIR_ENV);
    }
}
