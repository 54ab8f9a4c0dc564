//! Clean Task
//!
//! Deletes the build root and everything under it.

use std::path::Path;
use tracing::{info, debug};

use crate::LayoutError;

/// Remove the build root recursively
///
/// Returns `true` when the directory was removed, `false` when it was
/// already absent. Deleting an absent root is a no-op, so running clean
/// twice in a row succeeds.
pub async fn clean_build_root(build_root: &Path) -> Result<bool, LayoutError> {
    if !build_root.exists() {
        debug!("Build root {:?} already absent", build_root);
        return Ok(false);
    }

    info!("Removing build root {:?}", build_root);
    tokio::fs::remove_dir_all(build_root).await?;
    Ok(true)
}
