//! Minq Build - build output router for the Minq Android workspace
//!
//! Main entry point that resolves the output layout and dispatches the
//! maintenance commands.

use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use anyhow::Result;

use minq_build::commands::{CleanCommand, ConfigureCommand, PackageCommand, StatusCommand};
use minq_build::{APP_NAME, VERSION};

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "status".to_string());
    let workspace_root = match args.next() {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir()?,
    };

    info!("{} v{}", APP_NAME, VERSION);

    match command.as_str() {
        "configure" => {
            let layout = ConfigureCommand { workspace_root }.execute().await?;
            println!("Build root: {:?}", layout.build_root);
        }
        "package" => {
            PackageCommand { workspace_root }.execute().await?;
        }
        "clean" => {
            CleanCommand { workspace_root }.execute().await?;
        }
        "status" => {
            StatusCommand { workspace_root }.execute().await?;
        }
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Available commands:");
            eprintln!("  configure  Resolve the build root and assign subproject outputs");
            eprintln!("  package    Run the debug package step and export its outputs");
            eprintln!("  clean      Delete the build root");
            eprintln!("  status     Show the resolved layout");
            std::process::exit(2);
        }
    }

    Ok(())
}
