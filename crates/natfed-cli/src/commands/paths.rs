//! `natfed paths` command implementation.
//!
//! Prints the shared mappings declared in a tsconfig `paths` section.

use super::exit_with_json_error;
use miette::{IntoDiagnostic, Result};
use natfed_core::{get_mapped_paths, Config, MappedPathsOptions, RealFs, SharedMappings};
use std::path::PathBuf;

/// Paths command action.
#[derive(Debug, Clone)]
pub struct PathsAction {
    /// tsconfig file, absolute or relative to the working directory.
    pub tsconfig: PathBuf,
    /// Keys to share. Empty shares every key.
    pub share: Vec<String>,
    /// Override for the directory candidates are resolved against.
    pub root: Option<PathBuf>,
}

/// Run the paths command.
pub fn run(config: &Config, action: PathsAction, json: bool) -> Result<()> {
    let shared = if action.share.is_empty() {
        SharedMappings::ShareAll
    } else {
        SharedMappings::only(action.share)
    };

    let mut options =
        MappedPathsOptions::new(config.absolutize(&action.tsconfig)).with_shared_mappings(shared);
    if let Some(root) = &action.root {
        options = options.with_root_path(config.absolutize(root));
    }

    tracing::debug!(
        tsconfig = %options.root_tsconfig_path.display(),
        "reading shared mappings"
    );

    let mapped = match get_mapped_paths(&RealFs, &options) {
        Ok(mapped) => mapped,
        Err(e) if json => exit_with_json_error(&e),
        Err(e) => return Err(e).into_diagnostic(),
    };

    if json {
        println!(
            "{}",
            serde_json::json!({
                "ok": true,
                "mapped_paths": mapped
            })
        );
    } else if mapped.is_empty() {
        println!("No shared mappings found.");
    } else {
        println!("Shared mappings ({}):", mapped.len());
        for m in &mapped {
            println!("  {} -> {}", m.key, m.path.display());
        }
    }

    Ok(())
}
