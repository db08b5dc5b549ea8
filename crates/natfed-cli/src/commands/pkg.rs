//! `natfed pkg` command implementation.
//!
//! Resolves the ESM entry point and version of shared packages.

use super::exit_with_json_error;
use miette::{IntoDiagnostic, Result};
use natfed_core::{
    list_installed, resolve_all, CollectingSink, Config, RealFs, ResolveWarning, SharedResolution,
    WarningSink,
};
use std::path::PathBuf;

/// Pkg command action.
#[derive(Debug, Clone)]
pub enum PkgAction {
    /// Resolve the given specifiers.
    Resolve {
        specifiers: Vec<String>,
        project_root: Option<PathBuf>,
    },
    /// Resolve every package installed in the project.
    All { project_root: Option<PathBuf> },
}

/// Forwards resolution warnings to tracing and keeps them for JSON output.
#[derive(Debug, Default)]
struct CliSink {
    collected: CollectingSink,
}

impl WarningSink for CliSink {
    fn warn(&self, warning: ResolveWarning) {
        tracing::warn!(code = warning.code, "{}", warning.message);
        if let Some(hint) = warning.hint {
            tracing::warn!("  >> {hint}");
        }
        self.collected.warn(warning);
    }
}

/// Run the pkg command.
pub fn run(config: &Config, action: PkgAction, json: bool) -> Result<()> {
    let (specifiers, project_root) = match action {
        PkgAction::Resolve {
            specifiers,
            project_root,
        } => (Some(specifiers), project_root),
        PkgAction::All { project_root } => (None, project_root),
    };

    let root = project_root
        .as_deref()
        .map_or_else(|| config.cwd.clone(), |p| config.absolutize(p));

    let specifiers = match specifiers {
        Some(specifiers) => specifiers,
        None => match list_installed(&RealFs, &root, &config.resolver) {
            Ok(names) => names,
            Err(e) if json => exit_with_json_error(&e),
            Err(e) => return Err(e).into_diagnostic(),
        },
    };

    let span = tracing::info_span!("pkg", cmd = "pkg", root = %root.display());
    let _guard = span.enter();
    tracing::debug!(count = specifiers.len(), "resolving shared packages");

    let sink = CliSink::default();
    let results = resolve_all(&RealFs, &specifiers, &root, &config.resolver, &sink);
    let warnings = sink.collected.warnings();

    if json {
        let packages: Vec<_> = results
            .iter()
            .map(|r| resolution_json(r, &warnings))
            .collect();
        println!(
            "{}",
            serde_json::json!({
                "ok": true,
                "project_root": root.to_string_lossy(),
                "packages": packages
            })
        );
    } else {
        let resolved = results.iter().filter(|r| r.info.is_some()).count();
        println!("Resolved {resolved} of {} package(s):", results.len());
        for r in &results {
            match &r.info {
                Some(info) => {
                    println!("  {} @ {}", r.specifier, info.version);
                    println!("    {}", info.entry_point.display());
                }
                None => {
                    let code = warning_for(&r.specifier, &warnings).map_or("UNRESOLVED", |w| w.code);
                    println!("  {} (unresolved: {code})", r.specifier);
                }
            }
        }
    }

    Ok(())
}

fn warning_for<'a>(specifier: &str, warnings: &'a [ResolveWarning]) -> Option<&'a ResolveWarning> {
    warnings.iter().find(|w| w.specifier == specifier)
}

fn resolution_json(r: &SharedResolution, warnings: &[ResolveWarning]) -> serde_json::Value {
    match &r.info {
        Some(info) => serde_json::json!({
            "specifier": r.specifier,
            "package_name": info.package_name,
            "entry_point": info.entry_point.to_string_lossy(),
            "version": info.version,
            "source": info.source.as_str()
        }),
        None => {
            let warning = warning_for(&r.specifier, warnings);
            serde_json::json!({
                "specifier": r.specifier,
                "error": {
                    "code": warning.map_or("UNRESOLVED", |w| w.code),
                    "message": warning.map_or_else(String::new, |w| w.message.clone()),
                    "hint": warning.and_then(|w| w.hint)
                }
            })
        }
    }
}
