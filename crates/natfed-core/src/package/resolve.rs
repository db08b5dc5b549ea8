//! The entry-point priority chain.
//!
//! Sources are tried in [`EntrySource::CHAIN`] order and the first hit wins:
//! 1. `exports[subpath].default` of the main package.json
//! 2. `module` of the main package.json, for root requests only
//! 3. `module` of `<modules>/<specifier>/package.json`
//! 4. `<modules>/<specifier>/index.mjs`
//! 5. `<modules>/<specifier>/index.js`

use super::manifest;
use super::specifier::{package_folder, subpath_key, ROOT_SUBPATH};
use crate::config::ResolverConfig;
use crate::error::ResolveFailure;
use crate::fs::PackageFs;
use crate::warnings::{ResolveWarning, WarningSink};
use natfed_util::path::join_relative;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Resolved entry point of one requested specifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    /// The specifier as requested, including any subpath.
    pub package_name: String,
    /// Absolute, normalized path of the ESM entry file.
    pub entry_point: PathBuf,
    /// Version of the main package. Never empty.
    pub version: String,
    /// Which step of the chain produced the entry point.
    pub source: EntrySource,
}

/// A step of the entry-point priority chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySource {
    /// `exports[subpath].default` in the main package.json.
    Exports,
    /// Top-level `module` in the main package.json.
    Module,
    /// `module` in the secondary directory's package.json.
    SecondaryModule,
    /// `index.mjs` in the secondary directory.
    SecondaryIndexMjs,
    /// `index.js` in the secondary directory.
    SecondaryIndexJs,
}

impl EntrySource {
    /// Resolution order.
    pub const CHAIN: [Self; 5] = [
        Self::Exports,
        Self::Module,
        Self::SecondaryModule,
        Self::SecondaryIndexMjs,
        Self::SecondaryIndexJs,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exports => "exports",
            Self::Module => "module",
            Self::SecondaryModule => "secondary_module",
            Self::SecondaryIndexMjs => "secondary_index_mjs",
            Self::SecondaryIndexJs => "secondary_index_js",
        }
    }
}

impl std::fmt::Display for EntrySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything derived from the specifier before the chain runs.
struct ResolutionContext<'a> {
    fs: &'a dyn PackageFs,
    /// `<modules>/<package folder>`
    main_dir: PathBuf,
    /// `<modules>/<specifier>`
    secondary_dir: PathBuf,
    manifest: Value,
    subpath: String,
}

impl<'a> ResolutionContext<'a> {
    fn load(
        fs: &'a dyn PackageFs,
        specifier: &str,
        project_root: &Path,
        config: &ResolverConfig,
    ) -> Result<(Self, String), ResolveFailure> {
        let modules = project_root.join(&config.modules_dir);
        let folder = package_folder(specifier);
        let main_dir = join_relative(&modules, folder);

        if folder.is_empty() || !fs.exists(&main_dir) {
            return Err(ResolveFailure::PackageNotFound {
                specifier: specifier.to_string(),
                dir: main_dir,
            });
        }

        let invalid = |reason: String| ResolveFailure::PackageMetadataInvalid {
            specifier: specifier.to_string(),
            reason,
        };

        let manifest = manifest::read_manifest(fs, &main_dir.join("package.json")).map_err(invalid)?;
        let version = manifest::version(&manifest)
            .ok_or_else(|| invalid("No version found".to_string()))?
            .to_string();

        let ctx = Self {
            fs,
            secondary_dir: join_relative(&modules, specifier),
            subpath: subpath_key(specifier, folder),
            main_dir,
            manifest,
        };
        Ok((ctx, version))
    }

    /// Try one step of the chain.
    fn attempt(&self, source: EntrySource) -> Option<PathBuf> {
        match source {
            EntrySource::Exports => manifest::exports_default(&self.manifest, &self.subpath)
                .map(|target| join_relative(&self.main_dir, target)),
            EntrySource::Module => {
                // A single top-level field cannot describe subpaths.
                if self.subpath != ROOT_SUBPATH {
                    return None;
                }
                manifest::module(&self.manifest).map(|target| join_relative(&self.main_dir, target))
            }
            EntrySource::SecondaryModule => {
                let pkg_json = self.secondary_dir.join("package.json");
                if !self.fs.exists(&pkg_json) {
                    return None;
                }
                let secondary = manifest::read_manifest(self.fs, &pkg_json).ok()?;
                manifest::module(&secondary).map(|target| join_relative(&self.secondary_dir, target))
            }
            EntrySource::SecondaryIndexMjs => self.probe("index.mjs"),
            EntrySource::SecondaryIndexJs => self.probe("index.js"),
        }
    }

    fn probe(&self, file_name: &str) -> Option<PathBuf> {
        let candidate = self.secondary_dir.join(file_name);
        self.fs.exists(&candidate).then_some(candidate)
    }
}

/// Resolve the ESM entry point of `specifier` installed under `project_root`.
///
/// Failures are returned, not reported; see [`get_package_info`] for the
/// warning-emitting form.
pub fn resolve_package_info(
    fs: &dyn PackageFs,
    specifier: &str,
    project_root: &Path,
    config: &ResolverConfig,
) -> Result<PackageInfo, ResolveFailure> {
    let (ctx, version) = ResolutionContext::load(fs, specifier, project_root, config)?;

    EntrySource::CHAIN
        .iter()
        .find_map(|&source| ctx.attempt(source).map(|entry| (entry, source)))
        .map(|(entry_point, source)| PackageInfo {
            package_name: specifier.to_string(),
            entry_point,
            version,
            source,
        })
        .ok_or_else(|| ResolveFailure::NoEsmEntryFound {
            specifier: specifier.to_string(),
        })
}

/// Resolve `specifier`, reporting a failure to `sink` exactly once.
///
/// Returns `None` on failure; a missing or non-ESM package is a normal
/// outcome for shared dependencies.
pub fn get_package_info(
    fs: &dyn PackageFs,
    specifier: &str,
    project_root: &Path,
    config: &ResolverConfig,
    sink: &dyn WarningSink,
) -> Option<PackageInfo> {
    match resolve_package_info(fs, specifier, project_root, config) {
        Ok(info) => Some(info),
        Err(failure) => {
            sink.warn(ResolveWarning::from(&failure));
            None
        }
    }
}
