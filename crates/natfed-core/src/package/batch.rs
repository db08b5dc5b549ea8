//! Resolving many shared specifiers at once.

use super::resolve::{get_package_info, PackageInfo};
use crate::config::ResolverConfig;
use crate::error::Error;
use crate::fs::PackageFs;
use crate::warnings::WarningSink;
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

/// Outcome for one requested specifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedResolution {
    pub specifier: String,
    pub info: Option<PackageInfo>,
}

/// Resolve every specifier independently, in parallel.
///
/// Results come back in input order. Each failure is reported to `sink`
/// and leaves `info` empty without affecting the other specifiers.
pub fn resolve_all<S: AsRef<str> + Sync>(
    fs: &dyn PackageFs,
    specifiers: &[S],
    project_root: &Path,
    config: &ResolverConfig,
    sink: &dyn WarningSink,
) -> Vec<SharedResolution> {
    specifiers
        .par_iter()
        .map(|specifier| {
            let specifier = specifier.as_ref();
            SharedResolution {
                specifier: specifier.to_string(),
                info: get_package_info(fs, specifier, project_root, config, sink),
            }
        })
        .collect()
}

/// Names of all packages installed directly under the module-install
/// directory, sorted.
///
/// `@scope` directories are expanded to `@scope/name`. Dot-directories
/// (`.bin`, `.pnpm`) and entries without a package.json are skipped.
pub fn list_installed(
    fs: &dyn PackageFs,
    project_root: &Path,
    config: &ResolverConfig,
) -> Result<Vec<String>, Error> {
    let modules = project_root.join(&config.modules_dir);
    let mut names = Vec::new();

    for entry in fs.read_dir(&modules)? {
        let Some(name) = entry.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }

        if name.starts_with('@') {
            for scoped in fs.read_dir(&entry)? {
                let Some(pkg) = scoped.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                if !pkg.starts_with('.') && fs.exists(&scoped.join("package.json")) {
                    names.push(format!("{name}/{pkg}"));
                }
            }
        } else if fs.exists(&entry.join("package.json")) {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;
    use crate::warnings::CollectingSink;
    use serde_json::json;

    fn fixture() -> MemoryFs {
        MemoryFs::new()
            .with_file(
                "/proj/node_modules/rxjs/package.json",
                json!({ "version": "7.8.1", "module": "dist/esm5/index.js" }).to_string(),
            )
            .with_file(
                "/proj/node_modules/@angular/core/package.json",
                json!({
                    "version": "17.0.0",
                    "exports": { ".": { "default": "./fesm2022/core.mjs" } }
                })
                .to_string(),
            )
            .with_file(
                "/proj/node_modules/@angular/common/package.json",
                json!({ "version": "17.0.0" }).to_string(),
            )
            .with_file("/proj/node_modules/.bin/tsc", "")
            .with_file("/proj/node_modules/.package-lock.json", "{}")
            .with_dir("/proj/node_modules/empty-dir")
    }

    #[test]
    fn test_resolve_all_keeps_order_and_isolates_failures() {
        let fs = fixture();
        let sink = CollectingSink::new();
        let specifiers = ["@angular/core", "missing", "rxjs", "@angular/common"];

        let results = resolve_all(
            &fs,
            &specifiers,
            Path::new("/proj"),
            &ResolverConfig::default(),
            &sink,
        );

        let names: Vec<_> = results.iter().map(|r| r.specifier.as_str()).collect();
        assert_eq!(names, specifiers);
        assert!(results[0].info.is_some());
        assert!(results[1].info.is_none());
        assert!(results[2].info.is_some());
        assert!(results[3].info.is_none());

        let mut codes: Vec<_> = sink.warnings().into_iter().map(|w| w.code).collect();
        codes.sort_unstable();
        assert_eq!(codes, vec!["NO_ESM_ENTRY_FOUND", "PACKAGE_NOT_FOUND"]);
    }

    #[test]
    fn test_resolve_all_empty() {
        let results = resolve_all::<String>(
            &fixture(),
            &[],
            Path::new("/proj"),
            &ResolverConfig::default(),
            &CollectingSink::new(),
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_list_installed() {
        let names =
            list_installed(&fixture(), Path::new("/proj"), &ResolverConfig::default()).unwrap();
        assert_eq!(names, vec!["@angular/common", "@angular/core", "rxjs"]);
    }

    #[test]
    fn test_list_installed_without_modules_dir() {
        let err = list_installed(&MemoryFs::new(), Path::new("/proj"), &ResolverConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
