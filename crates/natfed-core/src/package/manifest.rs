//! package.json field access.
//!
//! Only the three fields the entry-point chain looks at are read; every
//! accessor treats a wrong type the same as a missing field.

use crate::fs::PackageFs;
use serde_json::Value;
use std::path::Path;

/// Read and parse a package.json.
///
/// The error is a short human-readable reason.
pub(crate) fn read_manifest(fs: &dyn PackageFs, path: &Path) -> Result<Value, String> {
    let content = fs
        .read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&content).map_err(|e| format!("Invalid JSON in {}: {e}", path.display()))
}

/// Non-empty `version` string.
pub(crate) fn version(manifest: &Value) -> Option<&str> {
    manifest
        .get("version")
        .and_then(Value::as_str)
        .filter(|v| !v.is_empty())
}

/// `exports[subpath].default`.
pub(crate) fn exports_default<'a>(manifest: &'a Value, subpath: &str) -> Option<&'a str> {
    manifest
        .get("exports")?
        .as_object()?
        .get(subpath)?
        .get("default")
        .and_then(Value::as_str)
        .filter(|target| !target.is_empty())
}

/// Legacy top-level `module` field.
pub(crate) fn module(manifest: &Value) -> Option<&str> {
    manifest
        .get("module")
        .and_then(Value::as_str)
        .filter(|target| !target.is_empty())
}
