//! Splitting package specifiers into install folder and subpath.
//!
//! Specifiers are not filesystem paths, so this works on `/`-delimited
//! segments and never normalizes `.` or `..`.

/// Exports-map key for the package root.
pub const ROOT_SUBPATH: &str = ".";

/// The folder a specifier's package is installed under.
///
/// `@scope/pkg/feature` lives in `@scope/pkg`; `rxjs/operators` lives in `rxjs`.
#[must_use]
pub fn package_folder(specifier: &str) -> &str {
    let mut segments = specifier.splitn(3, '/');
    let first = segments.next().unwrap_or_default();

    if first.starts_with('@') {
        if let Some(name) = segments.next() {
            return &specifier[..first.len() + 1 + name.len()];
        }
    }

    first
}

/// The exports-map key for the part of `specifier` below `folder`.
///
/// Returns `"."` when the specifier names the package itself, otherwise
/// `"./"` followed by the remaining segments. Empty segments are dropped.
#[must_use]
pub fn subpath_key(specifier: &str, folder: &str) -> String {
    let rest = specifier.strip_prefix(folder).unwrap_or(specifier);
    let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();

    if segments.is_empty() {
        ROOT_SUBPATH.to_string()
    } else {
        format!("./{}", segments.join("/"))
    }
}
