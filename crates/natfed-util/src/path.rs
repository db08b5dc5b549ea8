//! Lexical path helpers.
//!
//! Nothing here touches the filesystem: the paths being built usually point
//! into `node_modules` or at alias targets that may not exist yet.

use std::path::{Component, Path, PathBuf};

/// Normalize a path lexically, collapsing `.` and `..` segments.
///
/// `..` at the root stays at the root, so `/proj/../../lib` becomes `/lib`.
/// On Windows the drive prefix is kept and separators are unified by
/// rebuilding the path from its components.
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(c @ Component::Prefix(..)) = components.peek().copied() {
        components.next();
        PathBuf::from(c.as_os_str())
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            Component::Prefix(..) => {}
            Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // Relative paths keep leading `..` segments they cannot collapse.
                if ret.file_name().is_some() {
                    ret.pop();
                } else if !ret.has_root() {
                    ret.push("..");
                }
            }
            Component::Normal(c) => ret.push(c),
        }
    }

    ret
}

/// Join a `/`-separated relative path onto `base` and normalize the result.
///
/// Mirrors Node's `path.join`: a leading `/` in `rel` does not make it
/// absolute, it is just another separator.
#[must_use]
pub fn join_relative(base: &Path, rel: &str) -> PathBuf {
    let mut joined = base.to_path_buf();
    for segment in rel.split(['/', '\\']).filter(|s| !s.is_empty()) {
        joined.push(segment);
    }
    normalize_path(&joined)
}
