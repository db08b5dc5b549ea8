//! Shared mappings from a tsconfig `compilerOptions.paths` section.
//!
//! Each alias key maps to the directory (or file) of its first path
//! candidate, resolved against the project root. The config file is
//! parsed as JSONC so comments and trailing commas are accepted.

use crate::error::Error;
use crate::fs::PackageFs;
use natfed_util::path::{join_relative, normalize_path};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// One alias key and the absolute path it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedPath {
    pub key: String,
    pub path: PathBuf,
}

/// Which `paths` keys to share.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SharedMappings {
    /// Every key in the config.
    #[default]
    ShareAll,
    /// Only the listed keys. An empty set shares nothing.
    ShareOnly(BTreeSet<String>),
}

impl SharedMappings {
    /// Share only the given keys.
    pub fn only<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ShareOnly(keys.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn includes(&self, key: &str) -> bool {
        match self {
            Self::ShareAll => true,
            Self::ShareOnly(keys) => keys.contains(key),
        }
    }
}

/// Options for [`get_mapped_paths`].
#[derive(Debug, Clone)]
pub struct MappedPathsOptions {
    /// Absolute path of the tsconfig file.
    pub root_tsconfig_path: PathBuf,
    pub shared_mappings: SharedMappings,
    /// Directory candidates are resolved against. Defaults to the
    /// directory containing the tsconfig file.
    pub root_path: Option<PathBuf>,
}

impl MappedPathsOptions {
    #[must_use]
    pub fn new(root_tsconfig_path: impl Into<PathBuf>) -> Self {
        Self {
            root_tsconfig_path: root_tsconfig_path.into(),
            shared_mappings: SharedMappings::ShareAll,
            root_path: None,
        }
    }

    #[must_use]
    pub fn with_shared_mappings(mut self, shared_mappings: SharedMappings) -> Self {
        self.shared_mappings = shared_mappings;
        self
    }

    #[must_use]
    pub fn with_root_path(mut self, root_path: impl Into<PathBuf>) -> Self {
        self.root_path = Some(root_path.into());
        self
    }
}

/// Read the tsconfig and return its shared path mappings in document order.
///
/// A config without `compilerOptions.paths` yields an empty list. Only the
/// first candidate of each key is used.
pub fn get_mapped_paths(
    fs: &dyn PackageFs,
    options: &MappedPathsOptions,
) -> Result<Vec<MappedPath>, Error> {
    let config_path = &options.root_tsconfig_path;
    if !config_path.is_absolute() {
        return Err(Error::invalid_argument(format!(
            "tsconfig path needs to be an absolute path: {}",
            config_path.display()
        )));
    }

    let root = match &options.root_path {
        Some(root) if !root.is_absolute() => {
            return Err(Error::invalid_argument(format!(
                "root path needs to be an absolute path: {}",
                root.display()
            )));
        }
        Some(root) => normalize_path(root),
        None => normalize_path(config_path.parent().unwrap_or(Path::new("/"))),
    };

    let config = read_jsonc(fs, config_path)?;

    let Some(mappings) = config
        .get("compilerOptions")
        .and_then(|opts| opts.get("paths"))
        .and_then(Value::as_object)
    else {
        return Ok(Vec::new());
    };

    let mut result = Vec::new();
    for (key, candidates) in mappings {
        if !options.shared_mappings.includes(key) {
            continue;
        }

        let first = candidates
            .as_array()
            .and_then(|list| list.first())
            .and_then(Value::as_str)
            .ok_or_else(|| Error::InvalidPathMapping {
                path: config_path.clone(),
                key: key.clone(),
            })?;

        result.push(MappedPath {
            key: key.clone(),
            path: join_relative(&root, first),
        });
    }

    Ok(result)
}

/// Read and parse a JSONC document.
fn read_jsonc(fs: &dyn PackageFs, path: &Path) -> Result<Value, Error> {
    let text = fs.read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = jsonc_parser::parse_to_serde_value::<Option<Value>>(
        &text,
        &jsonc_parser::ParseOptions::default(),
    )
    .map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    parsed.ok_or_else(|| Error::ConfigParse {
        path: path.to_path_buf(),
        message: "document is empty".to_string(),
    })
}
