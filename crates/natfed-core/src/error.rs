use std::path::PathBuf;
use thiserror::Error;

/// Error codes surfaced in `--json` output.
pub mod codes {
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
    pub const CONFIG_READ_FAILED: &str = "CONFIG_READ_FAILED";
    pub const CONFIG_PARSE_FAILED: &str = "CONFIG_PARSE_FAILED";
    pub const CONFIG_PATH_MAPPING_INVALID: &str = "CONFIG_PATH_MAPPING_INVALID";
    pub const IO_ERROR: &str = "IO_ERROR";

    pub const PACKAGE_NOT_FOUND: &str = "PACKAGE_NOT_FOUND";
    pub const PACKAGE_METADATA_INVALID: &str = "PACKAGE_METADATA_INVALID";
    pub const NO_ESM_ENTRY_FOUND: &str = "NO_ESM_ENTRY_FOUND";
}

/// Fatal error type for natfed operations.
///
/// These abort the operation that raised them. Per-package resolution
/// problems are [`ResolveFailure`]s instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid path mapping '{key}' in {path}: expected a non-empty list of paths")]
    InvalidPathMapping { path: PathBuf, key: String },
}

impl Error {
    #[must_use]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Stable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => codes::IO_ERROR,
            Self::InvalidArgument(_) => codes::INVALID_ARGUMENT,
            Self::ConfigRead { .. } => codes::CONFIG_READ_FAILED,
            Self::ConfigParse { .. } => codes::CONFIG_PARSE_FAILED,
            Self::InvalidPathMapping { .. } => codes::CONFIG_PATH_MAPPING_INVALID,
        }
    }
}

/// Why a single package specifier could not be resolved.
///
/// Shared dependencies are often optional, so callers treat these as a
/// normal "no result" outcome and keep resolving the remaining specifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveFailure {
    #[error("No package.json found for {specifier}")]
    PackageNotFound { specifier: String, dir: PathBuf },

    #[error("{reason} for {specifier}")]
    PackageMetadataInvalid { specifier: String, reason: String },

    #[error("No esm-based entry point found for {specifier}")]
    NoEsmEntryFound { specifier: String },
}

impl ResolveFailure {
    /// Stable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::PackageNotFound { .. } => codes::PACKAGE_NOT_FOUND,
            Self::PackageMetadataInvalid { .. } => codes::PACKAGE_METADATA_INVALID,
            Self::NoEsmEntryFound { .. } => codes::NO_ESM_ENTRY_FOUND,
        }
    }

    /// The specifier that failed to resolve.
    #[must_use]
    pub fn specifier(&self) -> &str {
        match self {
            Self::PackageNotFound { specifier, .. }
            | Self::PackageMetadataInvalid { specifier, .. }
            | Self::NoEsmEntryFound { specifier } => specifier,
        }
    }

    /// Hint about the likely cause, if there is one worth printing.
    #[must_use]
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NoEsmEntryFound { .. } => Some(
                "Did you confuse dependencies with devDependencies in your package.json or your federation config?",
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_codes() {
        let not_found = ResolveFailure::PackageNotFound {
            specifier: "rxjs".to_string(),
            dir: PathBuf::from("/p/node_modules/rxjs"),
        };
        assert_eq!(not_found.code(), "PACKAGE_NOT_FOUND");
        assert_eq!(not_found.specifier(), "rxjs");
        assert_eq!(not_found.to_string(), "No package.json found for rxjs");
        assert!(not_found.hint().is_none());

        let no_entry = ResolveFailure::NoEsmEntryFound {
            specifier: "jest".to_string(),
        };
        assert_eq!(no_entry.code(), "NO_ESM_ENTRY_FOUND");
        assert!(no_entry.hint().unwrap().contains("devDependencies"));
    }

    #[test]
    fn test_metadata_invalid_message() {
        let failure = ResolveFailure::PackageMetadataInvalid {
            specifier: "lodash".to_string(),
            reason: "No version found".to_string(),
        };
        assert_eq!(failure.to_string(), "No version found for lodash");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::invalid_argument("x").code(),
            codes::INVALID_ARGUMENT
        );
        let parse = Error::ConfigParse {
            path: PathBuf::from("/p/tsconfig.json"),
            message: "Unexpected token".to_string(),
        };
        assert_eq!(parse.code(), codes::CONFIG_PARSE_FAILED);
        assert!(parse.to_string().contains("/p/tsconfig.json"));
    }
}
