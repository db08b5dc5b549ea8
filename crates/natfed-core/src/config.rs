use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default name of the directory packages are installed into.
pub const DEFAULT_MODULES_DIR: &str = "node_modules";

/// Resolver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Module-install directory, relative to the project root.
    pub modules_dir: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            modules_dir: DEFAULT_MODULES_DIR.to_string(),
        }
    }
}

/// Runtime configuration for the natfed CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Current working directory.
    pub cwd: PathBuf,

    /// Whether to emit JSON logs.
    pub json_logs: bool,

    /// Verbosity level (0 = INFO, 1 = DEBUG, 2+ = TRACE).
    pub verbosity: u8,

    /// Package resolution settings.
    pub resolver: ResolverConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            json_logs: false,
            verbosity: 0,
            resolver: ResolverConfig::default(),
        }
    }
}

impl Config {
    /// Create a new config with the given working directory.
    #[must_use]
    pub fn new(cwd: PathBuf) -> Self {
        Self {
            cwd,
            ..Default::default()
        }
    }

    /// Set verbosity level.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set JSON log output.
    #[must_use]
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }

    /// Override the module-install directory name.
    #[must_use]
    pub fn with_modules_dir(mut self, modules_dir: impl Into<String>) -> Self {
        self.resolver.modules_dir = modules_dir.into();
        self
    }

    /// Make `path` absolute against the working directory.
    #[must_use]
    pub fn absolutize(&self, path: &std::path::Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            natfed_util::path::normalize_path(&self.cwd.join(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_modules_dir() {
        assert_eq!(ResolverConfig::default().modules_dir, "node_modules");
    }

    #[test]
    fn test_builders() {
        let config = Config::new(PathBuf::from("/work"))
            .with_verbosity(2)
            .with_json_logs(true)
            .with_modules_dir("vendor_modules");
        assert_eq!(config.verbosity, 2);
        assert!(config.json_logs);
        assert_eq!(config.resolver.modules_dir, "vendor_modules");
    }

    #[cfg(unix)]
    #[test]
    fn test_absolutize() {
        let config = Config::new(PathBuf::from("/work/app"));
        assert_eq!(
            config.absolutize(Path::new("../tsconfig.json")),
            PathBuf::from("/work/tsconfig.json")
        );
        assert_eq!(
            config.absolutize(Path::new("/etc/tsconfig.json")),
            PathBuf::from("/etc/tsconfig.json")
        );
    }
}
