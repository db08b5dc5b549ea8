//! Filesystem capability used by the resolvers.
//!
//! The resolvers only ever read files, check existence and list
//! directories. Keeping that behind a trait lets the priority chain be
//! tested against [`MemoryFs`] instead of real disk trees.

use natfed_util::path::normalize_path;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// Read-only view of a filesystem.
///
/// Implementations must be thread-safe (Send + Sync); batch resolution
/// shares one instance across worker threads.
pub trait PackageFs: Send + Sync + std::fmt::Debug {
    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Whether a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Entries of a directory, sorted by path.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl PackageFs for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        natfed_util::fs::read_to_string_lossy(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        natfed_util::fs::sorted_dir_entries(path)
    }
}

/// In-memory filesystem.
///
/// Adding a file creates all of its ancestor directories.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

impl MemoryFs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given contents.
    pub fn add_file(&mut self, path: impl AsRef<Path>, contents: impl Into<String>) -> &mut Self {
        let path = normalize_path(path.as_ref());
        self.add_ancestors(&path);
        self.files.insert(path, contents.into());
        self
    }

    /// Add an empty directory.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = normalize_path(path.as_ref());
        self.add_ancestors(&path);
        self.dirs.insert(path);
        self
    }

    /// Builder form of [`MemoryFs::add_file`].
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>, contents: impl Into<String>) -> Self {
        self.add_file(path, contents);
        self
    }

    /// Builder form of [`MemoryFs::add_dir`].
    #[must_use]
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path);
        self
    }

    fn add_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl PackageFs for MemoryFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let path = normalize_path(path);
        self.files.get(&path).cloned().ok_or_else(|| {
            if self.dirs.contains(&path) {
                io::Error::new(io::ErrorKind::InvalidInput, "is a directory")
            } else {
                io::Error::new(io::ErrorKind::NotFound, "no such file")
            }
        })
    }

    fn exists(&self, path: &Path) -> bool {
        let path = normalize_path(path);
        self.files.contains_key(&path) || self.dirs.contains(&path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let path = normalize_path(path);
        if !self.dirs.contains(&path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", path.display()),
            ));
        }

        let entries: BTreeSet<PathBuf> = self
            .files
            .keys()
            .chain(self.dirs.iter())
            .filter(|p| p.parent() == Some(path.as_path()))
            .cloned()
            .collect();
        Ok(entries.into_iter().collect())
    }
}
