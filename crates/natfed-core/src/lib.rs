#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::return_self_not_must_use)]

pub mod config;
pub mod error;
pub mod fs;
pub mod mapped_paths;
pub mod package;
pub mod version;
pub mod warnings;

pub use config::{Config, ResolverConfig};
pub use error::{Error, ResolveFailure};
pub use fs::{MemoryFs, PackageFs, RealFs};
pub use mapped_paths::{get_mapped_paths, MappedPath, MappedPathsOptions, SharedMappings};
pub use package::{
    get_package_info, list_installed, resolve_all, resolve_package_info, EntrySource,
    PackageInfo, SharedResolution,
};
pub use version::VERSION;
pub use warnings::{CollectingSink, NullSink, ResolveWarning, WarningSink};
