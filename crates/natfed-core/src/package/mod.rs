//! ESM entry-point resolution for installed packages.
//!
//! Given a package specifier (`rxjs`, `@angular/common/http`) and a project
//! root, finds the installed package, its version and the file a browser
//! import of that specifier should load.

mod batch;
mod manifest;
mod resolve;
mod specifier;

pub use batch::{list_installed, resolve_all, SharedResolution};
pub use resolve::{get_package_info, resolve_package_info, EntrySource, PackageInfo};
pub use specifier::{package_folder, subpath_key, ROOT_SUBPATH};
