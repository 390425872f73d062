//! Resource directory resolution.
//!
//! Assets are loaded through relative paths ("wabbit_alpha.png"), so before
//! anything is loaded the process working directory is moved into the
//! `resources` folder. The folder is searched for in a fixed order:
//!
//! 1. the platform bundle path `<exe_dir>/../Resources/<folder>` (optional)
//! 2. `<cwd>/<folder>`
//! 3. `<exe_dir>/<folder>`, then one, two, three levels above `exe_dir`
//!
//! The first candidate that exists as a directory becomes the working
//! directory. Nothing is changed when no candidate matches.

mod env;
mod error;
mod locator;

pub use env::{OsEnv, ResourceEnv};
pub use error::ResourceError;
pub use locator::{Candidate, CandidateKind, LocatorConfig, Resolution, ResourceLocator};

/// Finds `folder` with the default search order and makes it the working
/// directory.
///
/// Returns `false` when nothing was found or the directory could not be
/// entered; the reason is logged and the working directory is left as it was.
pub fn locate_and_activate(folder: &str) -> bool {
    match ResourceLocator::new().activate(folder) {
        Ok(_) => true,
        Err(err @ ResourceError::NotFound { .. }) => {
            log::warn!("{err}");
            false
        }
        Err(err) => {
            log::error!("{err}");
            false
        }
    }
}
