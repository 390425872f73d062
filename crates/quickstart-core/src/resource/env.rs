use std::io;
use std::path::{Path, PathBuf};

/// Process and filesystem queries used by the locator.
///
/// `OsEnv` is the real implementation; tests substitute their own.
pub trait ResourceEnv {
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Absolute path of the running executable.
    fn current_exe(&self) -> io::Result<PathBuf>;

    /// `true` only for existing directories; regular files do not count.
    fn is_dir(&self, path: &Path) -> bool;

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    fn set_current_dir(&self, path: &Path) -> io::Result<()>;
}

/// The running process: `std::env` and `std::fs`.
#[derive(Debug, Copy, Clone, Default)]
pub struct OsEnv;

impl ResourceEnv for OsEnv {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn current_exe(&self) -> io::Result<PathBuf> {
        std::env::current_exe()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }

    fn set_current_dir(&self, path: &Path) -> io::Result<()> {
        std::env::set_current_dir(path)
    }
}
