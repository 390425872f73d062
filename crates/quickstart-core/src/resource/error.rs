use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure to resolve or enter a resource directory.
#[derive(Debug)]
pub enum ResourceError {
    /// The folder name was empty.
    EmptyName,
    /// No candidate exists as a directory.
    NotFound { folder: String },
    /// A candidate matched but the working directory could not be changed.
    Activate { path: PathBuf, source: io::Error },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::EmptyName => write!(f, "resource folder name is empty"),
            ResourceError::NotFound { folder } => {
                write!(f, "resource folder `{folder}` not found in any search location")
            }
            ResourceError::Activate { path, source } => {
                write!(f, "failed to enter resource folder {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResourceError::Activate { source, .. } => Some(source),
            _ => None,
        }
    }
}
