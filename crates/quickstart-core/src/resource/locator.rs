use std::fmt;
use std::path::{Path, PathBuf};

use super::env::{OsEnv, ResourceEnv};
use super::error::ResourceError;

/// Search parameters.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LocatorConfig {
    /// How many directories above the executable's directory are searched.
    /// `0` checks only the executable's own directory.
    pub ancestor_depth: usize,

    /// Check `<exe_dir>/../Resources/<folder>` before anything else
    /// (macOS application bundles).
    pub check_bundle: bool,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            ancestor_depth: 3,
            check_bundle: cfg!(target_os = "macos"),
        }
    }
}

/// Where a candidate path came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CandidateKind {
    Bundle,
    WorkingDir,
    /// Number of levels above the executable's directory (0 = the directory itself).
    ExeAncestor(usize),
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateKind::Bundle => write!(f, "bundle"),
            CandidateKind::WorkingDir => write!(f, "working dir"),
            CandidateKind::ExeAncestor(0) => write!(f, "exe dir"),
            CandidateKind::ExeAncestor(n) => write!(f, "exe dir +{n}"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Candidate {
    pub kind: CandidateKind,
    pub path: PathBuf,
}

/// Outcome of a search: the first matching candidate, or nothing.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Resolution {
    Found(Candidate),
    NotFound,
}

impl Resolution {
    pub fn into_candidate(self) -> Option<Candidate> {
        match self {
            Resolution::Found(c) => Some(c),
            Resolution::NotFound => None,
        }
    }
}

/// Resolves a resource folder name to a directory and activates it.
#[derive(Debug, Clone, Default)]
pub struct ResourceLocator<E = OsEnv> {
    env: E,
    config: LocatorConfig,
}

impl ResourceLocator<OsEnv> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: ResourceEnv> ResourceLocator<E> {
    pub fn with_env(env: E, config: LocatorConfig) -> Self {
        Self { env, config }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Directory containing the executable, if it can be determined.
    fn exe_dir(&self) -> Option<PathBuf> {
        match self.env.current_exe() {
            Ok(exe) => {
                let dir = exe.parent().map(Path::to_path_buf);
                if dir.is_none() {
                    log::warn!(
                        "executable path {} has no parent; searching the working directory only",
                        exe.display()
                    );
                }
                dir
            }
            Err(err) => {
                log::warn!("cannot determine executable path ({err}); searching the working directory only");
                None
            }
        }
    }

    /// Ordered search list for `folder`. Recomputed on every call.
    ///
    /// Ancestors are spelled as literal `..` segments so the filesystem
    /// resolves them through the physical parent of a symlinked exe dir.
    /// Only the bundle path touches the filesystem here (canonicalization);
    /// existence checks happen in [`resolve`](Self::resolve).
    pub fn candidates(&self, folder: &str) -> Vec<Candidate> {
        let mut out = Vec::with_capacity(self.config.ancestor_depth + 3);
        let exe_dir = self.exe_dir();

        if self.config.check_bundle {
            if let Some(contents) = exe_dir.as_deref().and_then(Path::parent) {
                let joined = contents.join("Resources").join(folder);
                let path = self.env.canonicalize(&joined).unwrap_or(joined);
                out.push(Candidate { kind: CandidateKind::Bundle, path });
            }
        }

        let cwd_path = match self.env.current_dir() {
            Ok(cwd) => cwd.join(folder),
            Err(err) => {
                log::debug!("cannot read working directory ({err}); using relative path");
                PathBuf::from(folder)
            }
        };
        out.push(Candidate { kind: CandidateKind::WorkingDir, path: cwd_path });

        if let Some(mut dir) = exe_dir {
            for level in 0..=self.config.ancestor_depth {
                out.push(Candidate {
                    kind: CandidateKind::ExeAncestor(level),
                    path: dir.join(folder),
                });
                dir.push("..");
            }
        }

        out
    }

    /// Finds the first candidate that exists as a directory.
    pub fn resolve(&self, folder: &str) -> Result<Resolution, ResourceError> {
        if folder.is_empty() {
            return Err(ResourceError::EmptyName);
        }

        let found = self.candidates(folder).into_iter().find(|c| {
            let hit = self.env.is_dir(&c.path);
            log::trace!("resource candidate [{}] {} -> {}", c.kind, c.path.display(), hit);
            hit
        });

        Ok(found.map_or(Resolution::NotFound, Resolution::Found))
    }

    /// Resolves `folder` and makes it the working directory.
    ///
    /// The working directory changes at most once, and not at all on error.
    pub fn activate(&self, folder: &str) -> Result<Candidate, ResourceError> {
        let candidate = self
            .resolve(folder)?
            .into_candidate()
            .ok_or_else(|| ResourceError::NotFound { folder: folder.to_string() })?;

        self.env
            .set_current_dir(&candidate.path)
            .map_err(|source| ResourceError::Activate { path: candidate.path.clone(), source })?;

        log::info!("resource folder [{}]: {}", candidate.kind, candidate.path.display());
        Ok(candidate)
    }
}
