use crate::plugin::FileItem;
use crate::safety::SafetyChecker;
use crate::scanner::measure_path;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed { path: PathBuf, freed: u64 },
    /// Nothing was on disk any more; counts as clean.
    AlreadyGone { path: PathBuf },
    Failed { path: PathBuf, reason: String },
}

impl DeleteOutcome {
    pub fn freed(&self) -> u64 {
        match self {
            DeleteOutcome::Removed { freed, .. } => *freed,
            _ => 0,
        }
    }

    /// The `(path, freed)` pair to feed back into the result model, if the
    /// path is no longer on disk.
    pub fn removal(&self) -> Option<(PathBuf, u64)> {
        match self {
            DeleteOutcome::Removed { path, freed } => Some((path.clone(), *freed)),
            DeleteOutcome::AlreadyGone { path } => Some((path.clone(), 0)),
            DeleteOutcome::Failed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Successfully removed paths with the bytes each one freed.
    pub removed: Vec<(PathBuf, u64)>,
    pub freed: u64,
    pub duration: Duration,
}

pub struct DeletionEngine {
    safety_checker: SafetyChecker,
}

impl DeletionEngine {
    pub fn new(safety_checker: SafetyChecker) -> Self {
        Self { safety_checker }
    }

    /// Removes one path, re-measuring it first since the cached size may be stale.
    pub fn delete_one(&self, path: &Path) -> DeleteOutcome {
        let Some((freed, _)) = measure_path(path) else {
            tracing::debug!(path = %path.display(), "already gone");
            return DeleteOutcome::AlreadyGone {
                path: path.to_path_buf(),
            };
        };

        match self.remove(path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), bytes = freed, "deleted");
                DeleteOutcome::Removed {
                    path: path.to_path_buf(),
                    freed,
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => DeleteOutcome::AlreadyGone {
                path: path.to_path_buf(),
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), "delete failed: {e}");
                DeleteOutcome::Failed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Removes every marked item of `listing`. Failures are skipped; only
    /// successes are reported, each credited with its listed size.
    pub fn delete_marked(
        &self,
        marked: &HashSet<PathBuf>,
        listing: &[FileItem],
        mut on_progress: impl FnMut(usize, usize, &Path),
    ) -> BatchOutcome {
        let start = Instant::now();
        let targets: Vec<&FileItem> = listing.iter().filter(|i| marked.contains(&i.path)).collect();
        let mut outcome = BatchOutcome::default();

        for (done, item) in targets.iter().enumerate() {
            on_progress(done, targets.len(), &item.path);
            match self.remove(&item.path) {
                Ok(()) => {
                    tracing::info!(path = %item.path.display(), bytes = item.size, "deleted");
                    outcome.removed.push((item.path.clone(), item.size));
                    outcome.freed += item.size;
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    outcome.removed.push((item.path.clone(), 0));
                }
                Err(e) => {
                    tracing::warn!(path = %item.path.display(), "delete failed: {e}");
                }
            }
        }
        on_progress(targets.len(), targets.len(), Path::new(""));

        outcome.duration = start.elapsed();
        outcome
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        if self.safety_checker.is_protected(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "refusing to delete a protected path",
            ));
        }

        let meta = fs::symlink_metadata(path)?;
        if meta.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        }
    }
}

impl Default for DeletionEngine {
    fn default() -> Self {
        Self::new(SafetyChecker::default())
    }
}
