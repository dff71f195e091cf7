//! Workspace root resolution and containment for inlay.
//!
//! This module provides the boundary layer that decides which parts of the
//! filesystem an injection may read. A workspace is an ordered list of
//! absolute root directories: the first entry is the primary root, and order
//! matters for relative-path lookup priority. Containment is checked against
//! the set of roots regardless of order.
//!
//! Containment respects path-segment boundaries: `/work/space-evil` is not
//! inside the root `/work/space`. Candidate paths are canonicalized when they
//! exist (so symlinks cannot smuggle a path across the boundary) and
//! lexically normalized otherwise (`.` removed, `..` resolved).

use crate::config::Config;
use crate::error::{InjectError, Result};
use std::path::{Component, Path, PathBuf};

/// Capability interface over a set of workspace roots.
///
/// The injection core only queries this collaborator; it never constructs
/// or mutates the roots itself. Tests substitute in-memory fakes.
pub trait Workspace {
    /// The configured root directories, primary root first.
    fn directories(&self) -> Vec<PathBuf>;

    /// Whether an absolute path lies within at least one root.
    fn is_path_within_workspace(&self, path: &Path) -> bool;
}

/// Concrete workspace built from configured root directories.
///
/// All roots are absolute. Roots that exist on disk are canonicalized at
/// construction time so later containment checks compare like with like.
#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    roots: Vec<PathBuf>,
}

impl WorkspaceContext {
    /// Build a workspace from an ordered list of root directories.
    ///
    /// # Returns
    ///
    /// * `Ok(WorkspaceContext)` - All roots are absolute; the list is non-empty
    /// * `Err(InjectError::Config)` - Empty list or a relative root
    pub fn new(roots: Vec<PathBuf>) -> Result<Self> {
        if roots.is_empty() {
            return Err(InjectError::Config(
                "workspace must have at least one root directory".to_string(),
            ));
        }

        let mut normalized = Vec::with_capacity(roots.len());
        for root in roots {
            if !root.is_absolute() {
                return Err(InjectError::Config(format!(
                    "workspace root '{}' must be an absolute path",
                    root.display()
                )));
            }
            normalized.push(normalize_path(&root));
        }

        Ok(Self { roots: normalized })
    }

    /// Build a workspace from the ambient configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.workspace_roots.iter().map(PathBuf::from).collect())
    }

    /// The primary root (first configured entry).
    pub fn primary_root(&self) -> &Path {
        // Constructor guarantees at least one root.
        &self.roots[0]
    }
}

impl Workspace for WorkspaceContext {
    fn directories(&self) -> Vec<PathBuf> {
        self.roots.clone()
    }

    fn is_path_within_workspace(&self, path: &Path) -> bool {
        let candidate = normalize_path(path);
        self.roots.iter().any(|root| candidate.starts_with(root))
    }
}

/// Normalize a path for comparison.
///
/// Canonicalizes when the path exists (resolving symlinks and `..`). For a
/// path that does not exist, the deepest existing ancestor is canonicalized
/// and the remaining components are appended after lexical normalization,
/// so containment checks on not-yet-existing paths still respect segment
/// boundaries and symlinked prefixes.
fn normalize_path(path: &Path) -> PathBuf {
    let lexical = lexical_normalize(path);
    match lexical.canonicalize() {
        Ok(p) => p,
        Err(_) => match (lexical.parent(), lexical.file_name()) {
            (Some(parent), Some(name)) => {
                let mut base = normalize_path(parent);
                base.push(name);
                base
            }
            _ => lexical,
        },
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root.
                if result.parent().is_some() {
                    result.pop();
                }
            }
            other => result.push(other),
        }
    }
    result
}
