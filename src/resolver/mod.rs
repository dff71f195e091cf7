//! Workspace-constrained path resolution.
//!
//! Given a path string from an injection site and the workspace roots, this
//! module produces the content to splice into the prompt:
//!
//! - a regular file resolves to its full UTF-8 text
//! - a directory resolves to a one-level listing of its immediate children
//!
//! Absolute paths must lie within a workspace root or resolution fails with
//! [`InjectError::OutOfBounds`]. Relative paths are probed under each root
//! in configured order; the first root where the path exists wins, and
//! exhausting every root is [`InjectError::NotFound`].


use crate::error::{InjectError, Result};
use crate::workspace::Workspace;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve a path string to injectable content.
///
/// See the module docs for the resolution rules. All I/O failures during
/// stat or read carry the underlying OS error text verbatim.
pub fn resolve(path_str: &str, workspace: &dyn Workspace) -> Result<String> {
    let path = Path::new(path_str);

    let target = if path.is_absolute() {
        resolve_absolute(path_str, path, workspace)?
    } else {
        resolve_relative(path_str, workspace)?
    };

    let metadata = fs::metadata(&target).map_err(|e| InjectError::io(path_str, e))?;
    if metadata.is_dir() {
        list_directory(path_str, &target)
    } else {
        fs::read_to_string(&target).map_err(|e| InjectError::io(path_str, e))
    }
}

/// Check an absolute path against the workspace boundary.
fn resolve_absolute(path_str: &str, path: &Path, workspace: &dyn Workspace) -> Result<PathBuf> {
    if !workspace.is_path_within_workspace(path) {
        return Err(InjectError::OutOfBounds {
            path: path_str.to_string(),
        });
    }

    let exists = path
        .try_exists()
        .map_err(|e| InjectError::io(path_str, e))?;
    if !exists {
        return Err(InjectError::NotFound {
            path: path_str.to_string(),
        });
    }

    Ok(path.to_path_buf())
}

/// Probe a relative path under each root in priority order.
///
/// An existence-check failure at one root (e.g. an unreadable root) counts
/// as "not found here" and the search continues; only exhaustion of every
/// root is terminal.
fn resolve_relative(path_str: &str, workspace: &dyn Workspace) -> Result<PathBuf> {
    for root in workspace.directories() {
        let candidate = root.join(path_str);
        if candidate.try_exists().unwrap_or(false) {
            return Ok(candidate);
        }
    }

    Err(InjectError::NotFound {
        path: path_str.to_string(),
    })
}

/// Format a one-level listing of a directory's immediate children.
///
/// Entry order follows the platform's `read_dir` order and is not stable.
fn list_directory(original: &str, dir: &Path) -> Result<String> {
    let mut listing = format!("Directory listing for {}:", original);

    let entries = fs::read_dir(dir).map_err(|e| InjectError::io(original, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| InjectError::io(original, e))?;
        listing.push_str("\n- ");
        listing.push_str(&entry.file_name().to_string_lossy());
    }

    Ok(listing)
}
