//! Error types for inlay.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Every resolution failure is scoped to a single injection site: the expander
//! catches these at the per-injection boundary and never lets them escape an
//! expansion call.

use thiserror::Error;

/// Failure resolving a single injection site.
#[derive(Error, Debug)]
pub enum InjectError {
    /// An absolute path lies outside every configured workspace root.
    #[error("path '{path}' is outside the workspace root directories")]
    OutOfBounds {
        /// The offending path as the user wrote it.
        path: String,
    },

    /// A path does not exist under any configured workspace root.
    #[error("file or directory '{path}' not found in any workspace root")]
    NotFound {
        /// The path as the user wrote it.
        path: String,
    },

    /// An OS-level read failure (permissions, encoding, transient I/O).
    #[error("failed to read '{path}': {message}")]
    Io {
        /// The path that was being read or listed.
        path: String,
        /// The underlying cause text, verbatim.
        message: String,
    },

    /// Configuration could not be loaded or failed validation.
    #[error("{0}")]
    Config(String),
}

impl InjectError {
    /// Build an `Io` variant from a std I/O error, keeping the cause text.
    pub fn io(path: impl Into<String>, err: std::io::Error) -> Self {
        InjectError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for inlay operations.
pub type Result<T> = std::result::Result<T, InjectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_the_path() {
        let err = InjectError::OutOfBounds {
            path: "/etc/passwd".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "path '/etc/passwd' is outside the workspace root directories"
        );
    }

    #[test]
    fn not_found_message_names_the_path() {
        let err = InjectError::NotFound {
            path: "missing.txt".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "file or directory 'missing.txt' not found in any workspace root"
        );
    }

    #[test]
    fn io_variant_keeps_cause_text() {
        let cause = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err = InjectError::io("secret.txt", cause);
        assert_eq!(
            err.to_string(),
            "failed to read 'secret.txt': permission denied"
        );
    }

    #[test]
    fn config_message_passes_through() {
        let err = InjectError::Config("workspace_roots must not be empty".to_string());
        assert_eq!(err.to_string(), "workspace_roots must not be empty");
    }
}
