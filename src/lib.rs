//! Inlay: workspace-scoped file content injection for agent prompts.
//!
//! Prompts authored for coding agents can reference workspace files inline
//! with `@{path}` placeholders. This crate scans a prompt for those sites,
//! resolves each path against a configured set of workspace root
//! directories, and splices the file content (or a directory listing) into
//! the text.
//!
//! Resolution is workspace-constrained: absolute paths must lie within a
//! configured root, and relative paths are looked up under each root in
//! priority order. A placeholder that cannot be resolved is left untouched
//! in the output and reported through a [`notify::NotificationSink`];
//! expansion itself never fails.
//!
//! # Example
//!
//! ```no_run
//! use inlay::expander;
//! use inlay::notify::NdjsonSink;
//! use inlay::workspace::WorkspaceContext;
//!
//! let workspace = WorkspaceContext::new(vec!["/work/project".into()])?;
//! let sink = NdjsonSink::new("/work/project/.inlay/notifications.ndjson");
//!
//! let expanded = expander::process(
//!     "Review @{src/main.rs} and summarize @{docs}",
//!     Some(&workspace),
//!     &sink,
//! );
//! # Ok::<(), inlay::error::InjectError>(())
//! ```

pub mod config;
pub mod error;
pub mod expander;
pub mod notify;
pub mod resolver;
pub mod scanner;
pub mod workspace;

pub use config::Config;
pub use error::{InjectError, Result};
pub use expander::process;
pub use notify::{Notification, NotificationKind, NotificationSink};
pub use scanner::InjectionSpan;
pub use workspace::{Workspace, WorkspaceContext};
