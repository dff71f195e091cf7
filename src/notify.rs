//! Failure notification plumbing for inlay.
//!
//! Failed injections are reported through a `NotificationSink`, an opaque
//! collaborator the host agent supplies (a UI message bus, an audit log, a
//! test recorder). Notifications fire exactly once per failed injection and
//! never on success.
//!
//! # Notification format
//!
//! Each notification carries:
//! - `ts`: RFC3339 timestamp, used as an ordering token
//! - `kind`: the severity (only `error` exists today)
//! - `actor`: the owner string (e.g., `user@HOST`)
//! - `text`: the operator-facing failure message
//!
//! `NdjsonSink` persists notifications as single-line JSON objects appended
//! to an `.ndjson` file, one object per line. The sink is best-effort: its
//! own write failures are swallowed and never disturb prompt expansion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// An injection failed to resolve.
    Error,
}

/// A structured failure event emitted for one failed injection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// RFC3339 timestamp when the failure occurred.
    pub ts: DateTime<Utc>,

    /// Severity of the notification.
    pub kind: NotificationKind,

    /// The actor owning the expansion (e.g., `user@HOST`).
    pub actor: String,

    /// The operator-facing failure message.
    pub text: String,
}

impl Notification {
    /// Create an error notification with the given message.
    ///
    /// The timestamp is set to the current time, and the actor is
    /// determined from the environment (USER@HOSTNAME).
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            ts: Utc::now(),
            kind: NotificationKind::Error,
            actor: get_actor_string(),
            text: text.into(),
        }
    }

    /// Serialize the notification to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Get the actor string for notification metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Capability interface for receiving failure notifications.
pub trait NotificationSink {
    /// Deliver one notification. Implementations must not panic; delivery
    /// is best-effort from the expander's point of view.
    fn notify(&self, notification: Notification);
}

/// Sink that appends notifications to an NDJSON file.
///
/// The file is created on first write, along with missing parent
/// directories. Each notification becomes one JSON line with a trailing
/// newline. Write failures are silently dropped.
#[derive(Debug, Clone)]
pub struct NdjsonSink {
    path: PathBuf,
}

impl NdjsonSink {
    /// Create a sink writing to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn try_append(&self, notification: &Notification) -> std::io::Result<()> {
        let line = notification
            .to_ndjson_line()
            .map_err(std::io::Error::other)?;

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}

impl NotificationSink for NdjsonSink {
    fn notify(&self, notification: Notification) {
        // Best-effort: a broken audit log must not break expansion.
        let _ = self.try_append(&notification);
    }
}

/// Sink that records notifications in memory, for tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    received: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The notifications received so far, in delivery order.
    pub fn received(&self) -> Vec<Notification> {
        self.received.lock().expect("sink lock poisoned").clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.received
            .lock()
            .expect("sink lock poisoned")
            .push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn error_notification_has_error_kind_and_actor() {
        let n = Notification::error("something failed");
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.text, "something failed");
        assert!(n.actor.contains('@'));
    }

    #[test]
    fn ndjson_line_is_single_line_json() {
        let n = Notification::error("boom");
        let line = n.to_ndjson_line().unwrap();
        assert!(!line.contains('\n'));

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["kind"], "error");
        assert_eq!(parsed["text"], "boom");
        assert!(parsed["ts"].is_string());
    }

    #[test]
    fn ndjson_sink_appends_one_line_per_notification() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs/notifications.ndjson");
        let sink = NdjsonSink::new(&path);

        sink.notify(Notification::error("first"));
        sink.notify(Notification::error("second"));

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Notification = serde_json::from_str(lines[0]).unwrap();
        let second: Notification = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first.text, "first");
        assert_eq!(second.text, "second");
    }

    #[test]
    fn ndjson_sink_swallows_write_failures() {
        // Path under a file, so the parent "directory" cannot be created.
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let sink = NdjsonSink::new(blocker.join("sub/notifications.ndjson"));
        // Must not panic.
        sink.notify(Notification::error("dropped"));
    }

    #[test]
    fn recording_sink_preserves_delivery_order() {
        let sink = RecordingSink::new();
        sink.notify(Notification::error("a"));
        sink.notify(Notification::error("b"));

        let received = sink.received();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0].text, "a");
        assert_eq!(received[1].text, "b");
    }
}
