//! Prompt expansion: splicing resolved file content into prompt text.
//!
//! This is the top of the injection pipeline. [`process`] scans a prompt for
//! `@{path}` sites, resolves each path against the workspace, and rebuilds
//! the text with content substituted in place of each placeholder.
//!
//! Expansion never fails. A placeholder that cannot be resolved is left in
//! the output verbatim, one notification is delivered to the sink, and one
//! diagnostic line goes to stderr; sibling injections are unaffected. The
//! caller always gets usable text back.


use crate::notify::{Notification, NotificationSink};
use crate::resolver;
use crate::scanner::{self, TRIGGER};
use crate::workspace::Workspace;

/// Expand every `@{path}` site in a prompt.
///
/// `workspace` is `None` when the caller has no workspace context; the
/// prompt is then returned unchanged, since paths cannot be resolved
/// without roots. Text without the trigger substring is returned unchanged
/// without running the scanner at all.
///
/// Injections are resolved sequentially in left-to-right order, each one
/// independently: a failure substitutes the original placeholder text and
/// emits exactly one failure notification, never aborting the rest.
pub fn process(
    prompt: &str,
    workspace: Option<&dyn Workspace>,
    sink: &dyn NotificationSink,
) -> String {
    if !prompt.contains(TRIGGER) {
        return prompt.to_string();
    }

    let Some(workspace) = workspace else {
        return prompt.to_string();
    };

    let spans = scanner::scan(prompt);
    if spans.is_empty() {
        return prompt.to_string();
    }

    let mut output = String::with_capacity(prompt.len());
    let mut cursor = 0;

    for span in &spans {
        output.push_str(&prompt[cursor..span.start]);

        match resolver::resolve(&span.path, workspace) {
            Ok(content) => output.push_str(&content),
            Err(err) => {
                // Leave the placeholder untouched and report the failure
                // once: one sink notification, one stderr line.
                output.push_str(&prompt[span.start..span.end]);

                let message = format!(
                    "Failed to inject file content for '@{{{}}}': {}",
                    span.path, err
                );
                eprintln!("{}", message);
                sink.notify(Notification::error(message));
            }
        }

        cursor = span.end;
    }

    output.push_str(&prompt[cursor..]);
    output
}
