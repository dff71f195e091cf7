//! Injection site scanner for prompt text.
//!
//! This module extracts `@{path}` placeholders from free-form prompt text.
//! The syntax is deliberately small:
//!
//! - `@{src/main.rs}` - an injection site naming a path
//! - Inner braces are allowed and must balance: `@{a/{b}/c}` names `a/{b}/c`
//! - Surrounding whitespace in the path is ignored: `@{ a.txt }` names `a.txt`
//!
//! There is no escaping mechanism for literal braces. An unclosed trigger
//! (`@{` with no balancing `}`) is not an error; the candidate is simply
//! discarded and the text around it passes through untouched.
//!
//! # Recovery from unclosed triggers
//!
//! When a trigger never closes, the scan resumes one byte past the trigger's
//! `@` rather than past the whole `@{`. A valid trigger whose `@{` lies inside
//! the abandoned region is therefore still found:
//!
//! ```
//! use inlay::scanner::scan;
//!
//! // The outer `@{` never closes, but the inner `@{x}` does.
//! let spans = scan("@{ @{x} y");
//! assert_eq!(spans.len(), 1);
//! assert_eq!(spans[0].path, "x");
//! ```

#[cfg(test)]
mod tests;

/// The two-character sequence that opens an injection site.
pub const TRIGGER: &str = "@{";

/// A single `@{path}` occurrence located in the scanned text.
///
/// Offsets are byte offsets into the original text. `start` points at the
/// trigger's `@`; `end` is exclusive and points one past the matching `}`.
/// The trigger and both braces are ASCII, so `start` and `end` always fall
/// on UTF-8 character boundaries and `&text[span.start..span.end]` is the
/// verbatim placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionSpan {
    /// The inner path text, with leading/trailing whitespace trimmed.
    /// May be empty (`@{}` is a valid, empty injection).
    pub path: String,
    /// Byte offset of the trigger's first character.
    pub start: usize,
    /// Exclusive byte offset one past the closing `}`.
    pub end: usize,
}

/// Scan text for injection sites.
///
/// Returns spans in left-to-right order; spans never overlap. Each candidate
/// trigger is matched against its own brace-depth counter: every `{` after
/// the trigger increments, every `}` decrements, and the injection closes
/// when the counter returns to zero. Arbitrary nesting depth is supported.
pub fn scan(text: &str) -> Vec<InjectionSpan> {
    let mut spans = Vec::new();
    let bytes = text.as_bytes();
    let mut pos = 0;

    while let Some(found) = text[pos..].find(TRIGGER) {
        let start = pos + found;

        // Walk forward from just past the trigger, balancing braces.
        let mut depth = 1usize;
        let mut cursor = start + TRIGGER.len();
        let mut closing = None;
        while cursor < bytes.len() {
            match bytes[cursor] {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        closing = Some(cursor);
                        break;
                    }
                }
                _ => {}
            }
            cursor += 1;
        }

        match closing {
            Some(close) => {
                let inner = &text[start + TRIGGER.len()..close];
                spans.push(InjectionSpan {
                    path: inner.trim().to_string(),
                    start,
                    end: close + 1,
                });
                pos = close + 1;
            }
            // Unclosed trigger: discard the candidate and resume one byte
            // past the `@`, so later triggers inside the abandoned region
            // are still found.
            None => pos = start + 1,
        }
    }

    spans
}
