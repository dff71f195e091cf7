//! Tests for injection site scanning.

use super::{InjectionSpan, scan};

#[test]
fn plain_text_yields_no_spans() {
    assert!(scan("Just plain text with no placeholders").is_empty());
}

#[test]
fn empty_text_yields_no_spans() {
    assert!(scan("").is_empty());
}

#[test]
fn at_sign_without_brace_is_not_a_trigger() {
    assert!(scan("email me at user@example.com").is_empty());
}

#[test]
fn single_injection_captures_path_and_offsets() {
    let text = "Read @{src/main.rs} please";
    let spans = scan(text);
    assert_eq!(
        spans,
        vec![InjectionSpan {
            path: "src/main.rs".to_string(),
            start: 5,
            end: 19,
        }]
    );
    assert_eq!(&text[spans[0].start..spans[0].end], "@{src/main.rs}");
}

#[test]
fn whitespace_around_path_is_trimmed() {
    let spans = scan("@{  docs/notes.md\t}");
    assert_eq!(spans[0].path, "docs/notes.md");
}

#[test]
fn empty_path_is_a_valid_span() {
    let text = "before @{} after";
    let spans = scan(text);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].path, "");
    assert_eq!(&text[spans[0].start..spans[0].end], "@{}");
}

#[test]
fn nested_braces_balance_to_the_final_closing_brace() {
    let spans = scan("@{a/{b}/c}");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].path, "a/{b}/c");
    assert_eq!(spans[0].start, 0);
    assert_eq!(spans[0].end, 10);
}

#[test]
fn deeply_nested_braces_are_supported() {
    let spans = scan("@{x{{y}}z}");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].path, "x{{y}}z");
}

#[test]
fn unclosed_trigger_yields_no_span() {
    assert!(scan("Hello @{world").is_empty());
}

#[test]
fn unclosed_trigger_with_nested_open_brace_yields_no_span() {
    // Depth never returns to zero.
    assert!(scan("@{a/{b}").is_empty());
}

#[test]
fn trigger_inside_abandoned_unclosed_region_is_still_found() {
    // The outer trigger never closes (its `{` pairs with the first `}` of
    // the inner site, leaving depth 1 at end of text). Resuming one byte
    // past the outer `@` still discovers `@{x}`.
    let text = "@{ @{x} y";
    let spans = scan(text);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].path, "x");
    assert_eq!(&text[spans[0].start..spans[0].end], "@{x}");
}

#[test]
fn multiple_injections_come_back_in_order() {
    let text = "Compare @{a.js} with @{b.js}";
    let spans = scan(text);
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].path, "a.js");
    assert_eq!(spans[1].path, "b.js");
    assert!(spans[0].end <= spans[1].start);
}

#[test]
fn adjacent_injections_do_not_overlap() {
    let spans = scan("@{a}@{b}");
    assert_eq!(spans.len(), 2);
    assert_eq!((spans[0].start, spans[0].end), (0, 4));
    assert_eq!((spans[1].start, spans[1].end), (4, 8));
}

#[test]
fn lone_closing_braces_are_ignored() {
    assert!(scan("a } b } c").is_empty());
}

#[test]
fn trailing_unclosed_trigger_does_not_consume_earlier_spans() {
    let spans = scan("@{ok.txt} and then @{oops");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].path, "ok.txt");
}

#[test]
fn multibyte_text_around_spans_keeps_byte_offsets_sliceable() {
    let text = "日本語 @{ファイル.txt} 🎉";
    let spans = scan(text);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].path, "ファイル.txt");
    assert_eq!(&text[spans[0].start..spans[0].end], "@{ファイル.txt}");
}

#[test]
fn path_may_contain_spaces_internally() {
    let spans = scan("@{my docs/read me.txt}");
    assert_eq!(spans[0].path, "my docs/read me.txt");
}
