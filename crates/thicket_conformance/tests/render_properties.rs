//! Properties every rendered diagnostic satisfies, checked across the whole catalog.
//!
//! Each test builds one diagnostic per catalog function and asserts a
//! guarantee of the terminal rendering: determinism, which blocks appear,
//! and that wrapping never loses or reorders a word.

use std::sync::Arc;
use std::thread;

use thicket_conformance::{every_diagnostic, plain};
use thicket_diagnostics::{doc_url, markup, Diagnostic, COLS};

fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn expected_words(diag: &Diagnostic) -> Vec<String> {
    let mut words: Vec<String> = diag.heading().split_whitespace().map(String::from).collect();
    if !diag.location().is_absent() {
        words.push(diag.location().to_string());
    }
    words.extend(markup::strip(diag.message()).split_whitespace().map(String::from));
    if !diag.doc_link().is_empty() {
        words.extend(["Learn", "more", "at:"].map(String::from));
        words.push(doc_url(diag.doc_link()));
    }
    words
}

#[test]
fn rendering_is_deterministic() {
    for diag in every_diagnostic() {
        assert_eq!(diag.render(false), diag.render(false));
        assert_eq!(diag.render(true), diag.render(true));
    }
}

#[test]
fn first_line_is_heading() {
    for diag in every_diagnostic() {
        let rendered = plain(&diag);
        assert_eq!(rendered.lines().next(), Some(diag.heading()));
    }
}

#[test]
fn location_line_only_when_present() {
    for diag in every_diagnostic() {
        let rendered = plain(&diag);
        let second = rendered.lines().nth(1);
        if diag.location().is_absent() {
            assert_ne!(second, Some(""), "{}: blank line after heading", diag.heading());
        } else {
            assert_eq!(second, Some("suite_test.x:42"), "{}", diag.heading());
        }
    }
}

#[test]
fn doc_link_line_only_when_present() {
    for diag in every_diagnostic() {
        let rendered = plain(&diag);
        let has_link = rendered.contains("Learn more at:");
        assert_eq!(has_link, !diag.doc_link().is_empty(), "{}", diag.heading());
        if has_link {
            let expected = format!("  Learn more at: {}\n", doc_url(diag.doc_link()));
            assert!(rendered.ends_with(&expected), "{}", diag.heading());
        }
    }
}

#[test]
fn no_runs_of_blank_lines() {
    for diag in every_diagnostic() {
        let rendered = plain(&diag);
        assert!(!rendered.contains("\n\n\n"), "{}", diag.heading());
        assert!(rendered.ends_with('\n'));
    }
}

#[test]
fn message_lines_fit_the_terminal() {
    for diag in every_diagnostic() {
        for line in plain(&diag).lines().filter(|l| !l.contains("Learn more at:")) {
            // Single words wider than a line are kept whole.
            if line.trim().contains(' ') {
                assert!(line.chars().count() <= COLS, "{}: {line:?}", diag.heading());
            }
        }
    }
}

#[test]
fn wrapping_keeps_every_word_in_order() {
    for diag in every_diagnostic() {
        let rendered: Vec<String> = plain(&diag).split_whitespace().map(String::from).collect();
        assert_eq!(rendered, expected_words(&diag), "{}", diag.heading());
    }
}

#[test]
fn no_markup_survives_plain_rendering() {
    for diag in every_diagnostic() {
        let rendered = plain(&diag);
        assert!(!rendered.contains("{{"), "{}", diag.heading());
        assert!(!rendered.contains("}}"), "{}", diag.heading());
        assert!(!rendered.contains('\x1b'));
    }
}

#[test]
fn message_lines_have_even_indentation() {
    for diag in every_diagnostic() {
        for line in plain(&diag).lines().skip(1) {
            assert!(!line.ends_with(' '), "{}: trailing space in {line:?}", diag.heading());
            assert!(!line.starts_with("   "), "{}: misindented {line:?}", diag.heading());
        }
    }
}

#[test]
fn colored_output_differs_only_by_escapes() {
    for diag in every_diagnostic() {
        let colored = diag.render(true);
        assert!(colored.contains('\x1b'));
        assert_eq!(strip_ansi(&colored), plain(&diag), "{}", diag.heading());
    }
}

#[test]
fn display_matches_plain_rendering() {
    for diag in every_diagnostic() {
        assert_eq!(diag.to_string(), plain(&diag));
    }
}

#[test]
fn concurrent_rendering_agrees() {
    let diagnostics = Arc::new(every_diagnostic());
    let expected: Vec<String> = diagnostics.iter().map(plain).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let diagnostics = Arc::clone(&diagnostics);
            thread::spawn(move || diagnostics.iter().map(plain).collect::<Vec<_>>())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
