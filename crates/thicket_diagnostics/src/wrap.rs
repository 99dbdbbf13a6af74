//! Indented word wrapping for markup text.

use crate::markup;

/// The terminal width diagnostics are wrapped to.
pub const COLS: usize = 80;

/// Wraps `text` to `max_width` columns and indents it by `indentation` levels.
///
/// Each level of indentation is two spaces and counts against `max_width`.
/// Lines that already fit are left untouched; longer lines are re-flowed
/// greedily on spaces. Widths are measured with markup stripped, so style
/// tokens never cause an early break. A styled span such as
/// `{{gray}}path with spaces{{/}}` is never broken, and a unit wider than the
/// available width is placed on a line of its own rather than split. The
/// spaces at a break are dropped, so no line ends in or gains extra
/// whitespace. Empty lines are not indented.
pub fn wrap_indented(text: &str, indentation: usize, max_width: usize) -> String {
    let width = max_width.saturating_sub(indentation * 2);
    let mut lines: Vec<String> = Vec::new();

    for line in text.split('\n') {
        if markup::visible_width(line) <= width {
            lines.push(line.to_string());
            continue;
        }

        let mut current = String::new();
        let mut length = 0;
        // Spaces seen since the last placed unit; consecutive spaces yield empty units.
        let mut gap = 0;
        for (i, unit) in units(line).into_iter().enumerate() {
            if i > 0 {
                gap += 1;
            }
            if unit.is_empty() {
                continue;
            }
            let unit_length = markup::visible_width(unit);
            if length == 0 || length + gap + unit_length <= width {
                current.push_str(&" ".repeat(gap));
                length += gap;
            } else {
                lines.push(std::mem::take(&mut current));
                length = 0;
            }
            current.push_str(unit);
            length += unit_length;
            gap = 0;
        }
        lines.push(current);
    }

    if indentation == 0 {
        return lines.join("\n");
    }
    let padding = "  ".repeat(indentation);
    lines
        .iter()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{padding}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits a line on the spaces that lie outside styled spans.
///
/// A span opens at any style token other than `{{/}}` and closes at the next
/// `{{/}}`.
fn units(line: &str) -> Vec<&str> {
    let mut units = Vec::new();
    let mut start = 0;
    let mut offset = 0;
    let mut styled = false;
    for token in markup::tokenize(line) {
        let len = match token {
            markup::Token::Text(text) => {
                if !styled {
                    for (i, _) in text.match_indices(' ') {
                        units.push(&line[start..offset + i]);
                        start = offset + i + 1;
                    }
                }
                text.len()
            }
            markup::Token::Unknown(raw) => raw.len(),
            markup::Token::Style(style) => {
                styled = style != markup::Style::Reset;
                style.token().len()
            }
        };
        offset += len;
    }
    units.push(&line[start..]);
    units
}
