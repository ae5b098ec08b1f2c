//! The woff2 truncation rule applied to a single line.

use std::borrow::Cow;

/// Lines containing this substring are truncated.
pub const TRIGGER: &str = "woff2";
pub const DELIMITER: char = ',';
pub const TERMINATOR: char = ';';

pub fn is_triggered(line: &str) -> bool {
    line.contains(TRIGGER)
}

/// Keep the first comma-delimited fragment of a triggered line and append `;`.
///
/// The fragment keeps whatever it contains, so a triggered line without a
/// comma keeps its line terminator and gets the `;` after it. Untriggered
/// lines are returned untouched.
pub fn rewrite_line(line: &str) -> Cow<'_, str> {
    if !is_triggered(line) {
        return Cow::Borrowed(line);
    }

    let first = line.split(DELIMITER).next().unwrap_or_default();
    let mut out = String::with_capacity(first.len() + 1);
    out.push_str(first);
    out.push(TERMINATOR);
    Cow::Owned(out)
}
