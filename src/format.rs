//! Message rendering for the convenience wrappers.
//!
//! Everything here is pure string building; nothing touches a logger. The
//! wrappers render first and then hand a single `&str` to
//! [`Logger::write`](crate::Logger::write).

use std::fmt::{self, Display, Write};

/// Render format arguments exactly as given.
#[must_use]
pub fn render(args: fmt::Arguments<'_>) -> String {
    fmt::format(args)
}

/// Render format arguments and guarantee a trailing newline.
#[must_use]
pub fn render_line(args: fmt::Arguments<'_>) -> String {
    ensure_newline(render(args))
}

/// Join values with a single space.
///
/// Unlike Go's `fmt.Sprint`, which only inserts a space between two
/// operands when neither is a string, a space always separates values here:
/// `join(&[&"a", &1])` is `"a 1"`, not `"a1"`.
///
/// ```
/// use flg::format::join;
///
/// assert_eq!(join(&[&"a", &1, &'c']), "a 1 c");
/// assert_eq!(join(&[]), "");
/// ```
#[must_use]
pub fn join(values: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        // Writing into a String only fails if a Display impl reports an error.
        let _ = write!(out, "{}", value);
    }
    out
}

/// Join values with a single space and always append a newline.
///
/// ```
/// use flg::format::join_line;
///
/// assert_eq!(join_line(&[&"a", &"b"]), "a b\n");
/// ```
#[must_use]
pub fn join_line(values: &[&dyn Display]) -> String {
    let mut out = join(values);
    out.push('\n');
    out
}

/// Append `\n` unless the message already ends with one.
#[must_use]
pub fn ensure_newline(mut message: String) -> String {
    if !message.ends_with('\n') {
        message.push('\n');
    }
    message
}
