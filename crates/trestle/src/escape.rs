//! HTML escaping.
//!
//! One routine is used for both element content and attribute values, so a
//! string renders the same no matter which position it lands in.

use std::borrow::Cow;

/// Escapes the five HTML-significant characters: `&`, `<`, `>`, `"` and `'`.
///
/// Returns the input unchanged (borrowed) when there is nothing to escape,
/// which is the common case for table data.
///
/// # Example
///
/// ```
/// use trestle::escape;
///
/// assert_eq!(escape("Fish & Chips"), "Fish &amp; Chips");
/// assert_eq!(escape("plain"), "plain");
/// ```
pub fn escape(input: &str) -> Cow<'_, str> {
    match input.find(needs_escape) {
        None => Cow::Borrowed(input),
        Some(first) => {
            let mut out = String::with_capacity(input.len() + 8);
            out.push_str(&input[..first]);
            for c in input[first..].chars() {
                match c {
                    '&' => out.push_str("&amp;"),
                    '<' => out.push_str("&lt;"),
                    '>' => out.push_str("&gt;"),
                    '"' => out.push_str("&quot;"),
                    '\'' => out.push_str("&#39;"),
                    other => out.push(other),
                }
            }
            Cow::Owned(out)
        }
    }
}

/// Appends the escaped form of `input` to `out` without an intermediate
/// allocation in the borrowed case.
pub(crate) fn escape_into(out: &mut String, input: &str) {
    match escape(input) {
        Cow::Borrowed(s) => out.push_str(s),
        Cow::Owned(s) => out.push_str(&s),
    }
}

fn needs_escape(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'')
}
