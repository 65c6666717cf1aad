//! IRC case-mapping functions.
//!
//! IRC uses a special case-insensitive comparison where some characters
//! are considered equivalent: because of IRC's Scandinavian origin, `{}|^`
//! are the lowercase forms of `[]\~`. This implements that `rfc1459` case
//! mapping. Every identity comparison in this crate goes through it.

#[inline]
fn fold_lower(c: char) -> char {
    match c {
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        '~' => '^',
        'A'..='Z' => c.to_ascii_lowercase(),
        _ => c,
    }
}

#[inline]
fn fold_upper(c: char) -> char {
    match c {
        '{' => '[',
        '}' => ']',
        '|' => '\\',
        '^' => '~',
        'a'..='z' => c.to_ascii_uppercase(),
        _ => c,
    }
}

/// Convert a string to IRC lowercase using RFC 1459 case mapping.
///
/// In addition to ASCII lowercase conversion, this maps:
/// - `[` → `{`
/// - `]` → `}`
/// - `\` → `|`
/// - `~` → `^`
pub fn irc_to_lower(s: &str) -> String {
    s.chars().map(fold_lower).collect()
}

/// Convert a string to IRC uppercase using RFC 1459 case mapping.
///
/// The inverse of [`irc_to_lower`]: `{}|^` become `[]\~`.
pub fn irc_to_upper(s: &str) -> String {
    s.chars().map(fold_upper).collect()
}

/// Compare two strings using IRC case-insensitive comparison.
pub fn irc_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.chars()
        .zip(b.chars())
        .all(|(ca, cb)| fold_lower(ca) == fold_lower(cb))
}
