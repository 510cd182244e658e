//! Case-insensitive string helpers.
//!
//! Case folding is done per `char` with the Unicode simple mappings from the standard library,
//! so results do not depend on the process locale.

/// Returns `true` if two characters are equal ignoring case.
fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase()) || a.to_uppercase().eq(b.to_uppercase())
}

/// Case-insensitive equality, compared character by character.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| chars_eq_ignore_case(x, y))
}

/// Lower-cased form of `s`, used as a key when deduplicating ignoring case.
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Returns `true` if `text` reads the same reversed, ignoring case.
///
/// Every character takes part in the comparison; spaces and punctuation are not stripped.
pub fn is_palindrome(text: &str) -> bool {
    text.chars()
        .zip(text.chars().rev())
        .all(|(x, y)| chars_eq_ignore_case(x, y))
}
