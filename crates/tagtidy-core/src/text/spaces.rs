//! Duplicate-Space Remover.

/// Collapses every run of spaces (U+0020) to a single space.
///
/// Leading and trailing runs become one space each; they are not trimmed.
/// Other whitespace is left alone.
#[must_use]
pub fn remove_duplicate_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut previous_was_space = false;
    for c in s.chars() {
        let is_space = c == ' ';
        if !(is_space && previous_was_space) {
            out.push(c);
        }
        previous_was_space = is_space;
    }
    out
}
