//! Character Finder.

/// Returns `true` if `c` occurs within the first `n` bytes of `s`.
///
/// `n == 0` never matches. The scan stops at the first match.
///
/// # Panics
///
/// Panics if `n` exceeds `s.len()`.
pub fn contains_character(s: &[u8], c: u8, n: usize) -> bool {
    assert!(
        n <= s.len(),
        "contains_character: count {n} exceeds sequence length {}",
        s.len()
    );
    s[..n].contains(&c)
}

/// Returns `true` if `c` occurs within the first `count` characters of `s`.
///
/// Char-level counterpart of [`contains_character`]. A `count` larger than
/// the number of characters in `s` is a caller bug and trips a debug
/// assertion whether or not `c` occurs in the string.
pub fn contains_char(s: &str, c: char, count: usize) -> bool {
    debug_assert!(
        count <= s.chars().count(),
        "contains_char: count {count} exceeds character length {}",
        s.chars().count()
    );
    s.chars().take(count).any(|ch| ch == c)
}
