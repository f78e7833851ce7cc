//! Character Replacer.
//!
//! Two explicit operations instead of a mode flag:
//! - [`replace_all`]: every occurrence becomes [`REPLACEMENT_CHAR`].
//! - [`collapse_to_last`]: earlier occurrences are deleted and only the last
//!   one survives, itself turned into [`REPLACEMENT_CHAR`].
//!
//! The `_with` variants take the replacement explicitly. Passing the target
//! itself to [`collapse_to_last_with`] keeps the surviving occurrence as is.

use super::REPLACEMENT_CHAR;

/// Replaces every `target` in `s` with [`REPLACEMENT_CHAR`].
#[must_use]
pub fn replace_all(s: &str, target: char) -> String {
    replace_all_with(s, target, REPLACEMENT_CHAR)
}

/// Replaces every `target` in `s` with `replacement`. The character count is
/// unchanged.
#[must_use]
pub fn replace_all_with(s: &str, target: char, replacement: char) -> String {
    s.chars()
        .map(|c| if c == target { replacement } else { c })
        .collect()
}

/// Deletes every `target` except the last, which becomes
/// [`REPLACEMENT_CHAR`].
///
/// With `n` occurrences the result is `n - 1` characters shorter. No
/// occurrence leaves `s` unchanged.
#[must_use]
pub fn collapse_to_last(s: &str, target: char) -> String {
    collapse_to_last_with(s, target, REPLACEMENT_CHAR)
}

/// Deletes every `target` except the last, which becomes `replacement`.
#[must_use]
pub fn collapse_to_last_with(s: &str, target: char, replacement: char) -> String {
    let Some(last) = s.rfind(target) else {
        return s.to_string();
    };
    let mut out = String::with_capacity(s.len());
    out.extend(s[..last].chars().filter(|&c| c != target));
    out.push(replacement);
    out.push_str(&s[last + target.len_utf8()..]);
    out
}

/// Replaces every `target` except the last with `replacement` and keeps the
/// last one verbatim.
///
/// This is the dot handling for filenames: `"01.intro.mp3"` becomes
/// `"01 intro.mp3"`.
#[must_use]
pub fn replace_all_but_last(s: &str, target: char, replacement: char) -> String {
    let Some(last) = s.rfind(target) else {
        return s.to_string();
    };
    let mut out = replace_all_with(&s[..last], target, replacement);
    out.push_str(&s[last..]);
    out
}
