//! Capitalization Fixer.
//!
//! Words are maximal runs of non-separator characters. The first character
//! of a word is uppercased when it is a letter and the remaining letters are
//! lowercased. Under [`Capitalization::Title`] the [`CONNECTOR_WORDS`] stay
//! lowercase unless they open the string.
//!
//! Case mappings that would turn one character into several (`ß` -> `SS`)
//! are skipped, so the character count never changes.

use crate::config::Capitalization;

/// Words kept lowercase after the first word under [`Capitalization::Title`].
pub const CONNECTOR_WORDS: &[&str] = &["and", "at", "of", "or", "the"];

/// Returns `true` if `c` separates words.
///
/// Whitespace and common filename punctuation separate words; apostrophes do
/// not, so `"don't"` is one word.
#[inline]
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '-' | '_'
                | '.'
                | ','
                | ';'
                | ':'
                | '!'
                | '?'
                | '('
                | ')'
                | '['
                | ']'
                | '{'
                | '}'
                | '/'
                | '\\'
                | '&'
                | '+'
        )
}

/// Title-cases `s` with the default [`Capitalization::Title`] policy.
#[must_use]
pub fn fix_capitals(s: &str) -> String {
    fix_capitals_with(s, Capitalization::Title)
}

/// Title-cases `s` with an explicit policy.
#[must_use]
pub fn fix_capitals_with(s: &str, policy: Capitalization) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    let mut word_index = 0usize;

    while !rest.is_empty() {
        let word_start = rest
            .find(|c: char| !is_word_separator(c))
            .unwrap_or(rest.len());
        out.push_str(&rest[..word_start]);
        rest = &rest[word_start..];
        if rest.is_empty() {
            break;
        }

        let word_end = rest.find(is_word_separator).unwrap_or(rest.len());
        let word = &rest[..word_end];
        // Index 0 is the first word of the string, which in a cleaned
        // filename is usually the track number: "03 the Battle" keeps "the".
        let lowercase_connector =
            word_index > 0 && policy.keeps_connectors_lowercase() && is_connector(word);
        push_word(&mut out, word, !lowercase_connector);

        word_index += 1;
        rest = &rest[word_end..];
    }
    out
}

fn is_connector(word: &str) -> bool {
    CONNECTOR_WORDS
        .iter()
        .any(|connector| connector.eq_ignore_ascii_case(word))
}

fn push_word(out: &mut String, word: &str, capitalize: bool) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.push(if capitalize {
            upper_single(first)
        } else {
            lower_single(first)
        });
    }
    out.extend(chars.map(lower_single));
}

fn upper_single(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn lower_single(c: char) -> char {
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
