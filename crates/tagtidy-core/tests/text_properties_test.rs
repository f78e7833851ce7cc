//! Property-based tests for the text primitives and the clean-up pipeline.
//! Each property must hold for every generated input, not just the fixed
//! examples in the unit tests.

use proptest::prelude::*;
use tagtidy_core::config::Capitalization;
use tagtidy_core::text::{
    char_copy, collapse_to_last, contains_character, fix_capitals, fix_capitals_with,
    is_word_separator, remove_duplicate_spaces, replace_all,
};
use tagtidy_core::clean_string;

proptest! {
    /// Finder is true exactly when the byte sits in the examined prefix.
    #[test]
    fn finder_matches_prefix_membership(
        s in proptest::collection::vec(any::<u8>(), 0..64),
        c in any::<u8>(),
        seed in any::<usize>(),
    ) {
        let n = seed % (s.len() + 1);
        prop_assert_eq!(contains_character(&s, c, n), s[..n].contains(&c));
    }

    /// Copier writes exactly the prefix and leaves the tail alone.
    #[test]
    fn copier_writes_prefix_only(
        dest in proptest::collection::vec(any::<u8>(), 0..64),
        src in proptest::collection::vec(any::<u8>(), 0..64),
        seed in any::<usize>(),
    ) {
        let n = seed % (dest.len().min(src.len()) + 1);
        let mut out = dest.clone();
        char_copy(&mut out, &src, n);
        prop_assert_eq!(&out[..n], &src[..n]);
        prop_assert_eq!(&out[n..], &dest[n..]);
    }

    /// `replace_all` leaves no target behind and keeps the character count.
    #[test]
    fn replace_all_removes_every_target(s in "[a-z._-]{0,40}", target in "[._-]") {
        let target = target.chars().next().unwrap();
        let out = replace_all(&s, target);
        prop_assert!(!out.contains(target));
        prop_assert_eq!(out.chars().count(), s.chars().count());
    }

    /// `collapse_to_last` keeps one replacement at the collapsed position of the last
    /// occurrence and shrinks by one per deleted occurrence.
    #[test]
    fn collapse_keeps_only_the_last(s in "[a-z.]{0,40}") {
        let chars: Vec<char> = s.chars().collect();
        let positions: Vec<usize> = chars
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == '.')
            .map(|(i, _)| i)
            .collect();
        let out: Vec<char> = collapse_to_last(&s, '.').chars().collect();

        match positions.last() {
            None => prop_assert_eq!(out, chars),
            Some(&last) => {
                let n = positions.len();
                prop_assert_eq!(out.len(), chars.len() - (n - 1));
                prop_assert!(!out.contains(&'.'));
                prop_assert_eq!(out[last - (n - 1)], ' ');
            }
        }
    }

    /// No two adjacent spaces survive, and a second pass changes nothing.
    #[test]
    fn duplicate_spaces_are_gone_and_idempotent(s in "[a-c \t]{0,40}") {
        let once = remove_duplicate_spaces(&s);
        prop_assert!(!once.contains("  "));
        prop_assert!(once.len() <= s.len());
        prop_assert_eq!(remove_duplicate_spaces(&once), once);
    }

    /// Capitalization keeps the length and is idempotent under both policies.
    #[test]
    fn capitals_are_stable(s in "[a-zA-Z0-9 '.()-]{0,40}") {
        for policy in [Capitalization::Title, Capitalization::EveryWord] {
            let once = fix_capitals_with(&s, policy);
            prop_assert_eq!(once.chars().count(), s.chars().count());
            prop_assert_eq!(fix_capitals_with(&once, policy), once.clone());
        }
        let title = fix_capitals(&s);
        prop_assert_eq!(fix_capitals(&title), title);
    }

    /// Under the every-word policy each word starting with a letter starts
    /// uppercase and is otherwise lowercase.
    #[test]
    fn every_word_starts_uppercase(s in "[a-zA-Z ,-]{0,40}") {
        let out = fix_capitals_with(&s, Capitalization::EveryWord);
        for word in out.split(is_word_separator).filter(|w| !w.is_empty()) {
            let mut chars = word.chars();
            let first = chars.next().unwrap();
            prop_assert!(first.is_ascii_uppercase(), "word {word:?} in {out:?}");
            prop_assert!(chars.all(|c| c.is_ascii_lowercase()), "word {word:?} in {out:?}");
        }
    }

    /// Cleaning an already clean name changes nothing.
    #[test]
    fn clean_string_is_idempotent(s in "[a-zA-Z0-9 ._-]{0,40}(\\.mp3)?") {
        let once = clean_string(&s);
        prop_assert_eq!(clean_string(&once), once.clone());
        prop_assert!(!once.contains("  "));
        prop_assert!(!once.contains('_') && !once.contains('-'));
    }
}
