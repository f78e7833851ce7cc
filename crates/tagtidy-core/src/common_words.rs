//! Folder-level removal of shared words.
//!
//! Files ripped from one album often repeat the artist or album name in
//! every filename. Words that sit at the same position in every name of a
//! folder carry no information about the individual track and are dropped.

use crate::clean::Normalizer;

/// Removes the words shared by every name at the same position.
///
/// Positions are scanned from the start. A word equal across all names is
/// removed everywhere. A mismatch at the first position is tolerated so that
/// a leading track number does not stop the scan; a mismatch at any later
/// position ends it. Remaining words are re-joined with single spaces.
///
/// Fewer than two names are returned unchanged, since a lone name shares
/// every word with itself.
pub fn remove_common_words<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    if names.len() < 2 {
        return names.iter().map(|name| name.as_ref().to_string()).collect();
    }

    let words: Vec<Vec<&str>> = names
        .iter()
        .map(|name| name.as_ref().split_whitespace().collect())
        .collect();
    let shortest = words.iter().map(Vec::len).min().unwrap_or(0);

    let mut common = vec![false; shortest];
    for (i, slot) in common.iter_mut().enumerate() {
        let first = words[0][i];
        if words.iter().all(|name| name[i] == first) {
            *slot = true;
        } else if i > 0 {
            break;
        }
    }

    words
        .iter()
        .map(|name| {
            name.iter()
                .enumerate()
                .filter(|(i, _)| !common.get(*i).copied().unwrap_or(false))
                .map(|(_, word)| *word)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Cleans every name of one folder with the default configuration and
/// removes the words they share. See [`Normalizer::clean_folder`].
pub fn clean_folder<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    Normalizer::default().clean_folder(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_shared_leading_words() {
        let out = remove_common_words(&["Queen Bohemian Rhapsody", "Queen Love of My Life"]);
        assert_eq!(out, vec!["Bohemian Rhapsody", "Love of My Life"]);
    }

    #[test]
    fn tolerates_mismatch_at_first_position() {
        let out = remove_common_words(&["01 Queen Mustapha", "02 Queen Fat Bottomed Girls"]);
        assert_eq!(out, vec!["01 Mustapha", "02 Fat Bottomed Girls"]);
    }

    #[test]
    fn later_mismatch_stops_the_scan() {
        let out = remove_common_words(&["a x b", "a y b"]);
        assert_eq!(out, vec!["x b", "y b"]);
    }

    #[test]
    fn two_leading_mismatches_remove_nothing() {
        let out = remove_common_words(&["1 x same", "2 y same"]);
        assert_eq!(out, vec!["1 x same", "2 y same"]);
    }

    #[test]
    fn identical_names_empty_out() {
        let out = remove_common_words(&["same name", "same name"]);
        assert_eq!(out, vec!["", ""]);
    }

    #[test]
    fn fewer_than_two_names_unchanged() {
        assert_eq!(remove_common_words(&["only one"]), vec!["only one"]);
        assert!(remove_common_words::<&str>(&[]).is_empty());
    }

    #[test]
    fn collapses_irregular_spacing() {
        let out = remove_common_words(&["x  a", "y   b"]);
        assert_eq!(out, vec!["x a", "y b"]);
    }

    #[test]
    fn clean_folder_uses_default_config() {
        let out = clean_folder(&["ABBA_-_Waterloo.mp3", "ABBA_-_SOS.mp3"]);
        assert_eq!(out, vec!["Waterloo.mp3", "Sos.mp3"]);
    }
}
