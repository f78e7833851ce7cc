//! Input generators shared by the tagtidy benchmarks.

/// A messy filename of roughly `len` bytes: mixed case, break characters and
/// space runs, ending in `.mp3`.
#[must_use]
pub fn messy_name(len: usize) -> String {
    const PIECES: &[&str] = &["the", "DARK", "side", "of", "THE", "moon", "live"];
    const BREAKS: &[&str] = &[" ", "_", "-", ".", "  ", "__"];

    let mut out = String::with_capacity(len + 4);
    let mut i = 0usize;
    while out.len() < len {
        out.push_str(PIECES[i % PIECES.len()]);
        out.push_str(BREAKS[i % BREAKS.len()]);
        i += 1;
    }
    out.push_str(".mp3");
    out
}

/// `count` filenames of one album that share an artist/album prefix.
#[must_use]
pub fn album_listing(count: usize) -> Vec<String> {
    (1..=count)
        .map(|n| format!("Pink_Floyd - The Wall - {n:02} - another brick part {n}.MP3"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messy_name_reaches_length() {
        let name = messy_name(64);
        assert!(name.len() >= 64);
        assert!(name.ends_with(".mp3"));
    }

    #[test]
    fn album_listing_shares_prefix() {
        let names = album_listing(3);
        assert_eq!(names.len(), 3);
        assert!(names.iter().all(|n| n.starts_with("Pink_Floyd - The Wall - ")));
    }
}
