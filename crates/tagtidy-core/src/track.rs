//! Track information derived from a file's location.
//!
//! A tidy library is laid out as `Artist/[YYYY] Album/NN Title.ext`. The
//! album folder's `[YYYY]` prefix is optional, as is the track number.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::clean::Normalizer;
use crate::error::{Error, Result};

/// Artist, album and track details read from a path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackInfo {
    pub path: PathBuf,
    pub artist: String,
    pub album: String,
    pub year: Option<u16>,
    pub title: String,
    pub number: Option<u32>,
}

impl TrackInfo {
    /// Parses `path` with the default normalizer. `cleaned_filename` is the
    /// file's name after folder-level cleaning (see
    /// [`Normalizer::clean_folder`]), which a single path cannot produce on
    /// its own.
    pub fn from_path(path: &Path, cleaned_filename: &str) -> Result<Self> {
        Self::from_path_with(&Normalizer::default(), path, cleaned_filename)
    }

    /// Parses `path`, cleaning folder names with `normalizer`.
    ///
    /// Artist and album are only filled in when the path has at least an
    /// artist folder, an album folder and the file itself.
    pub fn from_path_with(
        normalizer: &Normalizer,
        path: &Path,
        cleaned_filename: &str,
    ) -> Result<Self> {
        let mut info = Self {
            path: path.to_path_buf(),
            ..Self::default()
        };

        let album_dir = path.parent().and_then(Path::file_name);
        let artist_dir = path
            .parent()
            .and_then(Path::parent)
            .and_then(Path::file_name);
        if let (Some(album_dir), Some(artist_dir)) = (album_dir, artist_dir) {
            let album_raw = album_dir.to_string_lossy();
            let (year, album) = split_year_prefix(&album_raw);
            info.year = year;
            info.album = normalizer.clean(album);
            info.artist = normalizer.clean(&artist_dir.to_string_lossy());
        }

        // The extension's dot must not act as a word break when the
        // replacement character is itself a dot.
        let (stem, ext) = normalizer.split_extension(cleaned_filename);
        let joiner = normalizer.config().replacement;
        let mut words = stem
            .split(|c: char| c.is_whitespace() || c == joiner)
            .filter(|word| !word.is_empty())
            .peekable();
        let Some(first) = words.peek().copied() else {
            return Err(Error::EmptyFilename {
                path: path.display().to_string(),
            });
        };

        // A lone number followed by an extension ("1999.mp3") is a title.
        let lone_word_with_ext = ext.is_some() && stem.trim() == first;
        if !lone_word_with_ext
            && first.bytes().all(|b| b.is_ascii_digit())
            && let Ok(number) = first.parse::<u32>()
        {
            info.number = Some(number);
            words.next();
        }

        let title = words.collect::<Vec<_>>().join(" ");
        info.title = match title.split_once('.') {
            Some((before, _)) => before.to_string(),
            None => title,
        };

        Ok(info)
    }
}

impl fmt::Display for TrackInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02} '{}' - '{}' by '{}'",
            self.number.unwrap_or(0),
            self.title,
            self.album,
            self.artist
        )?;
        match self.year {
            Some(year) => write!(f, " in {year}."),
            None => write!(f, "."),
        }
    }
}

/// Splits a `[YYYY] ` prefix off an album folder name. A zero year counts
/// as no year.
fn split_year_prefix(raw: &str) -> (Option<u16>, &str) {
    let Some(rest) = raw.trim_start().strip_prefix('[') else {
        return (None, raw);
    };
    let Some((digits, album)) = rest.split_once("] ") else {
        return (None, raw);
    };
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return (None, raw);
    }
    match digits.parse::<u16>() {
        Ok(0) => (None, album),
        Ok(year) => (Some(year), album),
        Err(_) => (None, raw),
    }
}
