//! Clean-up pipeline for names taken from a music library.
//!
//! A name goes through these steps:
//! 1. A trailing audio extension (see [`NormalizerConfig::audio_extensions`])
//!    is split off and lowercased; its dot is the only one that survives.
//! 2. `.`, `-` and `_` in the stem become spaces.
//! 3. The stem is lowercased, runs of spaces collapse and the ends are
//!    trimmed.
//! 4. Words are capitalized according to the configured policy and joined
//!    with the configured replacement character.

use std::path::Path;

use crate::common_words::remove_common_words;
use crate::config::NormalizerConfig;
use crate::error::Result;
use crate::text::{fix_capitals_with, remove_duplicate_spaces, replace_all, replace_all_with};
use crate::track::TrackInfo;

/// Characters that act as word breaks in raw names.
pub const BREAK_CHARS: &[char] = &['.', '-', '_'];

/// Cleans `s` with the default configuration.
///
/// `"the giant BOB.-of______joNES.mp3"` becomes `"The Giant Bob of Jones.mp3"`.
#[must_use]
pub fn clean_string(s: &str) -> String {
    Normalizer::default().clean(s)
}

/// Applies the clean-up pipeline with a fixed [`NormalizerConfig`].
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    #[must_use]
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Normalizer configured from the process environment.
    pub fn from_env() -> Result<Self> {
        NormalizerConfig::from_env().map(Self::new)
    }

    #[must_use]
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Cleans a single file or folder name.
    #[must_use]
    pub fn clean(&self, s: &str) -> String {
        let (stem, ext) = self.split_extension(s);
        self.finish(&simplify(stem), ext)
    }

    /// Cleans every name of one folder, then strips the words all of them
    /// share at the same position (typically an artist or album name baked
    /// into each filename). Output order follows input order.
    pub fn clean_folder<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        let (stems, exts): (Vec<String>, Vec<Option<&str>>) = names
            .iter()
            .map(|name| {
                let (stem, ext) = self.split_extension(name.as_ref());
                (simplify(stem), ext)
            })
            .unzip();

        let stems = if stems.len() > 1 {
            remove_common_words(&stems)
        } else {
            stems
        };

        stems
            .iter()
            .zip(exts)
            .map(|(stem, ext)| self.finish(stem, ext))
            .collect()
    }

    /// Derives track information from a file path, cleaning its filename
    /// with this normalizer first.
    pub fn track_info(&self, path: &Path) -> Result<TrackInfo> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        let cleaned = self.clean(&file_name);
        TrackInfo::from_path_with(self, path, &cleaned)
    }

    /// Splits a trailing audio extension off `s`.
    #[must_use]
    pub fn split_extension<'a>(&self, s: &'a str) -> (&'a str, Option<&'a str>) {
        match self.config.audio_extension(s) {
            Some(ext) => (&s[..s.len() - ext.len() - 1], Some(ext)),
            None => (s, None),
        }
    }

    fn finish(&self, simplified: &str, ext: Option<&str>) -> String {
        let mut out = fix_capitals_with(simplified, self.config.capitalization);
        if self.config.replacement != ' ' {
            out = replace_all_with(&out, ' ', self.config.replacement);
        }
        if let Some(ext) = ext {
            out.push('.');
            out.push_str(&ext.to_lowercase());
        }
        out
    }
}

/// Steps 2 and 3: break characters become spaces, then lowercase, collapse
/// and trim.
fn simplify(stem: &str) -> String {
    let mut text = stem.to_string();
    for &c in BREAK_CHARS {
        text = replace_all(&text, c);
    }
    remove_duplicate_spaces(&text.to_lowercase())
        .trim()
        .to_string()
}
