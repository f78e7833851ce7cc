//! Normalizer configuration.
//!
//! Defaults are fixed constants so that every operation is reproducible.
//! [`NormalizerConfig::from_env`] lets a caller override them:
//! - `TAGTIDY_CAPITALIZATION`: `title` (default) keeps connector words such as
//!   "of" and "the" lowercase after the first word; `every` capitalizes every
//!   word.
//! - `TAGTIDY_REPLACEMENT`: the single character that replaced characters
//!   turn into. Defaults to a space.
//! - `TAGTIDY_AUDIO_EXTENSIONS`: comma-separated extensions whose final dot
//!   survives cleaning. Defaults to `mp3`.

use crate::error::{Error, Result};
use crate::text::REPLACEMENT_CHAR;

/// Environment variable selecting the [`Capitalization`] policy.
pub const ENV_CAPITALIZATION: &str = "TAGTIDY_CAPITALIZATION";
/// Environment variable overriding the replacement character.
pub const ENV_REPLACEMENT: &str = "TAGTIDY_REPLACEMENT";
/// Environment variable overriding the audio extension list.
pub const ENV_AUDIO_EXTENSIONS: &str = "TAGTIDY_AUDIO_EXTENSIONS";

/// Extensions treated as audio files when no override is given.
pub const DEFAULT_AUDIO_EXTENSIONS: &[&str] = &["mp3"];

/// Word capitalization policy applied by the Capitalization Fixer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Capitalization {
    /// Capitalize every word except connector words after the first.
    #[default]
    Title,
    /// Capitalize every word.
    EveryWord,
}

impl Capitalization {
    /// Parse from string (case-insensitive). Unknown values fall back to
    /// [`Capitalization::Title`].
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" | "default" | "connectors" => Self::Title,
            "every" | "every-word" | "every_word" | "all" | "simple" => Self::EveryWord,
            _ => Self::Title,
        }
    }

    /// Returns true if connector words are kept lowercase.
    #[must_use]
    pub const fn keeps_connectors_lowercase(self) -> bool {
        matches!(self, Self::Title)
    }

    /// Stable lowercase name, the inverse of [`Capitalization::from_str_loose`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::EveryWord => "every",
        }
    }
}

/// Settings shared by the clean-up pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalizerConfig {
    /// Character that replaced characters become.
    pub replacement: char,
    /// Capitalization policy.
    pub capitalization: Capitalization,
    /// Lowercase extensions (without the dot) whose final dot is preserved.
    pub audio_extensions: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            replacement: REPLACEMENT_CHAR,
            capitalization: Capitalization::default(),
            audio_extensions: DEFAULT_AUDIO_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
        }
    }
}

impl NormalizerConfig {
    /// Build a config from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing keys keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_CAPITALIZATION) {
            config.capitalization = Capitalization::from_str_loose(&raw);
        }

        if let Some(raw) = lookup(ENV_REPLACEMENT) {
            config.replacement = parse_replacement(&raw)?;
        }

        if let Some(raw) = lookup(ENV_AUDIO_EXTENSIONS) {
            config.audio_extensions = parse_extensions(&raw)?;
        }

        Ok(config)
    }

    /// Returns the extension of `name` if it is one of the configured audio
    /// extensions (compared case-insensitively).
    #[must_use]
    pub fn audio_extension<'a>(&self, name: &'a str) -> Option<&'a str> {
        let (_, ext) = name.rsplit_once('.')?;
        self.audio_extensions
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
            .then_some(ext)
    }
}

fn parse_replacement(raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::InvalidReplacement(raw.to_string())),
    }
}

fn parse_extensions(raw: &str) -> Result<Vec<String>> {
    raw.split(',')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(|ext| {
            let ext = ext.strip_prefix('.').unwrap_or(ext);
            if ext.is_empty() || ext.contains('.') {
                Err(Error::InvalidExtension(ext.to_string()))
            } else {
                Ok(ext.to_ascii_lowercase())
            }
        })
        .collect()
}
