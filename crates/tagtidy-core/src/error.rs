//! Error type for the recoverable failures of the crate.
//!
//! Precondition violations in [`crate::text`] are programmer errors and panic
//! instead of returning one of these.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A replacement override was not exactly one character.
    #[error("replacement must be exactly one character, got {0:?}")]
    InvalidReplacement(String),

    /// An audio extension override was empty or contained a dot.
    #[error("invalid audio extension {0:?}")]
    InvalidExtension(String),

    /// The cleaned filename handed to the track parser had no words.
    #[error("cleaned filename for {path} is empty")]
    EmptyFilename { path: String },
}
