//! # tagtidy-core
//!
//! Text normalization for music file and folder names.
//!
//! The [`text`] module holds the primitive operations (character search,
//! bounded copy, character replacement, duplicate-space removal and
//! capitalization). [`clean`], [`common_words`] and [`track`] compose them
//! into the clean-up applied to names pulled from a music library before
//! they are reused as folder or file names. Nothing here touches the
//! filesystem.

#![forbid(unsafe_code)]

pub mod clean;
pub mod common_words;
pub mod config;
pub mod error;
pub mod text;
pub mod track;

pub use clean::{Normalizer, clean_string};
pub use common_words::{clean_folder, remove_common_words};
pub use config::{Capitalization, NormalizerConfig};
pub use error::{Error, Result};
pub use track::TrackInfo;
