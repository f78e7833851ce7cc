//! Primitive text operations.
//!
//! Each operation is a pure function over caller-owned data. Operations that
//! can change the length of their input return a new `String`; the bounded
//! copier keeps its in-place contract because leaving the tail of the
//! destination untouched is the point of it.

pub mod capitals;
pub mod copy;
pub mod find;
pub mod replace;
pub mod spaces;

/// The character that replaced characters become.
pub const REPLACEMENT_CHAR: char = ' ';

pub use capitals::{CONNECTOR_WORDS, fix_capitals, fix_capitals_with, is_word_separator};
pub use copy::{char_copy, copy_chars, pack_field, unpack_field};
pub use find::{contains_char, contains_character};
pub use replace::{
    collapse_to_last, collapse_to_last_with, replace_all, replace_all_but_last, replace_all_with,
};
pub use spaces::remove_duplicate_spaces;
