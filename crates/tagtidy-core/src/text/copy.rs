//! Bounded Copier and fixed-width field packing.
//!
//! `char_copy` is the `strncpy`-without-padding contract: exactly `n` bytes
//! land at the front of the destination and nothing else moves. The field
//! helpers produce and read the NUL-padded fixed-width text slots used by
//! tag formats.

/// Copies exactly `n` bytes from `src` into the front of `dest`.
///
/// After the call `dest[..n] == src[..n]`; `dest[n..]` is untouched.
///
/// # Panics
///
/// Panics before writing anything if either slice holds fewer than `n` bytes.
pub fn char_copy(dest: &mut [u8], src: &[u8], n: usize) {
    assert!(
        dest.len() >= n,
        "char_copy: destination too small ({} bytes for {n} byte copy)",
        dest.len()
    );
    assert!(
        src.len() >= n,
        "char_copy: source too short ({} bytes for {n} byte copy)",
        src.len()
    );
    dest[..n].copy_from_slice(&src[..n]);
}

/// Replaces the first `count` characters of `dest` with the first `count`
/// characters of `src`, leaving the rest of `dest` as it was.
///
/// The byte length of `dest` may change when the replaced characters have a
/// different UTF-8 width.
///
/// # Panics
///
/// Panics before mutating if either string has fewer than `count` characters.
pub fn copy_chars(dest: &mut String, src: &str, count: usize) {
    let dest_end = char_boundary(dest, count).unwrap_or_else(|| {
        panic!(
            "copy_chars: destination too small ({} chars for {count} char copy)",
            dest.chars().count()
        )
    });
    let src_end = char_boundary(src, count).unwrap_or_else(|| {
        panic!(
            "copy_chars: source too short ({} chars for {count} char copy)",
            src.chars().count()
        )
    });
    dest.replace_range(..dest_end, &src[..src_end]);
}

/// Packs `s` into exactly `width` bytes.
///
/// Text that does not fit in `width - 1` bytes is truncated (never inside a
/// UTF-8 sequence) and NUL-terminated; shorter text is NUL-padded.
///
/// # Panics
///
/// Panics if `width` is zero, since there is no room for the terminator.
pub fn pack_field(s: &str, width: usize) -> Vec<u8> {
    assert!(width >= 1, "pack_field: width must leave room for the NUL terminator");
    let limit = width - 1;
    let mut cut = s.len().min(limit);
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    let mut out = Vec::with_capacity(width);
    out.extend_from_slice(&s.as_bytes()[..cut]);
    out.resize(width, 0);
    out
}

/// Reads text back out of a fixed-width field: NUL bytes are dropped,
/// invalid UTF-8 is replaced and surrounding whitespace is trimmed.
pub fn unpack_field(bytes: &[u8]) -> String {
    let kept: Vec<u8> = bytes.iter().copied().filter(|&b| b != 0).collect();
    String::from_utf8_lossy(&kept).trim().to_string()
}

/// Byte offset of the `count`th character boundary, or `None` past the end.
fn char_boundary(s: &str, count: usize) -> Option<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .nth(count)
}
