#![no_main]
use libfuzzer_sys::fuzz_target;
use tagtidy_core::text;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the target character and count, the rest is input.
    let selector = data[0];
    let bytes = &data[1..];
    let n = usize::from(selector) % (bytes.len() + 1);
    let found = text::contains_character(bytes, selector, n);
    assert_eq!(found, bytes[..n].contains(&selector));

    let mut dest = vec![0u8; bytes.len()];
    text::char_copy(&mut dest, bytes, n);
    assert_eq!(&dest[..n], &bytes[..n]);
    assert!(dest[n..].iter().all(|&b| b == 0));

    let Ok(s) = std::str::from_utf8(bytes) else {
        return;
    };
    let target = char::from(selector);

    let replaced = text::replace_all(s, target);
    assert_eq!(replaced.chars().count(), s.chars().count());
    if target != text::REPLACEMENT_CHAR {
        assert!(!replaced.contains(target));
    }

    let occurrences = s.chars().filter(|&c| c == target).count();
    let collapsed = text::collapse_to_last_with(s, target, target);
    assert_eq!(
        collapsed.chars().filter(|&c| c == target).count(),
        occurrences.min(1)
    );
    assert_eq!(
        collapsed.chars().count(),
        s.chars().count() - occurrences.saturating_sub(1)
    );

    let spaced = text::remove_duplicate_spaces(s);
    assert!(!spaced.contains("  "));

    let capitalized = text::fix_capitals(s);
    assert_eq!(capitalized.chars().count(), s.chars().count());
    assert_eq!(text::fix_capitals(&capitalized), capitalized);
});
