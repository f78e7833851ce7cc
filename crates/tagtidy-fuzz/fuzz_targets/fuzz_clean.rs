#![no_main]
use libfuzzer_sys::fuzz_target;
use tagtidy_core::{Normalizer, clean_string};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let cleaned = clean_string(s);
    assert!(!cleaned.contains("  "));
    assert_eq!(cleaned.trim(), cleaned);
    assert_eq!(clean_string(&cleaned), cleaned);

    // Split on newlines to get a folder listing.
    let names: Vec<&str> = s.lines().collect();
    let folder = Normalizer::default().clean_folder(&names);
    assert_eq!(folder.len(), names.len());
});
