#![no_main]

use kindred_core::escape::{escape_str, is_metacharacter};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let escaped = escape_str(s);
        // One backslash per metacharacter, nothing else added.
        let metachars = s.chars().filter(|&c| is_metacharacter(c)).count();
        assert_eq!(escaped.chars().count(), s.chars().count() + metachars);
        // The formatter must never panic, whatever the template (errors are fine).
        let _ = kindred::printf::printf(s, &[]);
    }
});
