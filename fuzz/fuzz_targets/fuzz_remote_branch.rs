#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(key) = std::str::from_utf8(data) {
        if let Some(parsed) = repowatch::RemoteBranch::parse(key) {
            assert!(!parsed.remote.contains('/'));
            assert_eq!(parsed.to_string(), key);
        }
    }
});
