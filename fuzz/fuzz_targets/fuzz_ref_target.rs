#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Decoded refs must render back to something that decodes the same
        if let Ok(target) = repowatch::RefTarget::parse(content) {
            assert_eq!(repowatch::RefTarget::parse(&target.to_string()), Ok(target));
        }
    }
});
