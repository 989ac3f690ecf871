#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        for line in primer::split_records(content) {
            assert!(!line.contains('\r') && !line.contains('\n'));
        }
    }
});
