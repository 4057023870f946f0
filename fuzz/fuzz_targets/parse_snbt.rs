#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtkit::snbt;

fuzz_target!(|text: &str| {
    if let Ok(v) = snbt::from_str(text) {
        // Parsed lists are homogeneous, so writing cannot fail.
        let _ = snbt::to_string(&v).unwrap();
    }
});
