#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtkit::{from_bytes, to_bytes};

fuzz_target!(|data: &[u8]| {
    // Lossy string decoding can push a string past the length limit, so a
    // failed re-encode is allowed. Panics are not.
    if let Ok(nbt) = from_bytes(data) {
        let _ = to_bytes(&nbt);
    }
});
