#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtkit::{from_bytes, to_bytes, Compound, NbtData, Value};

fuzz_target!(|v: Value| {
    let mut inner = Compound::new();
    inner.insert("".to_string(), v);

    let nbt = NbtData::new(Value::Compound(inner)).unwrap();
    let bs = to_bytes(&nbt);

    if let Ok(bs) = bs {
        let _ = from_bytes(&bs).unwrap();
    }
});
