use crate::{error::Result, from_bytes, snbt, test::builder::Builder, NbtData, Tag};

/// Inputs that once tripped up the decoders.

#[test]
fn partial_input_in_root_name() {
    let input = Builder::new().start_compound("some long name").build();
    let v: Result<NbtData> = from_bytes(&input[0..3]);
    assert!(v.is_err());
}

#[test]
fn list_of_end() {
    let input = Builder::new()
        .start_compound("")
        .start_list("", Tag::End, 1)
        .tag(Tag::End)
        .end_compound()
        .build();

    let v: Result<NbtData> = from_bytes(&input);
    assert!(v.is_err());
}

#[test]
fn empty_input() {
    assert!(from_bytes(&[]).is_err());
    assert!(snbt::from_str("").is_err());
}

#[test]
fn lone_quote_and_escape() {
    for input in ["\"", "'", "\"\\", "[B;", "{a:[L;1l,"] {
        assert!(snbt::from_str(input).is_err(), "{:?}", input);
    }
}

#[test]
fn multibyte_after_bad_token() {
    let err = snbt::from_str("{a:1☃}").unwrap_err();
    assert!(err.to_string().contains('☃'));
}

#[cfg(feature = "arbitrary1")]
mod arbitrary_values {
    use arbitrary::{Arbitrary, Unstructured};

    use crate::{
        from_bytes_with_opts, snbt, to_bytes, Compound, Compression, Endian, NbtData,
        ReadOptions, RootName, Value, WriteOptions,
    };

    /// Deterministic filler so failures reproduce.
    fn noise(seed: u64, len: usize) -> Vec<u8> {
        let mut state = seed.wrapping_mul(0x9e37_79b9_7f4a_7c15) | 1;
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                state as u8
            })
            .collect()
    }

    fn values() -> impl Iterator<Item = Value> {
        (0..256).filter_map(|seed| {
            let data = noise(seed, 4096);
            let mut u = Unstructured::new(&data);
            let value = Value::arbitrary(&mut u).ok()?;
            let mut root = Compound::new();
            root.insert("v".to_owned(), value);
            Some(Value::Compound(root))
        })
    }

    /// NaN never equals itself, so values holding one cannot be compared.
    fn without_nan(v: &Value) -> bool {
        match v {
            Value::Float(f) => !f.is_nan(),
            Value::Double(f) => !f.is_nan(),
            Value::List(l) => l.iter().all(without_nan),
            Value::Compound(c) => c.values().all(without_nan),
            _ => true,
        }
    }

    #[test]
    fn binary_rewrites_identically() {
        for endian in [Endian::Big, Endian::Little] {
            let write = WriteOptions::new().endian(endian).compression(Compression::Gzip);
            let read = ReadOptions::new()
                .endian(endian)
                .compression(Compression::Gzip)
                .name(RootName::Present)
                .bedrock_level(false);

            for value in values() {
                let nbt = NbtData::with_options(value, &write).unwrap();
                let bytes = to_bytes(&nbt).unwrap();
                let back = from_bytes_with_opts(&bytes, read.clone()).unwrap();
                assert_eq!(to_bytes(&back).unwrap(), bytes);
            }
        }
    }

    #[test]
    fn snbt_reads_back() {
        for value in values().filter(without_nan) {
            let text = snbt::to_string(&value).unwrap();
            assert_eq!(snbt::from_str(&text).unwrap(), value, "{}", text);
        }
    }
}
