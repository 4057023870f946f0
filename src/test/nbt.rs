use crate::{
    error::ErrorKind, BedrockLevel, Compound, Compression, Endian, NbtData, Value, WriteOptions,
};

fn empty() -> Value {
    Value::Compound(Compound::new())
}

#[test]
fn defaults() {
    let nbt = NbtData::new(empty()).unwrap();
    assert_eq!(nbt.name(), Some(""));
    assert_eq!(nbt.endian(), Endian::Big);
    assert_eq!(nbt.compression(), Compression::None);
    assert_eq!(nbt.bedrock_level(), BedrockLevel::Absent);
}

#[test]
fn root_must_be_list_or_compound() {
    for v in [Value::Int(1), Value::String("x".to_owned()), Value::Boolean(true)] {
        let err = NbtData::new(v).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TypeMismatch));
    }

    assert!(NbtData::try_from(Value::List(vec![])).is_ok());
}

#[test]
fn root_name_length_limit() {
    let opts = WriteOptions::new().name("n".repeat(65535));
    assert!(NbtData::with_options(empty(), &opts).is_ok());

    let opts = WriteOptions::new().name("n".repeat(65536));
    let err = NbtData::with_options(empty(), &opts).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::UnsupportedOption));
}

#[test]
fn bedrock_level_requires_little_endian() {
    let opts = WriteOptions::new().bedrock_level(true);
    let err = NbtData::with_options(empty(), &opts).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::UnsupportedOption));

    let opts = WriteOptions::new()
        .bedrock_level(BedrockLevel::Version(4))
        .endian(Endian::Little);
    assert!(NbtData::with_options(empty(), &opts).is_ok());
}

#[test]
fn derive_inherits_unset_fields() {
    let opts = WriteOptions::new()
        .name("Data")
        .endian(Endian::Little)
        .compression(Compression::Gzip);
    let nbt = NbtData::with_options(empty(), &opts).unwrap();

    let derived = nbt.derive(&WriteOptions::new().compression(Compression::None)).unwrap();
    assert_eq!(derived.name(), Some("Data"));
    assert_eq!(derived.endian(), Endian::Little);
    assert_eq!(derived.compression(), Compression::None);
    assert_eq!(derived.data(), nbt.data());

    let unnamed = nbt.derive(&WriteOptions::new().unnamed()).unwrap();
    assert_eq!(unnamed.name(), None);
}

#[test]
fn derive_validates() {
    let nbt = NbtData::with_options(
        empty(),
        &WriteOptions::new().endian(Endian::Little).bedrock_level(true),
    )
    .unwrap();

    let err = nbt.derive(&WriteOptions::new().endian(Endian::Big)).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::UnsupportedOption));
}

#[test]
fn into_data_returns_value() {
    let mut c = Compound::new();
    c.insert("k".to_owned(), Value::Long(3));
    let nbt = NbtData::new(Value::Compound(c.clone())).unwrap();
    assert_eq!(nbt.as_ref().get("k"), Some(&Value::Long(3)));
    assert_eq!(nbt.into_data(), Value::Compound(c));
}
