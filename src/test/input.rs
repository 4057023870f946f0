use crate::{
    error::ErrorKind,
    input::{try_size, ByteReader},
    Endian, Tag,
};

#[test]
fn reads_in_both_orders() {
    let data = [0x01, 0x02, 0x03, 0x04];

    let mut big = ByteReader::new(&data, Endian::Big);
    assert_eq!(big.consume_u32().unwrap(), 0x01020304);

    let mut little = ByteReader::new(&data, Endian::Little);
    assert_eq!(little.consume_u16().unwrap(), 0x0201);
    assert_eq!(little.consume_i16().unwrap(), 0x0403);
    assert_eq!(little.remaining(), 0);
}

#[test]
fn wide_numbers() {
    let mut data = Vec::new();
    data.extend_from_slice(&i64::MIN.to_le_bytes());
    data.extend_from_slice(&(-2i64).to_le_bytes());
    data.extend_from_slice(&1.5f32.to_le_bytes());
    data.extend_from_slice(&(-0.5f64).to_le_bytes());

    let mut input = ByteReader::new(&data, Endian::Little);
    assert_eq!(input.consume_i64().unwrap(), i64::MIN);
    assert_eq!(input.consume_i64().unwrap(), -2);
    assert_eq!(input.consume_f32().unwrap(), 1.5);
    assert_eq!(input.consume_f64().unwrap(), -0.5);
}

#[test]
fn out_of_bounds_leaves_cursor() {
    let data = [0, 1, 2];
    let mut input = ByteReader::new(&data, Endian::Big);
    input.consume_u8().unwrap();

    let err = input.consume_i32().unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::OutOfBounds));
    assert_eq!(input.offset(), 1);
    assert_eq!(input.consume_bytes(2).unwrap(), &[1, 2]);
}

#[test]
fn tags() {
    let data = [10, 13];
    let mut input = ByteReader::new(&data, Endian::Big);
    assert_eq!(input.consume_tag().unwrap(), Tag::Compound);

    let err = input.consume_tag().unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::MalformedInput));
    assert!(err.to_string().contains("byte offset 1"));
}

#[test]
fn size_prefixed_strings() {
    let data = [0, 2, b'h', b'i', 3, 0, b'a', b'b', b'c'];
    let mut input = ByteReader::new(&data, Endian::Big);
    assert_eq!(input.consume_size_prefixed_str().unwrap(), "hi");

    let mut input = ByteReader::new(&data[4..], Endian::Little);
    assert_eq!(input.consume_size_prefixed_str().unwrap(), "abc");
}

#[test]
fn sizes() {
    assert_eq!(try_size(3, 8).unwrap(), 24);
    assert!(matches!(try_size(-1, 1).unwrap_err().kind(), ErrorKind::MalformedInput));
    assert_eq!(try_size(i32::MAX, 8).unwrap(), i32::MAX as usize * 8);
}
