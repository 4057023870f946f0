//! Decoding of a complete binary NBT stream into a [`Value`] tree.
//!
//! The decoder assumes the format is already known: decompression and any
//! guessing of endianness or root naming happen in the detector, which calls
//! [`read_root`] once per candidate format.

use crate::{
    error::{Error, Result},
    input::{try_size, ByteReader},
    nbt::{storage_version, NbtData},
    BedrockLevel, ByteArray, Compound, Compression, Endian, IntArray, LongArray, RootName, Tag,
    Value, MAX_DEPTH,
};

/// A fully resolved read format.
#[derive(Debug, Clone)]
pub(crate) struct ReadFormat<'a> {
    pub name: &'a RootName,
    pub endian: Endian,
    pub compression: Compression,
    pub bedrock_level: bool,
    pub strict: bool,
}

/// Decode a root tag from already-decompressed bytes.
pub(crate) fn read_root(data: &[u8], format: &ReadFormat<'_>) -> Result<NbtData> {
    if format.bedrock_level && format.endian != Endian::Little {
        return Err(Error::unsupported_option(
            "a Bedrock Level header requires little endian data",
        ));
    }

    let mut input = ByteReader::new(data, format.endian);

    // The remainder length in the header is not trusted; the root tag ends
    // where its own structure says.
    let header_version = if format.bedrock_level {
        let version = input.consume_u32()?;
        input.consume_u32()?;
        Some(version)
    } else {
        None
    };

    let tag = input.consume_tag()?;
    if !tag.is_root() {
        return Err(Error::type_mismatch(format!(
            "expected an opening List or Compound tag at the start of the buffer, found {}",
            tag
        )));
    }

    let name = match format.name {
        RootName::Present => Some(input.consume_size_prefixed_str()?),
        RootName::Absent => None,
        RootName::Exact(expected) => {
            let name = input.consume_size_prefixed_str()?;
            if &name != expected {
                return Err(Error::malformed(format!(
                    "expected root name '{}', found '{}'",
                    expected, name
                )));
            }
            Some(name)
        }
    };

    let value = read_value(&mut input, tag, 0)?;

    let bedrock_level = match header_version {
        None => BedrockLevel::Absent,
        Some(version) if storage_version(&value) == Some(version as i32) => BedrockLevel::Present,
        Some(version) => BedrockLevel::Version(version),
    };

    let nbt = NbtData::from_parts(value, name, format.endian, format.compression, bedrock_level);

    if format.strict && input.remaining() > 0 {
        return Err(Error::trailing_data(input.offset(), input.remaining(), nbt));
    }

    Ok(nbt)
}

/// Decode the payload of a value whose tag has already been read.
///
/// Only Lists and Compounds recurse, each through its own small function,
/// so deep nesting costs as little stack as possible per level.
pub(crate) fn read_value(input: &mut ByteReader<'_>, tag: Tag, depth: usize) -> Result<Value> {
    match tag {
        Tag::List => read_list(input, depth),
        Tag::Compound => read_compound(input, depth),
        _ => read_leaf(input, tag),
    }
}

fn read_list(input: &mut ByteReader<'_>, depth: usize) -> Result<Value> {
    check_depth(input, depth)?;
    let element_tag = input.consume_tag()?;
    let len = try_size(input.consume_i32()?, 1)?;

    // Every element takes at least one byte except in lists of End, which can
    // only be empty, so the input bounds the allocation.
    let mut list = Vec::with_capacity(len.min(input.remaining()));
    for _ in 0..len {
        list.push(read_value(input, element_tag, depth + 1)?);
    }
    Ok(Value::List(list))
}

fn read_compound(input: &mut ByteReader<'_>, depth: usize) -> Result<Value> {
    check_depth(input, depth)?;
    let mut compound = Compound::new();
    loop {
        let tag = input.consume_tag()?;
        if tag == Tag::End {
            break;
        }

        let name = input.consume_size_prefixed_str()?;
        let value = read_value(input, tag, depth + 1)?;
        compound.insert(name, value);
    }
    Ok(Value::Compound(compound))
}

/// Scalars, strings and arrays. Kept out of line so its locals stay off the
/// recursive frames.
#[inline(never)]
fn read_leaf(input: &mut ByteReader<'_>, tag: Tag) -> Result<Value> {
    Ok(match tag {
        Tag::Byte => Value::Byte(input.consume_i8()?),
        Tag::Short => Value::Short(input.consume_i16()?),
        Tag::Int => Value::Int(input.consume_i32()?),
        Tag::Long => Value::Long(input.consume_i64()?),
        Tag::Float => Value::Float(input.consume_f32()?),
        Tag::Double => Value::Double(input.consume_f64()?),
        Tag::String => Value::String(input.consume_size_prefixed_str()?),
        Tag::ByteArray => {
            let size = try_size(input.consume_i32()?, 1)?;
            let bs = input.consume_bytes(size)?;
            Value::ByteArray(ByteArray::new(bs.iter().map(|b| *b as i8).collect()))
        }
        Tag::IntArray => {
            let len = input.consume_i32()?;
            input.ensure(try_size(len, std::mem::size_of::<i32>())?)?;
            let mut data = Vec::with_capacity(len as usize);
            for _ in 0..len {
                data.push(input.consume_i32()?);
            }
            Value::IntArray(IntArray::new(data))
        }
        Tag::LongArray => {
            let len = input.consume_i32()?;
            input.ensure(try_size(len, std::mem::size_of::<i64>())?)?;
            let mut data = Vec::with_capacity(len as usize);
            for _ in 0..len {
                data.push(input.consume_i64()?);
            }
            Value::LongArray(LongArray::new(data))
        }
        Tag::End | Tag::List | Tag::Compound => {
            return Err(Error::malformed(format!(
                "unexpected {} tag at byte offset {}",
                tag,
                input.offset()
            )))
        }
    })
}

#[inline(never)]
fn check_depth(input: &ByteReader<'_>, depth: usize) -> Result<()> {
    if depth >= MAX_DEPTH {
        Err(Error::malformed(format!(
            "nesting deeper than {} at byte offset {}",
            MAX_DEPTH,
            input.offset()
        )))
    } else {
        Ok(())
    }
}
