//! Encoding of an [`NbtData`] into binary NBT.

use log::trace;

use crate::{
    compression::compress,
    error::{Error, Result},
    nbt::header_version,
    output::ByteWriter,
    NbtData, Tag, Value, WriteOptions,
};

/// Serialize an [`NbtData`] to bytes, using the endianness, root name,
/// compression and Bedrock Level header it carries.
///
/// ```
/// # use nbtkit::{Compound, NbtData, Value};
/// # fn main() -> nbtkit::error::Result<()> {
/// let nbt = NbtData::new(Value::Compound(Compound::new()))?;
/// assert_eq!(nbtkit::to_bytes(&nbt)?, [10, 0, 0, 0]);
/// # Ok(())
/// # }
/// ```
pub fn to_bytes(nbt: &NbtData) -> Result<Vec<u8>> {
    let level = nbt.bedrock_level();
    let version = header_version(nbt.data(), level)?;

    let mut output = ByteWriter::new(nbt.endian());
    if version.is_some() {
        // Filled in once the length of the rest is known.
        output.skip(8);
    }

    output.write_tag(nbt.data().tag());
    if let Some(name) = nbt.name() {
        output.write_size_prefixed_str(name)?;
    }
    write_value(&mut output, nbt.data())?;

    if let Some(version) = version {
        let len = output.offset() - 8;
        let len: u32 = len
            .try_into()
            .map_err(|_| Error::malformed(format!("{} bytes is too long for a Bedrock Level header", len)))?;
        output.patch_u32(0, version);
        output.patch_u32(4, len);
    }

    let bytes = output.trim();
    trace!("encoded {} bytes of {} endian nbt", bytes.len(), nbt.endian());

    Ok(compress(&bytes, nbt.compression())?.into_owned())
}

/// Serialize an [`NbtData`] to bytes, overriding the parts of its format set in
/// `opts`.
pub fn to_bytes_with_opts(nbt: &NbtData, opts: &WriteOptions) -> Result<Vec<u8>> {
    to_bytes(&nbt.derive(opts)?)
}

pub(crate) fn write_value(output: &mut ByteWriter, value: &Value) -> Result<()> {
    match value {
        Value::Byte(v) => output.write_i8(*v),
        Value::Boolean(v) => output.write_u8(u8::from(*v)),
        Value::Short(v) => output.write_i16(*v),
        Value::Int(v) => output.write_i32(*v),
        Value::Long(v) => output.write_i64(*v),
        Value::Float(v) => output.write_f32(*v),
        Value::Double(v) => output.write_f64(*v),
        Value::String(v) => output.write_size_prefixed_str(v)?,
        Value::ByteArray(v) => {
            output.write_len(v.len())?;
            for b in v.iter() {
                output.write_i8(*b);
            }
        }
        Value::IntArray(v) => {
            output.write_len(v.len())?;
            for i in v.iter() {
                output.write_i32(*i);
            }
        }
        Value::LongArray(v) => {
            output.write_len(v.len())?;
            for l in v.iter() {
                output.write_i64(*l);
            }
        }
        Value::List(list) => {
            let element_tag = list.first().map(Value::tag).unwrap_or(Tag::End);
            output.write_tag(element_tag);
            output.write_len(list.len())?;
            for (i, element) in list.iter().enumerate() {
                if element.tag() != element_tag {
                    return Err(Error::element_mismatch(i, element_tag, element.tag()));
                }
                write_value(output, element)?;
            }
        }
        Value::Compound(compound) => {
            for (name, value) in compound {
                output.write_tag(value.tag());
                output.write_size_prefixed_str(name)?;
                write_value(output, value)?;
            }
            output.write_tag(Tag::End);
        }
    }

    Ok(())
}
