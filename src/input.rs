use std::convert::TryFrom;

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::{
    error::{Error, Result},
    Endian, Tag,
};

/// Converts an on-the-wire element count into a byte size, rejecting negative
/// counts and overflow.
pub(crate) fn try_size(size: i32, multiplier: usize) -> Result<usize> {
    let size: usize = size
        .try_into()
        .map_err(|_| Error::malformed(format!("negative length {}", size)))?;

    size.checked_mul(multiplier)
        .ok_or_else(|| Error::malformed("length too large".to_string()))
}

macro_rules! consume_fixed {
    ($($name:ident: $ty:ty => $read:ident,)*) => {
        $(
            pub fn $name(&mut self) -> Result<$ty> {
                let endian = self.endian;
                let bs = self.consume(std::mem::size_of::<$ty>())?;
                Ok(match endian {
                    Endian::Big => BigEndian::$read(bs),
                    Endian::Little => LittleEndian::$read(bs),
                })
            }
        )*
    };
}

/// A cursor over an immutable byte buffer. Every consume advances the cursor
/// by the width it decoded, or fails with `OutOfBounds` and leaves it alone.
pub(crate) struct ByteReader<'de> {
    data: &'de [u8],
    offset: usize,
    endian: Endian,
}

impl<'de> ByteReader<'de> {
    pub fn new(data: &'de [u8], endian: Endian) -> Self {
        Self {
            data,
            offset: 0,
            endian,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Check that `n` more bytes exist without consuming them.
    pub fn ensure(&self, n: usize) -> Result<()> {
        if n <= self.remaining() {
            Ok(())
        } else {
            Err(Error::out_of_bounds(self.offset, n, self.data.len()))
        }
    }

    fn consume(&mut self, n: usize) -> Result<&'de [u8]> {
        self.ensure(n)?;
        let bs = &self.data[self.offset..self.offset + n];
        self.offset += n;
        Ok(bs)
    }

    pub fn consume_bytes(&mut self, n: usize) -> Result<&'de [u8]> {
        self.consume(n)
    }

    pub fn consume_u8(&mut self) -> Result<u8> {
        Ok(self.consume(1)?[0])
    }

    pub fn consume_i8(&mut self) -> Result<i8> {
        Ok(self.consume_u8()? as i8)
    }

    consume_fixed! {
        consume_i16: i16 => read_i16,
        consume_u16: u16 => read_u16,
        consume_i32: i32 => read_i32,
        consume_u32: u32 => read_u32,
        consume_i64: i64 => read_i64,
        consume_f32: f32 => read_f32,
        consume_f64: f64 => read_f64,
    }

    pub fn consume_tag(&mut self) -> Result<Tag> {
        let offset = self.offset;
        let tag = self.consume_u8()?;
        Tag::try_from(tag).map_err(|_| Error::invalid_tag(tag, offset))
    }

    /// Decode `len` bytes as UTF-8. Invalid sequences become U+FFFD rather
    /// than failing.
    pub fn consume_str(&mut self, len: usize) -> Result<String> {
        let bs = self.consume(len)?;
        Ok(String::from_utf8_lossy(bs).into_owned())
    }

    /// A string prefixed with its unsigned 16 bit byte length.
    pub fn consume_size_prefixed_str(&mut self) -> Result<String> {
        let len = self.consume_u16()? as usize;
        self.consume_str(len)
    }
}
