use byteorder::{BigEndian, ByteOrder, LittleEndian};
use log::trace;

use crate::{
    error::{Error, Result},
    Endian, Tag,
};

const INITIAL_CAPACITY: usize = 1024;

macro_rules! write_fixed {
    ($($name:ident: $ty:ty => $write:ident,)*) => {
        $(
            pub fn $name(&mut self, v: $ty) {
                let endian = self.endian;
                let bs = self.advance(std::mem::size_of::<$ty>());
                match endian {
                    Endian::Big => BigEndian::$write(bs, v),
                    Endian::Little => LittleEndian::$write(bs, v),
                }
            }
        )*
    };
}

/// An owned, growable output buffer with a write cursor. The buffer doubles
/// before any write that would not fit; bytes past the cursor are always
/// zero.
pub(crate) struct ByteWriter {
    data: Vec<u8>,
    offset: usize,
    endian: Endian,
}

impl ByteWriter {
    pub fn new(endian: Endian) -> Self {
        Self {
            data: vec![0; INITIAL_CAPACITY],
            offset: 0,
            endian,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    fn allocate(&mut self, n: usize) {
        let required = self.offset + n;
        if self.data.len() >= required {
            return;
        }

        let mut len = self.data.len().max(1);
        while len < required {
            len *= 2;
        }
        trace!("growing write buffer from {} to {} bytes", self.data.len(), len);
        self.data.resize(len, 0);
    }

    /// Reserve `n` bytes at the cursor and move past them.
    fn advance(&mut self, n: usize) -> &mut [u8] {
        self.allocate(n);
        let start = self.offset;
        self.offset += n;
        &mut self.data[start..start + n]
    }

    /// Move past `n` zero bytes, to be filled in later with
    /// [`patch_u32`][Self::patch_u32].
    pub fn skip(&mut self, n: usize) {
        self.advance(n);
    }

    pub fn write_u8(&mut self, v: u8) {
        self.advance(1)[0] = v;
    }

    pub fn write_i8(&mut self, v: i8) {
        self.write_u8(v as u8);
    }

    write_fixed! {
        write_i16: i16 => write_i16,
        write_u16: u16 => write_u16,
        write_i32: i32 => write_i32,
        write_i64: i64 => write_i64,
        write_f32: f32 => write_f32,
        write_f64: f64 => write_f64,
    }

    pub fn write_bytes(&mut self, bs: &[u8]) {
        self.advance(bs.len()).copy_from_slice(bs);
    }

    pub fn write_tag(&mut self, tag: Tag) {
        self.write_u8(tag.into());
    }

    /// Overwrite four already-written bytes at `at`.
    pub fn patch_u32(&mut self, at: usize, v: u32) {
        let bs = &mut self.data[at..at + 4];
        match self.endian {
            Endian::Big => BigEndian::write_u32(bs, v),
            Endian::Little => LittleEndian::write_u32(bs, v),
        }
    }

    /// A string prefixed with its unsigned 16 bit byte length.
    pub fn write_size_prefixed_str(&mut self, s: &str) -> Result<()> {
        let len: u16 = s.len().try_into().map_err(|_| {
            Error::malformed(format!(
                "string of {} bytes is longer than the 65535 an NBT string can hold",
                s.len()
            ))
        })?;
        self.write_u16(len);
        self.write_bytes(s.as_bytes());
        Ok(())
    }

    /// A List or array length, which the format stores as a signed 32 bit int.
    pub fn write_len(&mut self, len: usize) -> Result<()> {
        let len: i32 = len
            .try_into()
            .map_err(|_| Error::malformed(format!("length {} too large", len)))?;
        self.write_i32(len);
        Ok(())
    }

    /// The written prefix of the buffer.
    pub fn trim(mut self) -> Vec<u8> {
        self.data.truncate(self.offset);
        self.data
    }
}
