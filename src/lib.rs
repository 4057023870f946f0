//! nbtkit reads and writes NBT data as used by *Minecraft: Java Edition* and
//! *Bedrock Edition*, and converts it to and from the stringified SNBT form.
//!
//! * For the in-memory tree see [`Value`] and [`Compound`].
//! * For a tree bundled with its file format see [`NbtData`].
//! * For NBT array types see [`ByteArray`], [`IntArray`], and [`LongArray`].
//! * For the text form see the [`snbt`] module.
//!
//! ```toml
//! [dependencies]
//! nbtkit = "0.1"
//! ```
//!
//! # Reading
//!
//! [`from_bytes`] works out the endianness, the compression, whether the root
//! tag is named and whether a Bedrock Level header is present by trying the
//! likely candidates in order. Anything already known can be pinned with
//! [`ReadOptions`], which skips the guessing for that dimension.
//!
//! ```
//! use nbtkit::{Compound, Endian, NbtData, Value, WriteOptions};
//!
//! # fn main() -> nbtkit::error::Result<()> {
//! let mut root = Compound::new();
//! root.insert("DataVersion".to_owned(), Value::Int(3465));
//!
//! let opts = WriteOptions::new().endian(Endian::Little);
//! let nbt = NbtData::with_options(Value::Compound(root), &opts)?;
//! let bytes = nbtkit::to_bytes(&nbt)?;
//!
//! let back = nbtkit::from_bytes(&bytes)?;
//! assert_eq!(back.endian(), Endian::Little);
//! assert_eq!(back.data().get("DataVersion"), Some(&Value::Int(3465)));
//! # Ok(())
//! # }
//! ```
//!
//! # Writing
//!
//! [`to_bytes`] writes an [`NbtData`] using its own format metadata.
//! [`to_bytes_with_opts`] overrides parts of that metadata for one write.
//!
//! # SNBT
//!
//! ```
//! use nbtkit::{snbt, Value};
//!
//! let value = snbt::from_str("{id: \"minecraft:stone\", Count: 64b}").unwrap();
//! assert_eq!(value.get("Count"), Some(&Value::Byte(64)));
//! assert_eq!(snbt::to_string(&value).unwrap(), "{id:\"minecraft:stone\",Count:64b}");
//! ```

pub mod compression;
pub mod error;
pub mod snbt;

mod arrays;
mod de;
mod detect;
mod input;
mod nbt;
mod options;
mod output;
mod ser;
mod value;

pub use arrays::*;
pub use detect::{from_bytes, from_bytes_with_opts};
pub use nbt::NbtData;
pub use options::*;
pub use ser::{to_bytes, to_bytes_with_opts};
pub use value::*;

#[cfg(test)]
mod test;

use std::convert::TryFrom;

/// Deepest List/Compound nesting accepted by the decoders.
pub(crate) const MAX_DEPTH: usize = 512;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other objects, all of the same tag.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

impl Tag {
    /// Whether a tag of this kind may sit at the top of a stream.
    pub fn is_root(self) -> bool {
        matches!(self, Tag::List | Tag::Compound)
    }
}

// The tag numbers are fixed by the format, so the conversions are written out
// rather than generated.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 3,
            Tag::Long => 4,
            Tag::Float => 5,
            Tag::Double => 6,
            Tag::ByteArray => 7,
            Tag::String => 8,
            Tag::List => 9,
            Tag::Compound => 10,
            Tag::IntArray => 11,
            Tag::LongArray => 12,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tag::End => "End",
            Tag::Byte => "Byte",
            Tag::Short => "Short",
            Tag::Int => "Int",
            Tag::Long => "Long",
            Tag::Float => "Float",
            Tag::Double => "Double",
            Tag::ByteArray => "ByteArray",
            Tag::String => "String",
            Tag::List => "List",
            Tag::Compound => "Compound",
            Tag::IntArray => "IntArray",
            Tag::LongArray => "LongArray",
        };
        f.write_str(name)
    }
}
