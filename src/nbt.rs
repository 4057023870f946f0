use crate::{
    error::{Error, Result},
    BedrockLevel, Compression, Endian, Tag, Value, WriteOptions,
};

/// A root NBT value together with the format it was read from, or is to be
/// written as. Immutable: changing the format means deriving a new container
/// with [`derive`][Self::derive].
///
/// ```
/// # use nbtkit::{Compound, Compression, NbtData, Value, WriteOptions};
/// # fn main() -> nbtkit::error::Result<()> {
/// let nbt = NbtData::new(Value::Compound(Compound::new()))?;
/// assert_eq!(nbt.name(), Some(""));
///
/// let gz = nbt.derive(&WriteOptions::new().compression(Compression::Gzip))?;
/// assert_eq!(gz.compression(), Compression::Gzip);
/// assert_eq!(gz.name(), Some(""));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NbtData {
    data: Value,
    name: Option<String>,
    endian: Endian,
    compression: Compression,
    bedrock_level: BedrockLevel,
}

impl NbtData {
    /// Wrap a root value with the default format: root named `""`, big
    /// endian, uncompressed, no Bedrock Level header.
    pub fn new(data: Value) -> Result<Self> {
        Self::with_options(data, &WriteOptions::default())
    }

    /// Wrap a root value, taking any format field not set in `opts` from the
    /// defaults.
    pub fn with_options(data: Value, opts: &WriteOptions) -> Result<Self> {
        let nbt = Self {
            data,
            name: opts.name.clone().unwrap_or_else(|| Some(String::new())),
            endian: opts.endian.unwrap_or_default(),
            compression: opts.compression.unwrap_or_default(),
            bedrock_level: opts.bedrock_level.unwrap_or_default(),
        };
        nbt.validate()?;
        Ok(nbt)
    }

    /// A copy of this container with the fields set in `opts` replaced. Fields
    /// not set are inherited from `self`.
    pub fn derive(&self, opts: &WriteOptions) -> Result<Self> {
        let nbt = Self {
            data: self.data.clone(),
            name: opts.name.clone().unwrap_or_else(|| self.name.clone()),
            endian: opts.endian.unwrap_or(self.endian),
            compression: opts.compression.unwrap_or(self.compression),
            bedrock_level: opts.bedrock_level.unwrap_or(self.bedrock_level),
        };
        nbt.validate()?;
        Ok(nbt)
    }

    /// Used by the decoder, which has already checked the root tag.
    pub(crate) fn from_parts(
        data: Value,
        name: Option<String>,
        endian: Endian,
        compression: Compression,
        bedrock_level: BedrockLevel,
    ) -> Self {
        Self {
            data,
            name,
            endian,
            compression,
            bedrock_level,
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.data.tag().is_root() {
            return Err(Error::type_mismatch(format!(
                "root value must be a List or Compound, found {}",
                self.data.tag()
            )));
        }

        if let Some(name) = &self.name {
            if name.len() > u16::MAX as usize {
                return Err(Error::unsupported_option(format!(
                    "root name of {} bytes is longer than 65535",
                    name.len()
                )));
            }
        }

        if self.bedrock_level.is_present() && self.endian != Endian::Little {
            return Err(Error::unsupported_option(
                "a Bedrock Level header requires little endian data",
            ));
        }

        Ok(())
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn into_data(self) -> Value {
        self.data
    }

    /// Name of the root tag, `None` when the stream has no root name at all.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    pub fn bedrock_level(&self) -> BedrockLevel {
        self.bedrock_level
    }
}

impl TryFrom<Value> for NbtData {
    type Error = Error;

    fn try_from(data: Value) -> Result<Self> {
        Self::new(data)
    }
}

impl AsRef<Value> for NbtData {
    fn as_ref(&self) -> &Value {
        &self.data
    }
}

/// The root `StorageVersion` entry Bedrock `level.dat` files carry, if it is
/// an Int.
pub(crate) fn storage_version(root: &Value) -> Option<i32> {
    match root.get("StorageVersion") {
        Some(Value::Int(v)) => Some(*v),
        _ => None,
    }
}

/// Header version to write for `level`, checking the root compound when the
/// version comes from `StorageVersion`.
pub(crate) fn header_version(root: &Value, level: BedrockLevel) -> Result<Option<u32>> {
    match level {
        BedrockLevel::Absent => Ok(None),
        BedrockLevel::Version(v) => Ok(Some(v)),
        BedrockLevel::Present => match root.get("StorageVersion") {
            Some(Value::Int(v)) => Ok(Some(*v as u32)),
            Some(other) => Err(Error::type_mismatch(format!(
                "StorageVersion must be {} for a Bedrock Level header, found {}",
                Tag::Int,
                other.tag()
            ))),
            None => Err(Error::malformed(
                "a Bedrock Level header needs a StorageVersion Int in the root compound",
            )),
        },
    }
}
