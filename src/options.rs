//! Format metadata and the options accepted by the readers and writers.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Byte order of every multi-byte number in a stream. Java Edition uses big
/// endian, Bedrock Edition little endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endian {
    #[default]
    Big,
    Little,
}

impl FromStr for Endian {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "big" => Ok(Endian::Big),
            "little" => Ok(Endian::Little),
            other => Err(Error::unsupported_option(format!(
                "unsupported endian '{}', expected 'big' or 'little'",
                other
            ))),
        }
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endian::Big => "big",
            Endian::Little => "little",
        })
    }
}

/// Compression wrapped around a whole stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Compression {
    #[default]
    None,
    Gzip,
    /// zlib framing around a deflate stream.
    Deflate,
    /// A deflate stream with no framing at all.
    DeflateRaw,
}

impl FromStr for Compression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Compression::None),
            "gzip" => Ok(Compression::Gzip),
            "deflate" => Ok(Compression::Deflate),
            "deflate-raw" => Ok(Compression::DeflateRaw),
            other => Err(Error::unsupported_option(format!(
                "unsupported compression '{}', expected 'none', 'gzip', 'deflate' or 'deflate-raw'",
                other
            ))),
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Compression::None => "none",
            Compression::Gzip => "gzip",
            Compression::Deflate => "deflate",
            Compression::DeflateRaw => "deflate-raw",
        })
    }
}

/// The 8 byte header Bedrock Edition puts in front of `level.dat`: a version
/// number, then the byte length of everything after the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BedrockLevel {
    /// No header.
    #[default]
    Absent,
    /// Header whose version is the root compound's `StorageVersion` Int.
    Present,
    /// Header with an explicit version.
    Version(u32),
}

impl BedrockLevel {
    pub fn is_present(self) -> bool {
        !matches!(self, BedrockLevel::Absent)
    }
}

impl From<bool> for BedrockLevel {
    fn from(present: bool) -> Self {
        if present {
            BedrockLevel::Present
        } else {
            BedrockLevel::Absent
        }
    }
}

/// How the name of the root tag is handled when reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RootName {
    /// The root tag carries a name; accept any.
    Present,
    /// The root tag has no name at all, as in Bedrock network data.
    Absent,
    /// The root tag carries exactly this name.
    Exact(String),
}

/// Options for [`from_bytes_with_opts`][crate::from_bytes_with_opts]. Every
/// dimension left as `None` is worked out by trial, see
/// [`from_bytes`][crate::from_bytes].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    pub name: Option<RootName>,
    pub endian: Option<Endian>,
    pub compression: Option<Compression>,
    pub bedrock_level: Option<bool>,
    /// Fail when bytes remain after the root value. Some old save files
    /// declare less data than they hold, so this can be switched off.
    pub strict: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            name: None,
            endian: None,
            compression: None,
            bedrock_level: None,
            strict: true,
        }
    }
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: RootName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn endian(mut self, endian: Endian) -> Self {
        self.endian = Some(endian);
        self
    }

    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn bedrock_level(mut self, bedrock_level: bool) -> Self {
        self.bedrock_level = Some(bedrock_level);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Format overrides for building or re-writing an [`NbtData`][crate::NbtData].
/// Anything left unset is inherited from the container being derived from, or
/// takes the container default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions {
    pub(crate) name: Option<Option<String>>,
    pub(crate) endian: Option<Endian>,
    pub(crate) compression: Option<Compression>,
    pub(crate) bedrock_level: Option<BedrockLevel>,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the root tag.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Some(name.into()));
        self
    }

    /// Write the root tag without any name.
    pub fn unnamed(mut self) -> Self {
        self.name = Some(None);
        self
    }

    pub fn endian(mut self, endian: Endian) -> Self {
        self.endian = Some(endian);
        self
    }

    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn bedrock_level(mut self, bedrock_level: impl Into<BedrockLevel>) -> Self {
        self.bedrock_level = Some(bedrock_level.into());
        self
    }
}

/// Indentation used by [`to_string_with_opts`][crate::snbt::to_string_with_opts].
/// Built from a string, or from a count of spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IndentRepr", into = "IndentRepr")]
pub struct Indent(String);

impl Indent {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<usize> for Indent {
    fn from(spaces: usize) -> Self {
        Indent(" ".repeat(spaces))
    }
}

impl From<&str> for Indent {
    fn from(s: &str) -> Self {
        Indent(s.to_owned())
    }
}

impl From<String> for Indent {
    fn from(s: String) -> Self {
        Indent(s)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum IndentRepr {
    Spaces(usize),
    Text(String),
}

impl From<IndentRepr> for Indent {
    fn from(repr: IndentRepr) -> Self {
        match repr {
            IndentRepr::Spaces(n) => n.into(),
            IndentRepr::Text(s) => s.into(),
        }
    }
}

impl From<Indent> for IndentRepr {
    fn from(indent: Indent) -> Self {
        IndentRepr::Text(indent.0)
    }
}

/// Options for [`to_string_with_opts`][crate::snbt::to_string_with_opts].
/// The default is the compact single-line form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringifyOptions {
    pub indent: Indent,
}

impl StringifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent(mut self, indent: impl Into<Indent>) -> Self {
        self.indent = indent.into();
        self
    }
}
