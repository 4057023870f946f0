//! Contains the Error and Result type used throughout the crate.
use crate::{NbtData, Tag};

/// Various errors that can occur while reading, writing, parsing or
/// stringifying NBT.
#[derive(Debug)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Structurally invalid bytes or text: an unexpected End tag, an unknown
    /// tag number, an unterminated quote, a bad escape and so on.
    MalformedInput,

    /// A List or array whose elements are not all of one kind, or a value
    /// used where a different kind is required (eg a scalar root).
    TypeMismatch,

    /// A read would have gone past the end of the buffer.
    OutOfBounds,

    /// Strict reading found bytes after the root value. The value decoded up
    /// to that point is kept, see [`Error::into_partial`].
    TrailingData {
        byte_offset: usize,
        remaining: usize,
        partial: Box<NbtData>,
    },

    /// An endian, compression, name or Bedrock Level option outside its
    /// domain.
    UnsupportedOption,

    /// The compression codec failed. The underlying error is the
    /// [`source`][std::error::Error::source].
    Compression(std::io::Error),
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_trailing_data(&self) -> bool {
        matches!(self.kind, ErrorKind::TrailingData { .. })
    }

    /// Recover the successfully decoded value from a
    /// [`TrailingData`][ErrorKind::TrailingData] error. Every other kind
    /// carries no partial result.
    pub fn into_partial(self) -> Option<NbtData> {
        match self.kind {
            ErrorKind::TrailingData { partial, .. } => Some(*partial),
            _ => None,
        }
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::MalformedInput,
        }
    }

    pub(crate) fn invalid_tag(tag: u8, byte_offset: usize) -> Self {
        Self::malformed(format!(
            "invalid nbt tag value {} at byte offset {}",
            tag, byte_offset
        ))
    }

    pub(crate) fn type_mismatch(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::TypeMismatch,
        }
    }

    pub(crate) fn element_mismatch(index: usize, expected: Tag, actual: Tag) -> Self {
        Self::type_mismatch(format!(
            "element {} is {}, expected {} like the rest of the list",
            index, actual, expected
        ))
    }

    pub(crate) fn out_of_bounds(byte_offset: usize, wanted: usize, len: usize) -> Self {
        Self {
            msg: format!(
                "out of bounds: reading {} bytes at byte offset {} of a {} byte buffer",
                wanted, byte_offset, len
            ),
            kind: ErrorKind::OutOfBounds,
        }
    }

    pub(crate) fn trailing_data(byte_offset: usize, remaining: usize, partial: NbtData) -> Self {
        Self {
            msg: format!(
                "unexpected data after the root tag at byte offset {}, {} unread bytes remaining",
                byte_offset, remaining
            ),
            kind: ErrorKind::TrailingData {
                byte_offset,
                remaining,
                partial: Box::new(partial),
            },
        }
    }

    pub(crate) fn unsupported_option(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::UnsupportedOption,
        }
    }

    pub(crate) fn compression(e: std::io::Error) -> Self {
        Self {
            msg: format!("compression error: {}", e),
            kind: ErrorKind::Compression(e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Compression(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}
