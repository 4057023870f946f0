//! The compression wrapped around whole NBT streams, backed by `flate2`.
//!
//! Both directions are plain byte-to-byte transforms. [`Compression::None`]
//! borrows the input untouched.
use std::{
    borrow::Cow,
    io::{Read, Write},
};

use flate2::{
    read::{DeflateDecoder, GzDecoder, ZlibDecoder},
    write::{DeflateEncoder, GzEncoder, ZlibEncoder},
};
use log::trace;

use crate::{
    error::{Error, Result},
    Compression,
};

/// First two bytes of every gzip member.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// First byte of a zlib stream using the 32K window every encoder in practice
/// picks.
pub const ZLIB_MAGIC: u8 = 0x78;

/// The compression the leading bytes unambiguously announce, if any.
pub fn sniff(data: &[u8]) -> Option<Compression> {
    if data.starts_with(&GZIP_MAGIC) {
        Some(Compression::Gzip)
    } else if data.first() == Some(&ZLIB_MAGIC) {
        Some(Compression::Deflate)
    } else {
        None
    }
}

pub fn compress(data: &[u8], compression: Compression) -> Result<Cow<'_, [u8]>> {
    let level = flate2::Compression::default();
    let out = match compression {
        Compression::None => return Ok(Cow::Borrowed(data)),
        Compression::Gzip => {
            let mut encoder = GzEncoder::new(Vec::new(), level);
            encoder.write_all(data).map_err(Error::compression)?;
            encoder.finish().map_err(Error::compression)?
        }
        Compression::Deflate => {
            let mut encoder = ZlibEncoder::new(Vec::new(), level);
            encoder.write_all(data).map_err(Error::compression)?;
            encoder.finish().map_err(Error::compression)?
        }
        Compression::DeflateRaw => {
            let mut encoder = DeflateEncoder::new(Vec::new(), level);
            encoder.write_all(data).map_err(Error::compression)?;
            encoder.finish().map_err(Error::compression)?
        }
    };

    trace!("{} compressed {} bytes to {}", compression, data.len(), out.len());
    Ok(Cow::Owned(out))
}

pub fn decompress(data: &[u8], compression: Compression) -> Result<Cow<'_, [u8]>> {
    let mut out = Vec::new();
    match compression {
        Compression::None => return Ok(Cow::Borrowed(data)),
        Compression::Gzip => GzDecoder::new(data).read_to_end(&mut out),
        Compression::Deflate => ZlibDecoder::new(data).read_to_end(&mut out),
        Compression::DeflateRaw => DeflateDecoder::new(data).read_to_end(&mut out),
    }
    .map_err(Error::compression)?;

    trace!("{} decompressed {} bytes to {}", compression, data.len(), out.len());
    Ok(Cow::Owned(out))
}
