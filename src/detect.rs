//! Working out the format of a stream that arrives without one.
//!
//! Each of compression, endianness and root naming that the caller leaves
//! unset expands into an ordered list of candidates, most likely first. The
//! candidates are tried in order (compression outermost, root naming
//! innermost) and the first candidate that decodes the whole buffer wins.
//! When none does and the read is not strict, the candidate whose root tag
//! ended furthest into the buffer wins instead, so a short misreading of the
//! first few bytes cannot shadow the real format. Otherwise the error of the
//! first candidate is returned, since that is the format the data most
//! probably was meant to be in.

use byteorder::{ByteOrder, LittleEndian};
use log::debug;

use crate::{
    compression::{decompress, sniff},
    de::{read_root, ReadFormat},
    error::{Error, ErrorKind, Result},
    Compression, Endian, NbtData, ReadOptions, RootName,
};

/// Deserialize NBT from bytes, detecting the endianness, compression, root
/// naming and Bedrock Level header.
///
/// ```
/// # use nbtkit::{Compound, Compression, Endian, NbtData, Value, WriteOptions};
/// # fn main() -> nbtkit::error::Result<()> {
/// # let empty = NbtData::new(Value::Compound(Compound::new()))?;
/// # let data = nbtkit::to_bytes_with_opts(&empty, &WriteOptions::new().compression(Compression::Gzip))?;
/// // data holds a gzipped, big endian, empty compound named "".
/// let nbt = nbtkit::from_bytes(&data)?;
/// assert_eq!(nbt.compression(), Compression::Gzip);
/// assert_eq!(nbt.endian(), Endian::Big);
/// assert_eq!(nbt.name(), Some(""));
/// # Ok(())
/// # }
/// ```
pub fn from_bytes(data: &[u8]) -> Result<NbtData> {
    from_bytes_with_opts(data, ReadOptions::default())
}

/// Deserialize NBT from bytes. Dimensions set in `opts` are used as given,
/// the rest are detected as in [`from_bytes`].
pub fn from_bytes_with_opts(data: &[u8], opts: ReadOptions) -> Result<NbtData> {
    let compressions = compression_candidates(data, opts.compression);
    let endians = match (opts.endian, opts.bedrock_level) {
        (Some(endian), _) => vec![endian],
        // Only little endian data carries the header.
        (None, Some(true)) => vec![Endian::Little],
        (None, _) => vec![Endian::Big, Endian::Little],
    };
    let names = match &opts.name {
        Some(name) => vec![name.clone()],
        None => vec![RootName::Present, RootName::Absent],
    };

    let mut first_error: Option<Error> = None;
    // Offset where the root ended, and the value, of the lenient candidate
    // that read furthest.
    let mut furthest: Option<(usize, NbtData)> = None;

    for &compression in &compressions {
        let decompressed = match decompress(data, compression) {
            Ok(decompressed) => decompressed,
            Err(e) => {
                debug!("candidate {} rejected: {}", compression, e);
                first_error.get_or_insert(e);
                continue;
            }
        };

        for &endian in &endians {
            let bedrock_level = opts
                .bedrock_level
                .unwrap_or_else(|| endian == Endian::Little && has_bedrock_level_header(&decompressed));

            for name in &names {
                // Trials are always strict. Leniency only applies once no
                // candidate fits exactly.
                let format = ReadFormat {
                    name,
                    endian,
                    compression,
                    bedrock_level,
                    strict: true,
                };

                match read_root(&decompressed, &format) {
                    Ok(nbt) => {
                        debug!("read nbt as {:?}", format);
                        return Ok(nbt);
                    }
                    Err(e) => {
                        debug!("candidate {:?} rejected: {}", format, e);
                        match e.kind() {
                            ErrorKind::TrailingData { byte_offset, .. } if !opts.strict => {
                                let byte_offset = *byte_offset;
                                if furthest.as_ref().map_or(true, |(best, _)| byte_offset > *best) {
                                    furthest = e.into_partial().map(|nbt| (byte_offset, nbt));
                                }
                            }
                            _ => {
                                first_error.get_or_insert(e);
                            }
                        }
                    }
                }
            }
        }
    }

    if let Some((byte_offset, nbt)) = furthest {
        debug!(
            "no candidate read the whole buffer, keeping {} {} read up to byte offset {}",
            nbt.compression(),
            nbt.endian(),
            byte_offset
        );
        return Ok(nbt);
    }

    Err(first_error.unwrap_or_else(|| Error::unsupported_option("no candidate formats to read with")))
}

/// Compressions to try, in order. The magic bytes of gzip and the usual zlib
/// header settle it. Otherwise the data is most likely uncompressed, then a
/// zlib stream with an unusual window size, then a raw deflate stream, which
/// has no header at all. Uncompressed NBT never starts with either magic, so
/// a sniffed compression has no fallback.
fn compression_candidates(data: &[u8], requested: Option<Compression>) -> Vec<Compression> {
    if let Some(compression) = requested {
        return vec![compression];
    }

    match sniff(data) {
        Some(compression) => vec![compression],
        None => vec![Compression::None, Compression::Deflate, Compression::DeflateRaw],
    }
}

/// Whether `data` looks like it starts with a Bedrock Level header: the
/// upper three bytes of the little endian version are zero, or the little
/// endian u32 at byte 4 holds the length of everything after the 8 byte
/// header.
pub(crate) fn has_bedrock_level_header(data: &[u8]) -> bool {
    if data.len() < 8 {
        return false;
    }

    data[1..4] == [0, 0, 0] || LittleEndian::read_u32(&data[4..8]) as usize == data.len() - 8
}
