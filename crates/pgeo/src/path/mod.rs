//! PostgreSQL `path` binary wire format.
//!
//! Layout: one byte for the closed flag (1 closed, 0 open), a signed 32-bit
//! point count, then the points as pairs of big-endian 8-byte floats. A
//! value occupies `5 + count * 16` bytes. Like polygons, paths can outgrow
//! the connection buffer, so the codecs here are resumable.

mod decoder;
mod encoder;

pub use decoder::PathDecoder;
pub use encoder::PathEncoder;

use pgeo_buffers::{BufferError, ReadBuf, WriteBuf};

use crate::constants::{PATH_HEADER_LEN, POINT_LEN};
use crate::error::GeoError;
use crate::types::PgPath;

/// Decodes a path from a fully buffered field.
pub fn decode_path(bytes: &[u8]) -> Result<PgPath, GeoError> {
    let mut buf = ReadBuf::from_bytes(bytes);
    let mut decoder = PathDecoder::new();
    decoder.prepare_read(bytes.len());
    match decoder.read(&mut buf)? {
        Some(path) => Ok(path),
        None => Err(BufferError::EndOfBuffer.into()),
    }
}

/// Encodes a path into a fresh, exactly sized byte vector.
pub fn encode_path(value: &PgPath) -> Vec<u8> {
    let mut buf = WriteBuf::with_capacity(PATH_HEADER_LEN + value.len() * POINT_LEN);
    let mut encoder = PathEncoder::new();
    encoder.prepare_write(value.clone());
    let done = encoder.write(&mut buf);
    debug_assert!(done);
    buf.flush()
}
