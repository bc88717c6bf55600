//! PostgreSQL `polygon` binary wire format.
//!
//! Layout: a signed 32-bit vertex count, then each vertex as two 8-byte
//! floats, all big-endian. A value occupies `4 + count * 16` bytes. The
//! count makes the value self-describing, but the enclosing protocol
//! message also declares the field length, and the two must agree.
//!
//! Polygons can outgrow the connection buffer, so [`PolygonDecoder`] and
//! [`PolygonEncoder`] work in resumable chunks. [`decode_polygon`] and
//! [`encode_polygon`] cover the common case of a value that is already
//! fully buffered.

mod decoder;
mod encoder;

pub use decoder::PolygonDecoder;
pub use encoder::PolygonEncoder;

use pgeo_buffers::{BufferError, ReadBuf, WriteBuf};

use crate::constants::{POINT_LEN, POLYGON_HEADER_LEN};
use crate::error::GeoError;
use crate::types::PgPolygon;

/// Decodes a polygon from a fully buffered field.
pub fn decode_polygon(bytes: &[u8]) -> Result<PgPolygon, GeoError> {
    let mut buf = ReadBuf::from_bytes(bytes);
    let mut decoder = PolygonDecoder::new();
    decoder.prepare_read(bytes.len());
    match decoder.read(&mut buf)? {
        Some(polygon) => Ok(polygon),
        None => Err(BufferError::EndOfBuffer.into()),
    }
}

/// Encodes a polygon into a fresh, exactly sized byte vector.
pub fn encode_polygon(value: &PgPolygon) -> Vec<u8> {
    let mut buf = WriteBuf::with_capacity(POLYGON_HEADER_LEN + value.len() * POINT_LEN);
    let mut encoder = PolygonEncoder::new();
    encoder.prepare_write(value.clone());
    let done = encoder.write(&mut buf);
    debug_assert!(done);
    buf.flush()
}
