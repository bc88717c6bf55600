//! One-shot codecs for the fixed-size geometric types.
//!
//! `point`, `line`, `lseg`, `box` and `circle` occupy a fixed number of
//! bytes on the wire, so the protocol layer buffers the whole value before
//! dispatching here; a short buffer is a protocol error, not a suspension.
//! Every field is a big-endian 8-byte float. Readers and writers consume
//! either the whole value or, on error, nothing.

use pgeo_buffers::{BufferError, ReadBuf, WriteBuf};

use crate::constants::{BOX_LEN, CIRCLE_LEN, LINE_LEN, LSEG_LEN, POINT_LEN};
use crate::error::GeoError;
use crate::types::{PgBox, PgCircle, PgLine, PgLseg, PgPoint};

/// Reads a `point`: x, then y.
pub fn read_point(buf: &mut ReadBuf) -> Result<PgPoint, GeoError> {
    if buf.bytes_left() < POINT_LEN {
        return Err(BufferError::EndOfBuffer.into());
    }
    Ok(PgPoint::new(buf.f64(), buf.f64()))
}

/// Writes a `point`.
pub fn write_point(buf: &mut WriteBuf, value: &PgPoint) -> Result<(), GeoError> {
    if buf.space_left() < POINT_LEN {
        return Err(BufferError::OutOfSpace.into());
    }
    buf.f64(value.x);
    buf.f64(value.y);
    Ok(())
}

/// Reads a `line`: the coefficients A, B, C.
pub fn read_line(buf: &mut ReadBuf) -> Result<PgLine, GeoError> {
    if buf.bytes_left() < LINE_LEN {
        return Err(BufferError::EndOfBuffer.into());
    }
    Ok(PgLine::new(buf.f64(), buf.f64(), buf.f64()))
}

/// Writes a `line`.
pub fn write_line(buf: &mut WriteBuf, value: &PgLine) -> Result<(), GeoError> {
    if buf.space_left() < LINE_LEN {
        return Err(BufferError::OutOfSpace.into());
    }
    buf.f64(value.a);
    buf.f64(value.b);
    buf.f64(value.c);
    Ok(())
}

/// Reads an `lseg`: the start point, then the end point.
pub fn read_lseg(buf: &mut ReadBuf) -> Result<PgLseg, GeoError> {
    if buf.bytes_left() < LSEG_LEN {
        return Err(BufferError::EndOfBuffer.into());
    }
    let start = PgPoint::new(buf.f64(), buf.f64());
    let end = PgPoint::new(buf.f64(), buf.f64());
    Ok(PgLseg::new(start, end))
}

/// Writes an `lseg`.
pub fn write_lseg(buf: &mut WriteBuf, value: &PgLseg) -> Result<(), GeoError> {
    if buf.space_left() < LSEG_LEN {
        return Err(BufferError::OutOfSpace.into());
    }
    buf.f64(value.start.x);
    buf.f64(value.start.y);
    buf.f64(value.end.x);
    buf.f64(value.end.y);
    Ok(())
}

/// Reads a `box`: the upper-right corner, then the lower-left corner.
pub fn read_box(buf: &mut ReadBuf) -> Result<PgBox, GeoError> {
    if buf.bytes_left() < BOX_LEN {
        return Err(BufferError::EndOfBuffer.into());
    }
    let high = PgPoint::new(buf.f64(), buf.f64());
    let low = PgPoint::new(buf.f64(), buf.f64());
    Ok(PgBox::new(high, low))
}

/// Writes a `box`.
pub fn write_box(buf: &mut WriteBuf, value: &PgBox) -> Result<(), GeoError> {
    if buf.space_left() < BOX_LEN {
        return Err(BufferError::OutOfSpace.into());
    }
    buf.f64(value.high.x);
    buf.f64(value.high.y);
    buf.f64(value.low.x);
    buf.f64(value.low.y);
    Ok(())
}

/// Reads a `circle`: the center point, then the radius.
pub fn read_circle(buf: &mut ReadBuf) -> Result<PgCircle, GeoError> {
    if buf.bytes_left() < CIRCLE_LEN {
        return Err(BufferError::EndOfBuffer.into());
    }
    let center = PgPoint::new(buf.f64(), buf.f64());
    let radius = buf.f64();
    Ok(PgCircle::new(center, radius))
}

/// Writes a `circle`.
pub fn write_circle(buf: &mut WriteBuf, value: &PgCircle) -> Result<(), GeoError> {
    if buf.space_left() < CIRCLE_LEN {
        return Err(BufferError::OutOfSpace.into());
    }
    buf.f64(value.center.x);
    buf.f64(value.center.y);
    buf.f64(value.radius);
    Ok(())
}
