//! Streaming encoder for the path binary format.

use pgeo_buffers::WriteBuf;

use crate::constants::{PATH_HEADER_LEN, POINT_LEN};
use crate::error::GeoError;
use crate::types::{GeoValue, PgPath};

/// Encode progress for one path value.
enum EncodeState {
    Idle,
    /// Neither the closed flag nor the count has been written.
    AwaitingHeader { value: PgPath },
    /// Header written; points before `index` are on the wire.
    WritingPoints { value: PgPath, index: usize },
}

/// Streaming encoder for the `path` wire format.
///
/// Works like [`PolygonEncoder`](crate::PolygonEncoder) with the path's
/// five-byte header, written atomically.
pub struct PathEncoder {
    state: EncodeState,
}

impl PathEncoder {
    /// Creates an encoder with no value in flight.
    pub fn new() -> Self {
        Self {
            state: EncodeState::Idle,
        }
    }

    /// Checks that `value` is a path and returns the exact number of bytes
    /// its encoding will occupy. Pure and independent of any write cycle.
    pub fn validate_and_length(value: &GeoValue) -> Result<usize, GeoError> {
        match value {
            GeoValue::Path(path) => Ok(PATH_HEADER_LEN + path.len() * POINT_LEN),
            other => Err(GeoError::TypeMismatch {
                expected: "path",
                actual: other.type_name(),
            }),
        }
    }

    /// Takes ownership of `value` for one encode cycle and resets the
    /// cursor. The value is dropped when the cycle completes.
    pub fn prepare_write(&mut self, value: PgPath) {
        self.state = EncodeState::AwaitingHeader { value };
    }

    /// Number of points fully written so far in the current cycle.
    pub fn points_committed(&self) -> usize {
        match &self.state {
            EncodeState::WritingPoints { index, .. } => *index,
            _ => 0,
        }
    }

    /// Writes as much of the value as the buffer has space for, returning
    /// `false` on suspension and `true` on completion.
    ///
    /// # Panics
    ///
    /// Panics when called without a preceding `prepare_write`.
    #[must_use]
    pub fn write(&mut self, buf: &mut WriteBuf) -> bool {
        loop {
            match &mut self.state {
                EncodeState::Idle => {
                    panic!("PathEncoder::write called without prepare_write")
                }
                EncodeState::AwaitingHeader { value } => {
                    // Flag and count both, or neither.
                    if buf.space_left() < PATH_HEADER_LEN {
                        return false;
                    }
                    buf.u8(value.closed as u8);
                    buf.i32(value.len() as i32);
                    let value = std::mem::take(value);
                    self.state = EncodeState::WritingPoints { value, index: 0 };
                }
                EncodeState::WritingPoints { value, index } => {
                    while *index < value.len() {
                        if buf.space_left() < POINT_LEN {
                            return false;
                        }
                        let point = value.points[*index];
                        buf.f64(point.x);
                        buf.f64(point.y);
                        *index += 1;
                    }
                    self.state = EncodeState::Idle;
                    return true;
                }
            }
        }
    }
}

impl Default for PathEncoder {
    fn default() -> Self {
        Self::new()
    }
}
