//! Streaming decoder for the path binary format.

use pgeo_buffers::ReadBuf;

use crate::constants::{PATH_HEADER_LEN, POINT_LEN};
use crate::error::{check_count, GeoError};
use crate::types::{PgPath, PgPoint};

/// Decode progress for one path value.
enum DecodeState {
    Idle,
    /// Neither the closed flag nor the count has been consumed.
    AwaitingHeader { declared: usize },
    /// Header consumed; `points` holds every fully decoded point.
    AwaitingPoints {
        points: Vec<PgPoint>,
        target: usize,
        closed: bool,
    },
}

/// Streaming decoder for the `path` wire format.
///
/// Works like [`PolygonDecoder`](crate::PolygonDecoder) with one
/// difference: the header is five bytes, a closed flag followed by the
/// point count, and is consumed atomically. Suspension never splits it.
pub struct PathDecoder {
    state: DecodeState,
}

impl PathDecoder {
    /// Creates a decoder with no value in flight.
    pub fn new() -> Self {
        Self {
            state: DecodeState::Idle,
        }
    }

    /// Arms the decoder for one value declared as `declared_len` bytes long.
    pub fn prepare_read(&mut self, declared_len: usize) {
        self.state = DecodeState::AwaitingHeader {
            declared: declared_len,
        };
    }

    /// Number of points fully decoded so far in the current cycle.
    pub fn points_committed(&self) -> usize {
        match &self.state {
            DecodeState::AwaitingPoints { points, .. } => points.len(),
            _ => 0,
        }
    }

    /// Consumes as much of the value as the buffer holds, returning
    /// `Ok(None)` on suspension and the finished path on completion.
    ///
    /// # Panics
    ///
    /// Panics when called without a preceding `prepare_read`.
    pub fn read(&mut self, buf: &mut ReadBuf) -> Result<Option<PgPath>, GeoError> {
        loop {
            match &mut self.state {
                DecodeState::Idle => {
                    panic!("PathDecoder::read called without prepare_read")
                }
                DecodeState::AwaitingHeader { declared } => {
                    // Flag and count both, or neither.
                    if buf.bytes_left() < PATH_HEADER_LEN {
                        return Ok(None);
                    }
                    let declared = *declared;
                    let closed = buf.u8() != 0;
                    let count = buf.i32();
                    let target = match check_count(count, PATH_HEADER_LEN, declared) {
                        Ok(target) => target,
                        Err(err) => {
                            self.state = DecodeState::Idle;
                            return Err(err);
                        }
                    };
                    self.state = DecodeState::AwaitingPoints {
                        points: Vec::with_capacity(target),
                        target,
                        closed,
                    };
                }
                DecodeState::AwaitingPoints {
                    points,
                    target,
                    closed,
                } => {
                    while points.len() < *target {
                        if buf.bytes_left() < POINT_LEN {
                            return Ok(None);
                        }
                        points.push(PgPoint::new(buf.f64(), buf.f64()));
                    }
                    let closed = *closed;
                    let points = std::mem::take(points);
                    self.state = DecodeState::Idle;
                    return Ok(Some(PgPath::new(points, closed)));
                }
            }
        }
    }
}

impl Default for PathDecoder {
    fn default() -> Self {
        Self::new()
    }
}
