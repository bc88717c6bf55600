//! Streaming decoder for the polygon binary format.

use pgeo_buffers::ReadBuf;

use crate::constants::{POINT_LEN, POLYGON_HEADER_LEN};
use crate::error::{check_count, GeoError};
use crate::types::{PgPoint, PgPolygon};

/// Decode progress for one polygon value.
enum DecodeState {
    /// No value in flight.
    Idle,
    /// The count header has not been consumed yet.
    AwaitingCount { declared: usize },
    /// Header consumed; `points` holds every fully decoded vertex.
    AwaitingPoints { points: Vec<PgPoint>, target: usize },
}

/// Streaming decoder for the `polygon` wire format.
///
/// One decoder handles one value at a time and is reused for the next value
/// after completion. The backing [`ReadBuf`] typically holds only part of
/// the value: [`read`](PolygonDecoder::read) consumes whole elements while
/// it can, returns `Ok(None)` when the next element is not fully buffered,
/// and picks up where it stopped once the caller has fed the buffer again.
/// Bytes are only ever consumed at element boundaries, so a suspended
/// decoder leaves the buffer positioned exactly after the last complete
/// element.
///
/// # Example
///
/// ```
/// use pgeo::{encode_polygon, PgPoint, PgPolygon, PolygonDecoder};
/// use pgeo_buffers::ReadBuf;
///
/// let value = PgPolygon::new(vec![PgPoint::new(1.0, 2.0)]);
/// let wire = encode_polygon(&value);
///
/// let mut decoder = PolygonDecoder::new();
/// decoder.prepare_read(wire.len());
///
/// // Nothing buffered yet: the decoder suspends.
/// let mut buf = ReadBuf::with_capacity(64);
/// assert_eq!(decoder.read(&mut buf), Ok(None));
///
/// buf.feed(&wire);
/// assert_eq!(decoder.read(&mut buf), Ok(Some(value)));
/// ```
pub struct PolygonDecoder {
    state: DecodeState,
}

impl PolygonDecoder {
    /// Creates a decoder with no value in flight.
    pub fn new() -> Self {
        Self {
            state: DecodeState::Idle,
        }
    }

    /// Arms the decoder for one value whose field the enclosing protocol
    /// message declared as `declared_len` bytes long. State from a
    /// previously completed value is discarded.
    pub fn prepare_read(&mut self, declared_len: usize) {
        self.state = DecodeState::AwaitingCount {
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

    /// Consumes as much of the value as the buffer holds.
    ///
    /// Returns `Ok(None)` when the buffer ran out before the value was
    /// complete; feed the buffer and call again. Returns the finished
    /// polygon once its last vertex is consumed, after which the decoder is
    /// idle until the next [`prepare_read`](PolygonDecoder::prepare_read).
    /// A decode error abandons the cycle; the field is unrecoverable and
    /// resynchronizing the stream is the caller's concern.
    ///
    /// # Panics
    ///
    /// Panics when called without a preceding `prepare_read`.
    pub fn read(&mut self, buf: &mut ReadBuf) -> Result<Option<PgPolygon>, GeoError> {
        loop {
            match &mut self.state {
                DecodeState::Idle => {
                    panic!("PolygonDecoder::read called without prepare_read")
                }
                DecodeState::AwaitingCount { declared } => {
                    if buf.bytes_left() < POLYGON_HEADER_LEN {
                        return Ok(None);
                    }
                    let declared = *declared;
                    let count = buf.i32();
                    let target = match check_count(count, POLYGON_HEADER_LEN, declared) {
                        Ok(target) => target,
                        Err(err) => {
                            self.state = DecodeState::Idle;
                            return Err(err);
                        }
                    };
                    self.state = DecodeState::AwaitingPoints {
                        points: Vec::with_capacity(target),
                        target,
                    };
                }
                DecodeState::AwaitingPoints { points, target } => {
                    while points.len() < *target {
                        if buf.bytes_left() < POINT_LEN {
                            return Ok(None);
                        }
                        points.push(PgPoint::new(buf.f64(), buf.f64()));
                    }
                    let points = std::mem::take(points);
                    self.state = DecodeState::Idle;
                    return Ok(Some(PgPolygon::new(points)));
                }
            }
        }
    }
}

impl Default for PolygonDecoder {
    fn default() -> Self {
        Self::new()
    }
}
