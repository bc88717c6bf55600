//! Streaming encoder for the polygon binary format.

use pgeo_buffers::WriteBuf;

use crate::constants::{POINT_LEN, POLYGON_HEADER_LEN};
use crate::error::GeoError;
use crate::types::{GeoValue, PgPolygon};

/// Encode progress for one polygon value.
enum EncodeState {
    /// No value in flight.
    Idle,
    /// The count header has not been written yet.
    AwaitingHeader { value: PgPolygon },
    /// Header written; vertices before `index` are on the wire.
    WritingPoints { value: PgPolygon, index: usize },
}

/// Streaming encoder for the `polygon` wire format.
///
/// The counterpart of [`PolygonDecoder`](crate::PolygonDecoder): it owns the
/// value for one encode cycle and emits it into a bounded [`WriteBuf`] in
/// whole-element steps, returning `false` when the buffer is out of space.
/// The caller flushes the buffer toward the socket and calls
/// [`write`](PolygonEncoder::write) again; no byte is ever written twice.
///
/// # Example
///
/// ```
/// use pgeo::{GeoValue, PgPoint, PgPolygon, PolygonEncoder};
/// use pgeo_buffers::WriteBuf;
///
/// let value = PgPolygon::new(vec![PgPoint::new(1.0, 2.0)]);
/// let len = PolygonEncoder::validate_and_length(&GeoValue::from(value.clone())).unwrap();
/// assert_eq!(len, 20);
///
/// let mut buf = WriteBuf::with_capacity(len);
/// let mut encoder = PolygonEncoder::new();
/// encoder.prepare_write(value);
/// assert!(encoder.write(&mut buf));
/// assert_eq!(buf.written().len(), len);
/// ```
pub struct PolygonEncoder {
    state: EncodeState,
}

impl PolygonEncoder {
    /// Creates an encoder with no value in flight.
    pub fn new() -> Self {
        Self {
            state: EncodeState::Idle,
        }
    }

    /// Checks that `value` is a polygon and returns the exact number of
    /// bytes its encoding will occupy.
    ///
    /// Pure and independent of any write cycle: the enclosing protocol
    /// message writes this length into its own field header before the
    /// first value byte goes out.
    pub fn validate_and_length(value: &GeoValue) -> Result<usize, GeoError> {
        match value {
            GeoValue::Polygon(polygon) => Ok(POLYGON_HEADER_LEN + polygon.len() * POINT_LEN),
            other => Err(GeoError::TypeMismatch {
                expected: "polygon",
                actual: other.type_name(),
            }),
        }
    }

    /// Takes ownership of `value` for one encode cycle and resets the
    /// cursor. The value is dropped when the cycle completes.
    pub fn prepare_write(&mut self, value: PgPolygon) {
        self.state = EncodeState::AwaitingHeader { value };
    }

    /// Number of points fully written so far in the current cycle.
    pub fn points_committed(&self) -> usize {
        match &self.state {
            EncodeState::WritingPoints { index, .. } => *index,
            _ => 0,
        }
    }

    /// Writes as much of the value as the buffer has space for.
    ///
    /// Returns `false` when space ran out before the value was complete;
    /// flush the buffer and call again. Returns `true` once the last vertex
    /// is written, after which the encoder is idle until the next
    /// [`prepare_write`](PolygonEncoder::prepare_write). Space is only ever
    /// consumed in whole-element steps, so a suspended encoder leaves the
    /// buffer holding complete elements only.
    ///
    /// # Panics
    ///
    /// Panics when called without a preceding `prepare_write`.
    #[must_use]
    pub fn write(&mut self, buf: &mut WriteBuf) -> bool {
        loop {
            match &mut self.state {
                EncodeState::Idle => {
                    panic!("PolygonEncoder::write called without prepare_write")
                }
                EncodeState::AwaitingHeader { value } => {
                    if buf.space_left() < POLYGON_HEADER_LEN {
                        return false;
                    }
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

impl Default for PolygonEncoder {
    fn default() -> Self {
        Self::new()
    }
}
