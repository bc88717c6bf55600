//! Error type shared by the geometric codecs.

use thiserror::Error;

use pgeo_buffers::BufferError;

use crate::constants::{MAX_SEQ_POINTS, POINT_LEN};

/// Errors produced while encoding or decoding geometric wire values.
///
/// Buffer exhaustion is not an error for the chunked codecs: they signal it
/// by suspending (`Ok(None)` / `false`) and resume once the caller has fed
/// or flushed the buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeoError {
    /// The encode path was handed a value of the wrong geometric type.
    #[error("expected a {expected} value, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    /// A sequence header carried a negative or implausibly large point count.
    #[error("invalid point count {0}")]
    InvalidCount(i32),
    /// The point count disagrees with the field length declared by the
    /// enclosing protocol message.
    #[error("field declared as {declared} bytes but the count implies {computed}")]
    LengthMismatch { declared: usize, computed: usize },
    /// A fixed-size value ran past the buffered bytes or the remaining space.
    #[error("buffer exhausted: {0}")]
    Buffer(#[from] BufferError),
}

/// Validates a sequence header's point count against the field length the
/// enclosing message declared.
///
/// `header_len` is the fixed preamble before the points (4 for polygon, 5
/// for path). Returns the count as a usize that is safe to use as an
/// allocation capacity.
pub(crate) fn check_count(
    count: i32,
    header_len: usize,
    declared: usize,
) -> Result<usize, GeoError> {
    if count < 0 {
        return Err(GeoError::InvalidCount(count));
    }
    let target = count as usize;
    if target > MAX_SEQ_POINTS {
        return Err(GeoError::InvalidCount(count));
    }
    let computed = header_len + target * POINT_LEN;
    if computed != declared {
        return Err(GeoError::LengthMismatch { declared, computed });
    }
    Ok(target)
}
