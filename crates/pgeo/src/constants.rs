//! Wire-level constants for the geometric binary formats.

/// Bytes in one point on the wire: two 8-byte floats.
pub const POINT_LEN: usize = 16;

/// Bytes in a `line` value: the three coefficients of Ax + By + C = 0.
pub const LINE_LEN: usize = 24;

/// Bytes in an `lseg` value: two endpoints.
pub const LSEG_LEN: usize = 32;

/// Bytes in a `box` value: two corner points.
pub const BOX_LEN: usize = 32;

/// Bytes in a `circle` value: center point and radius.
pub const CIRCLE_LEN: usize = 24;

/// Bytes in the polygon header: a signed 32-bit vertex count.
pub const POLYGON_HEADER_LEN: usize = 4;

/// Bytes in the path header: a closed flag byte plus a signed 32-bit
/// point count.
pub const PATH_HEADER_LEN: usize = 5;

/// Largest field PostgreSQL sends for a single value (1 GiB - 1).
pub const MAX_FIELD_LEN: usize = 0x3fff_ffff;

/// Most points any sequence value can carry without its field exceeding
/// [`MAX_FIELD_LEN`]. Counts above this are rejected as malformed before
/// anything is allocated for them.
pub const MAX_SEQ_POINTS: usize = (MAX_FIELD_LEN - PATH_HEADER_LEN) / POINT_LEN;
