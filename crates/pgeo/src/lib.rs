//! Binary wire codecs for PostgreSQL's geometric types.
//!
//! PostgreSQL sends `point`, `line`, `lseg`, `box`, `path`, `polygon` and
//! `circle` column values in a binary format of big-endian 8-byte floats
//! behind small fixed headers. The fixed-size types are decoded in one step
//! from a pre-buffered field ([`fixed`]). The two variable-length types,
//! `polygon` and `path`, can be far larger than the connection's buffer, so
//! their codecs ([`polygon`], [`path`]) work in chunks: they consume or
//! produce whole elements while the buffer lasts, suspend without error
//! when it runs out, and resume exactly at the element boundary where they
//! stopped.
//!
//! Buffers come from the sibling `pgeo-buffers` crate; suspension is driven
//! entirely off their `bytes_left`/`space_left` counters.

pub mod constants;
mod error;
pub mod fixed;
pub mod path;
pub mod polygon;
mod types;

pub use error::GeoError;
pub use path::{decode_path, encode_path, PathDecoder, PathEncoder};
pub use polygon::{decode_polygon, encode_polygon, PolygonDecoder, PolygonEncoder};
pub use types::{GeoValue, PgBox, PgCircle, PgLine, PgLseg, PgPath, PgPoint, PgPolygon};
