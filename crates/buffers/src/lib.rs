//! Bounded, reusable binary buffers for wire protocol I/O.
//!
//! Wire values cross a connection through fixed-capacity buffers that are
//! refilled and drained incrementally, so a buffer rarely holds a whole
//! value at once. [`ReadBuf`] accumulates incoming bytes and hands them out
//! through big-endian accessors; [`WriteBuf`] collects outgoing bytes up to
//! its capacity. Neither side grows: codecs working on top of them check
//! [`ReadBuf::bytes_left`] / [`WriteBuf::space_left`] and suspend when the
//! buffer is exhausted, resuming after the caller feeds or flushes it.

use thiserror::Error;

mod read_buf;
mod write_buf;

pub use read_buf::ReadBuf;
pub use write_buf::WriteBuf;

/// Errors returned by the bounds-checked buffer accessors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// A read asked for more bytes than the buffer currently holds.
    #[error("read past the end of the buffered data")]
    EndOfBuffer,
    /// A write asked for more space than the buffer has left.
    #[error("write past the remaining buffer capacity")]
    OutOfSpace,
}
