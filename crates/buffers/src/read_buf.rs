//! Fixed-capacity read buffer with incremental refill.

use crate::BufferError;

/// A fixed-capacity buffer over incoming wire bytes.
///
/// Bytes are appended with [`feed`](ReadBuf::feed) and consumed through
/// big-endian accessors that advance an internal cursor. Consumed space is
/// reclaimed by compaction, so one buffer serves an arbitrarily long stream.
/// The unchecked accessors expect callers to have verified
/// [`bytes_left`](ReadBuf::bytes_left) first and panic when reading past the
/// buffered data; the `try_*` variants return an error instead and leave the
/// cursor untouched.
///
/// # Example
///
/// ```
/// use pgeo_buffers::ReadBuf;
///
/// let mut buf = ReadBuf::with_capacity(8);
/// buf.feed(&[0x01, 0x02, 0x03, 0x04]);
/// assert_eq!(buf.bytes_left(), 4);
/// assert_eq!(buf.i32(), 0x01020304);
/// assert_eq!(buf.bytes_left(), 0);
/// ```
pub struct ReadBuf {
    /// Backing storage; its length is the buffer capacity.
    data: Vec<u8>,
    /// Read cursor.
    x: usize,
    /// Fill watermark (exclusive); bytes in `x..end` are unread.
    end: usize,
}

impl ReadBuf {
    /// Creates an empty buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity],
            x: 0,
            end: 0,
        }
    }

    /// Creates a buffer pre-filled with `bytes`, capacity equal to their length.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
            x: 0,
            end: bytes.len(),
        }
    }

    /// Returns the total capacity of the buffer.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of unread bytes.
    pub fn bytes_left(&self) -> usize {
        self.end - self.x
    }

    /// Returns how many bytes a `feed` call can accept right now,
    /// counting consumed space that compaction would reclaim.
    pub fn free_space(&self) -> usize {
        self.capacity() - self.bytes_left()
    }

    /// Discards all buffered bytes, read or not.
    pub fn clear(&mut self) {
        self.x = 0;
        self.end = 0;
    }

    /// Moves the unread bytes to the front of the buffer, reclaiming
    /// consumed space for the next `feed`.
    pub fn compact(&mut self) {
        self.data.copy_within(self.x..self.end, 0);
        self.end -= self.x;
        self.x = 0;
    }

    /// Appends as much of `src` as fits, compacting first when the tail is
    /// full. Returns the number of bytes accepted, which may be short when
    /// unread bytes occupy the capacity.
    pub fn feed(&mut self, src: &[u8]) -> usize {
        if self.data.len() - self.end < src.len() {
            self.compact();
        }
        let n = src.len().min(self.data.len() - self.end);
        self.data[self.end..self.end + n].copy_from_slice(&src[..n]);
        self.end += n;
        n
    }

    /// Consumes `n` buffered bytes, panicking when fewer are available.
    #[inline]
    fn take(&mut self, n: usize) -> &[u8] {
        let x = self.x;
        let bytes = &self.data[..self.end][x..x + n];
        self.x = x + n;
        bytes
    }

    /// Advances the cursor past `length` bytes.
    pub fn skip(&mut self, length: usize) {
        self.take(length);
    }

    /// Reads `size` raw bytes and advances the cursor.
    pub fn buf(&mut self, size: usize) -> &[u8] {
        self.take(size)
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> u8 {
        self.take(1)[0]
    }

    /// Reads a signed 16-bit integer (big-endian).
    #[inline]
    pub fn i16(&mut self) -> i16 {
        let b = self.take(2);
        i16::from_be_bytes([b[0], b[1]])
    }

    /// Reads a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self) -> i32 {
        let b = self.take(4);
        i32::from_be_bytes([b[0], b[1], b[2], b[3]])
    }

    /// Reads an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self) -> u32 {
        let b = self.take(4);
        u32::from_be_bytes([b[0], b[1], b[2], b[3]])
    }

    /// Reads a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self) -> i64 {
        let b = self.take(8);
        i64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
    }

    /// Reads a 32-bit floating point number (big-endian).
    #[inline]
    pub fn f32(&mut self) -> f32 {
        let b = self.take(4);
        f32::from_be_bytes([b[0], b[1], b[2], b[3]])
    }

    /// Reads a 64-bit floating point number (big-endian).
    #[inline]
    pub fn f64(&mut self) -> f64 {
        let b = self.take(8);
        f64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
    }

    // -----------------------------------------------------------------------
    // Bounds-checked variants – return Err(BufferError::EndOfBuffer) instead
    // of panicking, leaving the cursor where it was.
    // -----------------------------------------------------------------------

    /// Checks that `n` more bytes are buffered past the cursor.
    #[inline]
    fn check(&self, n: usize) -> Result<(), BufferError> {
        if self.bytes_left() < n {
            Err(BufferError::EndOfBuffer)
        } else {
            Ok(())
        }
    }

    /// Reads an unsigned 8-bit integer, returning `Err` on underflow.
    #[inline]
    pub fn try_u8(&mut self) -> Result<u8, BufferError> {
        self.check(1)?;
        Ok(self.u8())
    }

    /// Reads a signed 16-bit big-endian integer, returning `Err` on underflow.
    #[inline]
    pub fn try_i16(&mut self) -> Result<i16, BufferError> {
        self.check(2)?;
        Ok(self.i16())
    }

    /// Reads a signed 32-bit big-endian integer, returning `Err` on underflow.
    #[inline]
    pub fn try_i32(&mut self) -> Result<i32, BufferError> {
        self.check(4)?;
        Ok(self.i32())
    }

    /// Reads an unsigned 32-bit big-endian integer, returning `Err` on underflow.
    #[inline]
    pub fn try_u32(&mut self) -> Result<u32, BufferError> {
        self.check(4)?;
        Ok(self.u32())
    }

    /// Reads a signed 64-bit big-endian integer, returning `Err` on underflow.
    #[inline]
    pub fn try_i64(&mut self) -> Result<i64, BufferError> {
        self.check(8)?;
        Ok(self.i64())
    }

    /// Reads a 32-bit big-endian float, returning `Err` on underflow.
    #[inline]
    pub fn try_f32(&mut self) -> Result<f32, BufferError> {
        self.check(4)?;
        Ok(self.f32())
    }

    /// Reads a 64-bit big-endian float, returning `Err` on underflow.
    #[inline]
    pub fn try_f64(&mut self) -> Result<f64, BufferError> {
        self.check(8)?;
        Ok(self.f64())
    }

    /// Reads `size` raw bytes, returning `Err` on underflow.
    pub fn try_buf(&mut self, size: usize) -> Result<&[u8], BufferError> {
        self.check(size)?;
        Ok(self.take(size))
    }
}
