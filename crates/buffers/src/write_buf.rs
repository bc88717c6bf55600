//! Fixed-capacity write buffer with incremental drain.

use crate::BufferError;

/// A fixed-capacity buffer collecting outgoing wire bytes.
///
/// Big-endian writers advance an internal cursor until the capacity is
/// spent; [`flush`](WriteBuf::flush) hands the written bytes to the caller
/// and frees the full capacity again. The buffer never grows. The unchecked
/// writers expect callers to have verified [`space_left`](WriteBuf::space_left)
/// first and panic when writing past the capacity; the `try_*` variants
/// return an error instead and write nothing.
///
/// # Example
///
/// ```
/// use pgeo_buffers::WriteBuf;
///
/// let mut buf = WriteBuf::with_capacity(8);
/// buf.i32(3);
/// assert_eq!(buf.space_left(), 4);
/// assert_eq!(buf.flush(), [0x00, 0x00, 0x00, 0x03]);
/// assert_eq!(buf.space_left(), 8);
/// ```
pub struct WriteBuf {
    /// Backing storage; its length is the buffer capacity.
    data: Vec<u8>,
    /// Write cursor.
    x: usize,
}

impl WriteBuf {
    /// Creates an empty buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity],
            x: 0,
        }
    }

    /// Returns the total capacity of the buffer.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the remaining writable space in bytes.
    pub fn space_left(&self) -> usize {
        self.data.len() - self.x
    }

    /// Returns a view of the bytes written since the last flush.
    pub fn written(&self) -> &[u8] {
        &self.data[..self.x]
    }

    /// Takes the written bytes and resets the cursor, freeing the full
    /// capacity for subsequent writes.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.data[..self.x].to_vec();
        self.x = 0;
        result
    }

    /// Copies `bytes` at the cursor, panicking when they do not fit.
    #[inline]
    fn put(&mut self, bytes: &[u8]) {
        let x = self.x;
        self.data[x..x + bytes.len()].copy_from_slice(bytes);
        self.x = x + bytes.len();
    }

    /// Writes a byte slice.
    pub fn bytes(&mut self, buf: &[u8]) {
        self.put(buf);
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.put(&[val]);
    }

    /// Writes a signed 16-bit integer (big-endian).
    #[inline]
    pub fn i16(&mut self, val: i16) {
        self.put(&val.to_be_bytes());
    }

    /// Writes a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self, val: i32) {
        self.put(&val.to_be_bytes());
    }

    /// Writes an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.put(&val.to_be_bytes());
    }

    /// Writes a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self, val: i64) {
        self.put(&val.to_be_bytes());
    }

    /// Writes a 32-bit floating point number (big-endian).
    #[inline]
    pub fn f32(&mut self, val: f32) {
        self.put(&val.to_be_bytes());
    }

    /// Writes a 64-bit floating point number (big-endian).
    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.put(&val.to_be_bytes());
    }

    // -----------------------------------------------------------------------
    // Bounds-checked variants – return Err(BufferError::OutOfSpace) instead
    // of panicking, writing nothing.
    // -----------------------------------------------------------------------

    /// Checks that `n` more bytes fit past the cursor.
    #[inline]
    fn check(&self, n: usize) -> Result<(), BufferError> {
        if self.space_left() < n {
            Err(BufferError::OutOfSpace)
        } else {
            Ok(())
        }
    }

    /// Writes an unsigned 8-bit integer, returning `Err` when it does not fit.
    #[inline]
    pub fn try_u8(&mut self, val: u8) -> Result<(), BufferError> {
        self.check(1)?;
        self.u8(val);
        Ok(())
    }

    /// Writes a signed 16-bit big-endian integer, returning `Err` when it
    /// does not fit.
    #[inline]
    pub fn try_i16(&mut self, val: i16) -> Result<(), BufferError> {
        self.check(2)?;
        self.i16(val);
        Ok(())
    }

    /// Writes a signed 32-bit big-endian integer, returning `Err` when it
    /// does not fit.
    #[inline]
    pub fn try_i32(&mut self, val: i32) -> Result<(), BufferError> {
        self.check(4)?;
        self.i32(val);
        Ok(())
    }

    /// Writes an unsigned 32-bit big-endian integer, returning `Err` when it
    /// does not fit.
    #[inline]
    pub fn try_u32(&mut self, val: u32) -> Result<(), BufferError> {
        self.check(4)?;
        self.u32(val);
        Ok(())
    }

    /// Writes a signed 64-bit big-endian integer, returning `Err` when it
    /// does not fit.
    #[inline]
    pub fn try_i64(&mut self, val: i64) -> Result<(), BufferError> {
        self.check(8)?;
        self.i64(val);
        Ok(())
    }

    /// Writes a 32-bit big-endian float, returning `Err` when it does not fit.
    #[inline]
    pub fn try_f32(&mut self, val: f32) -> Result<(), BufferError> {
        self.check(4)?;
        self.f32(val);
        Ok(())
    }

    /// Writes a 64-bit big-endian float, returning `Err` when it does not fit.
    #[inline]
    pub fn try_f64(&mut self, val: f64) -> Result<(), BufferError> {
        self.check(8)?;
        self.f64(val);
        Ok(())
    }

    /// Writes a byte slice, returning `Err` when it does not fit.
    pub fn try_bytes(&mut self, buf: &[u8]) -> Result<(), BufferError> {
        self.check(buf.len())?;
        self.put(buf);
        Ok(())
    }
}
