//! Sequential reader over a flat buffer.

use optint_codec::{CodecError, CodecResult, Mode, VarInt, can_read_at, decode_at, peek_len};
use tracing::*;

/// Reader for an arbitrary [`AsRef`] on a byte slice that tracks a read
/// position.
///
/// The buffer should only contain bytes that have actually arrived, so the
/// lookahead checks know where the data stops.
#[derive(Debug)]
pub struct SliceReader<B> {
    buf: B,
    at: usize,
}

impl<B: AsRef<[u8]>> SliceReader<B> {
    /// Constructs a new instance by wrapping a buffer and starting at the
    /// beginning.
    pub fn new(buf: B) -> Self {
        Self { buf, at: 0 }
    }

    /// Returns the length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.buf.as_ref().len()
    }

    /// Returns if the underlying buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.as_ref().is_empty()
    }

    /// Returns the current read position.
    pub fn position(&self) -> usize {
        self.at
    }

    /// Moves the read position, clamped to the end of the buffer.
    pub fn set_position(&mut self, at: usize) {
        self.at = at.min(self.len());
    }

    /// Returns the total number of remaining bytes that can be read.
    pub fn remaining(&self) -> usize {
        self.len() - self.at
    }

    /// Skips over some bytes.
    pub fn skip(&mut self, count: usize) -> CodecResult<()> {
        if count > self.remaining() {
            return Err(CodecError::Truncated {
                offset: self.len(),
                needed: count - self.remaining(),
            });
        }

        self.at += count;
        Ok(())
    }

    /// Takes out the inner buffer.
    pub fn into_inner(self) -> B {
        self.buf
    }

    /// Checks if a whole value of width `T` is available from the current
    /// position.  Doesn't move the position.
    pub fn can_read<T: VarInt>(&self) -> bool {
        can_read_at::<T>(self.buf.as_ref(), self.at)
    }

    /// Checks if a whole `i32` is available.
    pub fn can_read_i32(&self) -> bool {
        self.can_read::<i32>()
    }

    /// Checks if a whole `i64` is available.
    pub fn can_read_i64(&self) -> bool {
        self.can_read::<i64>()
    }

    /// Returns the length of the next value if it's all there.
    pub fn peek_len<T: VarInt>(&self) -> Option<usize> {
        peek_len::<T>(self.buf.as_ref(), self.at)
    }

    /// Reads a value, advancing past it.  On error the position is left
    /// where it was.
    pub fn read<T: VarInt>(&mut self, mode: Mode) -> CodecResult<T> {
        match decode_at::<T>(self.buf.as_ref(), self.at, mode) {
            Ok((v, n)) => {
                self.at += n;
                Ok(v)
            }
            Err(e) => {
                debug!(at = self.at, remaining = self.remaining(), "incomplete varint");
                Err(e)
            }
        }
    }

    /// Reads an `i32`.
    pub fn read_i32(&mut self, mode: Mode) -> CodecResult<i32> {
        self.read(mode)
    }

    /// Reads an `i64`.
    pub fn read_i64(&mut self, mode: Mode) -> CodecResult<i64> {
        self.read(mode)
    }

    /// Reads `count` values in a row.  Either all of them are read or the
    /// position is restored.
    pub fn read_many<T: VarInt>(&mut self, count: usize, mode: Mode) -> CodecResult<Vec<T>> {
        trace!(count, at = self.at, "reading varint run");

        let start = self.at;
        // Every value takes at least a byte, don't trust `count` further than
        // that.
        let mut out = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            match self.read(mode) {
                Ok(v) => out.push(v),
                Err(e) => {
                    self.at = start;
                    return Err(e);
                }
            }
        }

        Ok(out)
    }

    /// Reads `count` `i32`s.
    pub fn read_i32s(&mut self, count: usize, mode: Mode) -> CodecResult<Vec<i32>> {
        self.read_many(count, mode)
    }

    /// Reads `count` `i64`s.
    pub fn read_i64s(&mut self, count: usize, mode: Mode) -> CodecResult<Vec<i64>> {
        self.read_many(count, mode)
    }

    /// Reads an `f32` that was written as an `i32` scaled by `precision`.
    pub fn read_f32_scaled(&mut self, precision: f32, mode: Mode) -> CodecResult<f32> {
        Ok(self.read_i32(mode)? as f32 / precision)
    }

    /// Reads an `f64` that was written as an `i64` scaled by `precision`.
    pub fn read_f64_scaled(&mut self, precision: f64, mode: Mode) -> CodecResult<f64> {
        Ok(self.read_i64(mode)? as f64 / precision)
    }
}
