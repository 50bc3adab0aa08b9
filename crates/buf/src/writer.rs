//! Sequential writer into a caller-owned slice.

use optint_codec::{CodecError, CodecResult, Mode, VarInt, encode_at, encoded_len};
use tracing::*;

/// Writer that fills a fixed slice from the front.  It never grows the
/// storage, running out of room is an error.
#[derive(Debug)]
pub struct SliceWriter<'b> {
    buf: &'b mut [u8],
    at: usize,
}

impl<'b> SliceWriter<'b> {
    /// Constructs a new instance writing from the start of `buf`.
    pub fn new(buf: &'b mut [u8]) -> Self {
        Self { buf, at: 0 }
    }

    /// Returns the current write position, which is also how many bytes have
    /// been written.
    pub fn position(&self) -> usize {
        self.at
    }

    /// Returns how many more bytes fit.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.at
    }

    /// Returns the bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.at]
    }

    /// Consumes the writer, returning the written prefix of the slice.
    pub fn into_written(self) -> &'b [u8] {
        let Self { buf, at } = self;
        &buf[..at]
    }

    /// Writes a value, returning how many bytes it took.  If it doesn't fit
    /// nothing is written.
    pub fn write<T: VarInt>(&mut self, value: T, mode: Mode) -> CodecResult<usize> {
        match encode_at(self.buf, self.at, value, mode) {
            Ok(n) => {
                self.at += n;
                Ok(n)
            }
            Err(e) => {
                debug!(at = self.at, remaining = self.remaining(), "varint doesn't fit");
                Err(e)
            }
        }
    }

    /// Writes an `i32`.
    pub fn write_i32(&mut self, value: i32, mode: Mode) -> CodecResult<usize> {
        self.write(value, mode)
    }

    /// Writes an `i64`.
    pub fn write_i64(&mut self, value: i64, mode: Mode) -> CodecResult<usize> {
        self.write(value, mode)
    }

    /// Writes a run of values.  The total size is checked up front so either
    /// all of them are written or none are.
    pub fn write_many<T: VarInt>(&mut self, values: &[T], mode: Mode) -> CodecResult<usize> {
        trace!(count = values.len(), at = self.at, "writing varint run");

        let needed: usize = values.iter().map(|v| encoded_len(*v, mode)).sum();
        let available = self.remaining();
        if needed > available {
            debug!(at = self.at, needed, available, "varint run doesn't fit");
            return Err(CodecError::InsufficientCapacity { needed, available });
        }

        for v in values {
            self.at += encode_at(self.buf, self.at, *v, mode)?;
        }

        Ok(needed)
    }

    /// Writes a run of `i32`s.
    pub fn write_i32s(&mut self, values: &[i32], mode: Mode) -> CodecResult<usize> {
        self.write_many(values, mode)
    }

    /// Writes a run of `i64`s.
    pub fn write_i64s(&mut self, values: &[i64], mode: Mode) -> CodecResult<usize> {
        self.write_many(values, mode)
    }

    /// Writes an `f32` as an `i32` after multiplying by `precision`.
    ///
    /// The product is truncated toward zero and saturates at the `i32`
    /// bounds.  NaN is written as 0.
    pub fn write_f32_scaled(&mut self, value: f32, precision: f32, mode: Mode) -> CodecResult<usize> {
        self.write_i32((value * precision) as i32, mode)
    }

    /// Writes an `f64` as an `i64` after multiplying by `precision`, with the
    /// same truncation as [`Self::write_f32_scaled`].
    pub fn write_f64_scaled(&mut self, value: f64, precision: f64, mode: Mode) -> CodecResult<usize> {
        self.write_i64((value * precision) as i64, mode)
    }
}
