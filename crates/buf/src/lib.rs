//! Cursor helpers for reading and writing optint varints at a moving position
//! in caller-owned buffers.
//!
//! These don't own, grow or pool storage.  A reader wraps whatever bytes
//! have arrived so far and a writer fills a slice it was handed.
//!
//! ```rust
//! use optint_buf::{Mode, SliceReader, SliceWriter};
//!
//! let mut storage = [0u8; 32];
//! let mut w = SliceWriter::new(&mut storage);
//! w.write_i32(-7, Mode::ZigZag)?;
//! w.write_i64s(&[1, 1 << 40], Mode::OptimizePositive)?;
//! let filled = w.position();
//!
//! let mut r = SliceReader::new(&storage[..filled]);
//! assert_eq!(r.read_i32(Mode::ZigZag)?, -7);
//! assert_eq!(r.read_i64s(2, Mode::OptimizePositive)?, vec![1, 1 << 40]);
//! assert!(!r.can_read_i64());
//! # Ok::<(), optint_buf::CodecError>(())
//! ```

mod reader;
mod writer;

pub use optint_codec::{CodecError, CodecResult, Mode, VarInt};
pub use reader::SliceReader;
pub use writer::SliceWriter;

#[cfg(test)]
use proptest as _;
