//! Compact variable-length encoding for `i32` and `i64`.
//!
//! Each value is written as 7-bit groups with a continuation bit, 1 to 5
//! bytes for `i32` and 1 to 9 bytes for `i64`.  A [`Mode`] picks whether the
//! raw bit pattern is encoded (cheap for small non-negative values) or its
//! zig-zag mapping (cheap for small values of either sign).  The mode is not
//! recorded on the wire.
//!
//! The lookahead functions ([`can_read_i32_at`], [`peek_len_i32`] and their
//! `i64` counterparts) let a streaming reader check whether a whole value has
//! arrived before decoding it.
//!
//! ```rust
//! use optint_codec::{Mode, can_read_i32, decode_i32, encode_i32};
//!
//! let mut buf = [0u8; 5];
//! let n = encode_i32(&mut buf, -3, Mode::ZigZag)?;
//! assert_eq!(n, 1);
//! assert!(can_read_i32(&buf[..n]));
//! assert_eq!(decode_i32(&buf[..n], Mode::ZigZag)?, (-3, 1));
//! # Ok::<(), optint_codec::CodecError>(())
//! ```

#[cfg(feature = "arbitrary")]
mod arbitrary;
mod errors;
mod mode;
#[cfg(feature = "serde")]
mod serde;
mod types;
mod util;
mod varint;
pub mod zigzag;

pub use errors::{CodecError, CodecResult};
pub use mode::{Mode, OPTIMIZE_POSITIVE_STR, ZIGZAG_STR};
pub use types::{MAX_LEN_I32, MAX_LEN_I64, VarInt};
pub use util::decode_exact;
pub use varint::{
    CONTINUATION_BIT, can_read_at, can_read_i32, can_read_i32_at, can_read_i64, can_read_i64_at,
    decode_at, decode_i32, decode_i32_at, decode_i64, decode_i64_at, encode_at, encode_i32,
    encode_i32_at, encode_i64, encode_i64_at, encoded_len, len_i32, len_i64, peek_len,
    peek_len_i32, peek_len_i64,
};

// Dev-dependencies only some test targets use.
#[cfg(test)]
use {bincode as _, criterion as _, proptest as _, serde_json as _};
