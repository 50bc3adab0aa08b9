//! Zig-zag mapping between signed and unsigned ints.
//!
//! ```txt
//!  0 -> 0, -1 -> 1, 1 -> 2, -2 -> 3, 2 -> 4, ...
//! ```

/// Maps an `i32` onto a `u32` so small magnitudes stay small.
#[inline]
pub const fn encode_i32(v: i32) -> u32 {
    ((v << 1) ^ (v >> 31)) as u32
}

/// Inverse of [`encode_i32`].
#[inline]
pub const fn decode_i32(v: u32) -> i32 {
    ((v >> 1) as i32) ^ -((v & 1) as i32)
}

/// Maps an `i64` onto a `u64` so small magnitudes stay small.
#[inline]
pub const fn encode_i64(v: i64) -> u64 {
    ((v << 1) ^ (v >> 63)) as u64
}

/// Inverse of [`encode_i64`].
#[inline]
pub const fn decode_i64(v: u64) -> i64 {
    ((v >> 1) as i64) ^ -((v & 1) as i64)
}
