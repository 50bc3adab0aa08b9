//! Variable-length ints with a continuation bit.
//!
//! Values are split into 7-bit groups, least significant group first.  Every
//! byte but the last has its high bit set.  The widest encodings are capped so
//! the final byte can carry a full 8 bits with no continuation bit of its own.
//!
//! ```txt
//! 0bbbbbbb
//! 1bbbbbbb 0bbbbbbb
//! 1bbbbbbb 1bbbbbbb 0bbbbbbb
//! ...
//! 1bbbbbbb x 4 0000bbbb              (i32, 5 bytes max)
//! 1bbbbbbb x 8 bbbbbbbb              (i64, 9 bytes max)
//! ```

use crate::errors::{CodecError, CodecResult};
use crate::mode::Mode;
use crate::types::VarInt;

/// High bit of an encoded byte, set when more bytes follow.
pub const CONTINUATION_BIT: u8 = 0x80;

/// Payload bits carried by a non-final byte.
const GROUP_MASK: u8 = 0x7f;

/// Bits per group.
const GROUP_BITS: u32 = 7;

/// Number of bytes a payload takes, capped at the width's max.
#[inline]
fn payload_len<T: VarInt>(payload: u64) -> usize {
    let bits = (u64::BITS - payload.leading_zeros()) as usize;
    bits.div_ceil(GROUP_BITS as usize).clamp(1, T::MAX_LEN)
}

/// Returns the number of bytes [`encode_at`] would write for a value.
#[inline]
pub fn encoded_len<T: VarInt>(value: T, mode: Mode) -> usize {
    payload_len::<T>(value.to_payload(mode))
}

/// Encodes a value into `buf` starting at `offset`, returning the number of
/// bytes written.
///
/// Checks there's room for the whole value before touching the buffer.
pub fn encode_at<T: VarInt>(
    buf: &mut [u8],
    offset: usize,
    value: T,
    mode: Mode,
) -> CodecResult<usize> {
    let mut payload = value.to_payload(mode);
    let needed = payload_len::<T>(payload);
    let available = buf.len().saturating_sub(offset);
    if needed > available {
        return Err(CodecError::InsufficientCapacity { needed, available });
    }

    // `needed` is at least 1, so the final byte is always in range.
    let last = offset + needed - 1;
    for slot in &mut buf[offset..last] {
        *slot = (payload as u8 & GROUP_MASK) | CONTINUATION_BIT;
        payload >>= GROUP_BITS;
    }

    // Either fits in 7 bits or is the capped final byte, which keeps whatever
    // is left.
    buf[last] = payload as u8;

    Ok(needed)
}

/// Decodes a value from `buf` starting at `offset`, returning it along with
/// the number of bytes consumed.
///
/// Reads at most `T::MAX_LEN` bytes.  The last of those is taken whole and
/// anything past the native width is dropped.
pub fn decode_at<T: VarInt>(buf: &[u8], offset: usize, mode: Mode) -> CodecResult<(T, usize)> {
    let last_shift = GROUP_BITS * (T::MAX_LEN as u32 - 1);

    let mut acc = 0u64;
    let mut at = offset;
    let mut shift = 0;
    while shift < last_shift {
        let b = byte_at(buf, at)?;
        at += 1;

        acc |= u64::from(b & GROUP_MASK) << shift;
        if b & CONTINUATION_BIT == 0 {
            return Ok((T::from_payload(acc, mode), at - offset));
        }

        shift += GROUP_BITS;
    }

    let b = byte_at(buf, at)?;
    acc |= u64::from(b) << last_shift;
    Ok((T::from_payload(acc, mode), T::MAX_LEN))
}

fn byte_at(buf: &[u8], at: usize) -> CodecResult<u8> {
    buf.get(at).copied().ok_or(CodecError::Truncated {
        offset: at,
        needed: 1,
    })
}

/// Checks if a whole encoded value is present in `buf` from `offset`.
///
/// Only the bytes after `offset` count as available.  Once `T::MAX_LEN` of
/// them are there the answer is always yes, since no encoding is longer.
/// An `offset` past the end has nothing available.
pub fn can_read_at<T: VarInt>(buf: &[u8], offset: usize) -> bool {
    let rest = buf.get(offset..).unwrap_or_default();
    if rest.len() >= T::MAX_LEN {
        return true;
    }

    rest.iter().any(|b| b & CONTINUATION_BIT == 0)
}

/// Returns the length of the encoded value at `offset`, or `None` if it isn't
/// all there yet.
pub fn peek_len<T: VarInt>(buf: &[u8], offset: usize) -> Option<usize> {
    let rest = buf.get(offset..)?;
    let window = &rest[..rest.len().min(T::MAX_LEN)];

    match window.iter().position(|b| b & CONTINUATION_BIT == 0) {
        Some(i) => Some(i + 1),
        None if window.len() == T::MAX_LEN => Some(T::MAX_LEN),
        None => None,
    }
}

/// Generates the width-specific entry points.
macro_rules! impl_width_fns {
    {
        $ity:ident:
        $len:ident,
        $enc:ident,
        $enc_at:ident,
        $dec:ident,
        $dec_at:ident,
        $can:ident,
        $can_at:ident,
        $peek:ident
    } => {
        #[doc = concat!("Returns the number of bytes an `", stringify!($ity), "` encodes to.")]
        #[inline]
        pub fn $len(value: $ity, mode: Mode) -> usize {
            encoded_len(value, mode)
        }

        #[doc = concat!("Encodes an `", stringify!($ity), "` at the start of `buf`.")]
        pub fn $enc(buf: &mut [u8], value: $ity, mode: Mode) -> CodecResult<usize> {
            encode_at(buf, 0, value, mode)
        }

        #[doc = concat!("Encodes an `", stringify!($ity), "` into `buf` at `offset`.")]
        pub fn $enc_at(buf: &mut [u8], offset: usize, value: $ity, mode: Mode) -> CodecResult<usize> {
            encode_at(buf, offset, value, mode)
        }

        #[doc = concat!("Decodes an `", stringify!($ity), "` from the start of `buf`.")]
        pub fn $dec(buf: &[u8], mode: Mode) -> CodecResult<($ity, usize)> {
            decode_at(buf, 0, mode)
        }

        #[doc = concat!("Decodes an `", stringify!($ity), "` from `buf` at `offset`.")]
        pub fn $dec_at(buf: &[u8], offset: usize, mode: Mode) -> CodecResult<($ity, usize)> {
            decode_at(buf, offset, mode)
        }

        #[doc = concat!("Checks if a whole `", stringify!($ity), "` is at the start of `buf`.")]
        pub fn $can(buf: &[u8]) -> bool {
            can_read_at::<$ity>(buf, 0)
        }

        #[doc = concat!("Checks if a whole `", stringify!($ity), "` is in `buf` at `offset`.")]
        pub fn $can_at(buf: &[u8], offset: usize) -> bool {
            can_read_at::<$ity>(buf, offset)
        }

        #[doc = concat!("Length of the complete `", stringify!($ity), "` at `offset`, if any.")]
        pub fn $peek(buf: &[u8], offset: usize) -> Option<usize> {
            peek_len::<$ity>(buf, offset)
        }
    };
}

impl_width_fns! {
    i32:
    len_i32,
    encode_i32,
    encode_i32_at,
    decode_i32,
    decode_i32_at,
    can_read_i32,
    can_read_i32_at,
    peek_len_i32
}

impl_width_fns! {
    i64:
    len_i64,
    encode_i64,
    encode_i64_at,
    decode_i64,
    decode_i64_at,
    can_read_i64,
    can_read_i64_at,
    peek_len_i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MAX_LEN_I32, MAX_LEN_I64};

    const OP: Mode = Mode::OptimizePositive;
    const ZZ: Mode = Mode::ZigZag;

    fn enc32(v: i32, mode: Mode) -> Vec<u8> {
        let mut buf = [0u8; MAX_LEN_I32];
        let n = encode_i32(&mut buf, v, mode).unwrap();
        buf[..n].to_vec()
    }

    fn enc64(v: i64, mode: Mode) -> Vec<u8> {
        let mut buf = [0u8; MAX_LEN_I64];
        let n = encode_i64(&mut buf, v, mode).unwrap();
        buf[..n].to_vec()
    }

    #[test]
    fn test_i32_thresholds_optimize_positive() {
        let cases = [
            (0, 1),
            (127, 1),
            (128, 2),
            (16383, 2),
            (16384, 3),
            (2097151, 3),
            (2097152, 4),
            (268435455, 4),
            (268435456, 5),
            (i32::MAX, 5),
            (-1, 5),
            (i32::MIN, 5),
        ];

        for (v, expected) in cases {
            assert_eq!(enc32(v, OP).len(), expected, "encode {v}");
            assert_eq!(len_i32(v, OP), expected, "len {v}");
        }
    }

    #[test]
    fn test_i32_thresholds_zigzag() {
        let cases = [(0, 1), (-1, 1), (1, 1), (-64, 1), (63, 1), (64, 2), (-65, 2)];

        for (v, expected) in cases {
            assert_eq!(enc32(v, ZZ).len(), expected, "encode {v}");
            assert_eq!(len_i32(v, ZZ), expected, "len {v}");
        }
    }

    #[test]
    fn test_i64_thresholds_optimize_positive() {
        let mut cases = vec![(0i64, 1usize), (-1, 9), (i64::MIN, 9), (i64::MAX, 9)];
        for n in 1..=8u32 {
            let boundary = 1i64 << (7 * n);
            cases.push((boundary - 1, n as usize));
            cases.push((boundary, n as usize + 1));
        }

        for (v, expected) in cases {
            assert_eq!(enc64(v, OP).len(), expected, "encode {v}");
            assert_eq!(len_i64(v, OP), expected, "len {v}");
        }
    }

    #[test]
    fn test_known_bytes() {
        assert_eq!(enc32(0, OP), [0x00]);
        assert_eq!(enc32(1, OP), [0x01]);
        assert_eq!(enc32(300, OP), [0xac, 0x02]);
        assert_eq!(enc32(-1, OP), [0xff, 0xff, 0xff, 0xff, 0x0f]);
        assert_eq!(enc32(-1, ZZ), [0x01]);
        assert_eq!(enc32(1, ZZ), [0x02]);
        assert_eq!(enc32(i32::MIN, ZZ), [0xff, 0xff, 0xff, 0xff, 0x0f]);
        assert_eq!(enc64(-1, OP), [0xff; 9]);
        assert_eq!(
            enc64(i64::MIN, OP),
            [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80]
        );
    }

    #[test]
    fn test_i64_max_bit_pattern() {
        let bytes = enc64(-1, OP);
        assert_eq!(bytes.len(), 9);

        let (v, n) = decode_i64(&bytes, OP).unwrap();
        assert_eq!(n, 9);
        assert_eq!(v as u64, u64::MAX);
    }

    #[test]
    fn test_decode_roundtrip_edges() {
        for v in [0, 1, -1, 63, -64, 64, 300, i32::MAX, i32::MIN] {
            for mode in [OP, ZZ] {
                let bytes = enc32(v, mode);
                assert_eq!(decode_i32(&bytes, mode).unwrap(), (v, bytes.len()));
            }
        }

        for v in [0, 1, -1, i64::from(i32::MAX) + 1, i64::MAX, i64::MIN] {
            for mode in [OP, ZZ] {
                let bytes = enc64(v, mode);
                assert_eq!(decode_i64(&bytes, mode).unwrap(), (v, bytes.len()));
            }
        }
    }

    #[test]
    fn test_decode_i32_fifth_byte_truncates() {
        // Continuation bit and high nibble on the 5th byte are ignored.
        let bytes = [0x81, 0x80, 0x80, 0x80, 0xf0];
        assert_eq!(decode_i32(&bytes, OP).unwrap(), (1, 5));

        // Never reads a 6th byte.
        let bytes = [0xff, 0xff, 0xff, 0xff, 0xff, 0x01];
        assert_eq!(decode_i32(&bytes, OP).unwrap(), (-1, 5));
    }

    #[test]
    fn test_decode_i64_ninth_byte_is_whole() {
        let bytes = [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xab];
        assert_eq!(decode_i64(&bytes, OP).unwrap(), ((0xab_u64 << 56) as i64, 9));
    }

    #[test]
    fn test_encode_decode_at_offset() {
        let mut buf = [0xeeu8; 16];
        let n = encode_i32_at(&mut buf, 3, 300, OP).unwrap();
        assert_eq!(n, 2);
        assert_eq!(&buf[..6], &[0xee, 0xee, 0xee, 0xac, 0x02, 0xee]);
        assert_eq!(decode_i32_at(&buf, 3, OP).unwrap(), (300, 2));

        let n = encode_i64_at(&mut buf, 7, -2, ZZ).unwrap();
        assert_eq!(n, 1);
        assert_eq!(decode_i64_at(&buf, 7, ZZ).unwrap(), (-2, 1));
    }

    #[test]
    fn test_encode_insufficient_capacity() {
        let mut buf = [0xeeu8; 4];
        let err = encode_i32(&mut buf, -1, OP).unwrap_err();
        assert_eq!(
            err,
            CodecError::InsufficientCapacity {
                needed: 5,
                available: 4
            }
        );
        assert_eq!(buf, [0xee; 4], "nothing should be written");

        let err = encode_i64_at(&mut buf, 4, 0, OP).unwrap_err();
        assert_eq!(
            err,
            CodecError::InsufficientCapacity {
                needed: 1,
                available: 0
            }
        );

        let err = encode_i64_at(&mut buf, 10, 0, OP).unwrap_err();
        assert_eq!(
            err,
            CodecError::InsufficientCapacity {
                needed: 1,
                available: 0
            }
        );
    }

    #[test]
    fn test_encode_single_byte_slots() {
        // One-byte values land exactly at the offset and touch nothing else.
        let mut buf = [0xeeu8; 3];
        assert_eq!(encode_i32_at(&mut buf, 2, 1, ZZ).unwrap(), 1);
        assert_eq!(buf, [0xee, 0xee, 0x02]);

        let mut buf = [0xeeu8; 1];
        assert_eq!(encode_i64(&mut buf, 0, OP).unwrap(), 1);
        assert_eq!(buf, [0x00]);

        // Max length ends flush with the buffer.
        let mut buf = [0u8; 10];
        assert_eq!(encode_i64_at(&mut buf, 1, -1, OP).unwrap(), 9);
        assert_eq!(buf, [0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_encode_exact_capacity() {
        let mut buf = [0u8; 2];
        assert_eq!(encode_i32(&mut buf, 128, OP).unwrap(), 2);
        assert_eq!(buf, [0x80, 0x01]);
    }

    #[test]
    fn test_decode_truncated() {
        assert_eq!(
            decode_i32(&[], OP).unwrap_err(),
            CodecError::Truncated {
                offset: 0,
                needed: 1
            }
        );
        assert_eq!(
            decode_i32(&[0x80, 0x80], OP).unwrap_err(),
            CodecError::Truncated {
                offset: 2,
                needed: 1
            }
        );
        assert_eq!(
            decode_i64_at(&[0x00], 5, ZZ).unwrap_err(),
            CodecError::Truncated {
                offset: 5,
                needed: 1
            }
        );
        assert!(decode_i64(&[0xff; 8], OP).is_err());
    }

    #[test]
    fn test_can_read_i32() {
        assert!(!can_read_i32(&[]));
        assert!(can_read_i32(&[0x00]));
        assert!(!can_read_i32(&[0x80]));
        assert!(can_read_i32(&[0x80, 0x01]));
        assert!(!can_read_i32(&[0x80, 0x80, 0x80, 0x80]));

        // Fast path doesn't look at the contents.
        assert!(can_read_i32(&[0xff; 5]));
    }

    #[test]
    fn test_can_read_i64() {
        assert!(!can_read_i64(&[0x80; 8]));
        assert!(can_read_i64(&[0x80; 9]));
        assert!(can_read_i64(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x7f]));
    }

    #[test]
    fn test_can_read_counts_from_offset() {
        // Plenty of total length, but only one continuation byte after the
        // offset.
        let buf = [0x00, 0x00, 0x00, 0x00, 0x00, 0x80];
        assert!(!can_read_i32_at(&buf, 5));
        assert!(!can_read_i64_at(&buf, 5));
        assert!(can_read_i32_at(&buf, 4));
        assert!(!can_read_i32_at(&buf, 6));
        assert!(!can_read_i32_at(&buf, 100));
    }

    #[test]
    fn test_peek_len() {
        assert_eq!(peek_len_i32(&[], 0), None);
        assert_eq!(peek_len_i32(&[0x05, 0xff], 0), Some(1));
        assert_eq!(peek_len_i32(&[0x05, 0xac, 0x02], 1), Some(2));
        assert_eq!(peek_len_i32(&[0x80, 0x80], 0), None);
        assert_eq!(peek_len_i32(&[0xff; 7], 0), Some(5));
        assert_eq!(peek_len_i64(&[0xff; 7], 0), None);
        assert_eq!(peek_len_i64(&[0xff; 9], 0), Some(9));
        assert_eq!(peek_len_i64(&[0x00], 2), None);
    }
}
