use crate::mode::Mode;
use crate::zigzag;

/// Max encoded length of an `i32`.
pub const MAX_LEN_I32: usize = 5;

/// Max encoded length of an `i64`.
pub const MAX_LEN_I64: usize = 9;

#[allow(unreachable_pub)]
mod sealed {
    pub trait Sealed {}
}

/// Signed int width that can be varint-coded.
///
/// Implemented for `i32` and `i64` only.  The payload is carried around as a
/// `u64` regardless of width so the encoder and decoder only exist once.
pub trait VarInt: Copy + sealed::Sealed {
    /// Max number of bytes one value can take on the wire.  The last of these
    /// bytes never has a continuation bit and contributes all 8 of its bits.
    const MAX_LEN: usize;

    /// Maps the value onto its unsigned payload under a mode.
    fn to_payload(self, mode: Mode) -> u64;

    /// Maps a payload back to a value, truncating it to the native width
    /// first.
    fn from_payload(payload: u64, mode: Mode) -> Self;
}

/// Wires up a width, mirroring the fixed-size int codec impls.
macro_rules! impl_varint {
    ( $ity:ident $uty:ident $max_len:ident $zz_enc:path, $zz_dec:path ) => {
        impl sealed::Sealed for $ity {}

        impl VarInt for $ity {
            const MAX_LEN: usize = $max_len;

            #[inline]
            fn to_payload(self, mode: Mode) -> u64 {
                let raw = match mode {
                    Mode::OptimizePositive => self as $uty,
                    Mode::ZigZag => $zz_enc(self),
                };
                raw as u64
            }

            #[inline]
            fn from_payload(payload: u64, mode: Mode) -> Self {
                let raw = payload as $uty;
                match mode {
                    Mode::OptimizePositive => raw as $ity,
                    Mode::ZigZag => $zz_dec(raw),
                }
            }
        }
    };
}

impl_varint!(i32 u32 MAX_LEN_I32 zigzag::encode_i32, zigzag::decode_i32);
impl_varint!(i64 u64 MAX_LEN_I64 zigzag::encode_i64, zigzag::decode_i64);
