//! High-level util functions.

use crate::errors::{CodecError, CodecResult};
use crate::mode::Mode;
use crate::types::VarInt;
use crate::varint::decode_at;

/// Decodes a value that must span the whole buffer, throwing an error if
/// there's leftover bytes.
pub fn decode_exact<T: VarInt>(buf: &[u8], mode: Mode) -> CodecResult<T> {
    let (v, consumed) = decode_at(buf, 0, mode)?;
    if consumed < buf.len() {
        return Err(CodecError::ExtraInput);
    }
    Ok(v)
}
