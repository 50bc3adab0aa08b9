use thiserror::Error;

/// Errors from optint-codec.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CodecError {
    /// If the destination didn't have room for the whole encoded value.  Nothing
    /// is written when this is returned.
    #[error("insufficient capacity (need {needed} bytes, have {available})")]
    InsufficientCapacity {
        /// Bytes the encoding would take.
        needed: usize,

        /// Bytes available from the write offset.
        available: usize,
    },

    /// If the input ended while the continuation bit said more bytes follow.
    #[error("truncated input at offset {offset} (need {needed} more bytes)")]
    Truncated {
        /// Position of the first missing byte.
        offset: usize,

        /// Minimum number of additional bytes required.
        needed: usize,
    },

    /// If there was extra data in a buffer than we didn't consume reading a
    /// value.
    #[error("extra unnecessary input leftover")]
    ExtraInput,

    /// If a mode string wasn't one we recognize.
    #[error("invalid mode {0:?}")]
    InvalidMode(String),
}

/// Wrapper result type.
pub type CodecResult<T> = Result<T, CodecError>;
