use std::fmt;
use std::str;

use crate::errors::CodecError;

/// String form of [`Mode::OptimizePositive`].
pub const OPTIMIZE_POSITIVE_STR: &str = "optimize-positive";

/// String form of [`Mode::ZigZag`].
pub const ZIGZAG_STR: &str = "zigzag";

/// How a signed value is mapped onto the unsigned payload before it's split
/// into 7-bit groups.
///
/// The mode is never written to the wire.  Whoever decodes a value has to use
/// the same mode the encoder did.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Raw bit pattern.  Small non-negative values take 1 byte, anything
    /// negative takes the max length.
    OptimizePositive,

    /// Zig-zag mapping.  Small magnitudes of either sign are cheap.
    #[default]
    ZigZag,
}

impl Mode {
    /// Constructs from the `optimize_positive` flag.
    pub const fn from_optimize_positive(optimize_positive: bool) -> Self {
        if optimize_positive {
            Self::OptimizePositive
        } else {
            Self::ZigZag
        }
    }

    /// Returns if this is [`Mode::OptimizePositive`].
    pub const fn is_optimize_positive(&self) -> bool {
        matches!(self, Self::OptimizePositive)
    }

    /// Returns the canonical string name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OptimizePositive => OPTIMIZE_POSITIVE_STR,
            Self::ZigZag => ZIGZAG_STR,
        }
    }
}

impl From<bool> for Mode {
    fn from(optimize_positive: bool) -> Self {
        Self::from_optimize_positive(optimize_positive)
    }
}

impl From<Mode> for bool {
    fn from(mode: Mode) -> Self {
        mode.is_optimize_positive()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for Mode {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(OPTIMIZE_POSITIVE_STR) {
            Ok(Self::OptimizePositive)
        } else if s.eq_ignore_ascii_case(ZIGZAG_STR) {
            Ok(Self::ZigZag)
        } else {
            Err(CodecError::InvalidMode(s.to_owned()))
        }
    }
}
