use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Serialize};

use crate::Mode;

impl Serialize for Mode {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.serialize_str(self.as_str())
        } else {
            s.serialize_bool(self.is_optimize_positive())
        }
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        if d.is_human_readable() {
            struct StrVisitor;

            impl de::Visitor<'_> for StrVisitor {
                type Value = Mode;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "\"{}\" or \"{}\"", crate::OPTIMIZE_POSITIVE_STR, crate::ZIGZAG_STR)
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<Mode, E> {
                    Mode::from_str(v).map_err(E::custom)
                }
            }

            d.deserialize_str(StrVisitor)
        } else {
            bool::deserialize(d).map(Mode::from_optimize_positive)
        }
    }
}
