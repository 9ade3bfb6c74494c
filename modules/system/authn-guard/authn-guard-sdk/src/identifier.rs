//! Normalized identity value.
//!
//! Identifiers travel through signed claim payloads that only carry JSON
//! scalars, so every conversion here is total: a failed conversion degrades
//! to `0` (integer view) instead of raising an error.

use std::fmt;
use std::num::TryFromIntError;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque identity value wrapping either an integer or a string.
///
/// The kind is fixed at construction. Integer widths up to 64 bits are
/// normalized to `i64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    /// Numeric identifier.
    Integer(i64),
    /// Textual identifier.
    Text(String),
}

impl Identifier {
    /// Build an identifier from a decoded claim value.
    ///
    /// Integers and strings map directly. Floats are accepted only when they
    /// carry an exact integer inside the `i64` range. Every other JSON value
    /// is rejected.
    #[must_use]
    pub fn from_claim(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(integral_f64))
                .map(Self::Integer),
            Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }

    /// Integer view of the identifier.
    ///
    /// Text identifiers are parsed as base-10; unparsable text yields `0`.
    #[must_use]
    pub fn to_int64(&self) -> i64 {
        match self {
            Self::Integer(v) => *v,
            Self::Text(s) => s.parse().unwrap_or(0),
        }
    }

    /// Raw value as a JSON scalar, as written into the `sub`/`jti` claims.
    #[must_use]
    pub fn value(&self) -> Value {
        match self {
            Self::Integer(v) => Value::from(*v),
            Self::Text(s) => Value::String(s.clone()),
        }
    }

    /// Whether the identifier was built from an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Whether the identifier was built from text.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

// Bounds are exclusive at the top: 2^63 is representable as f64 but not as i64.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn integral_f64(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.is_finite() && f.fract() == 0.0 && in_range).then(|| f as i64)
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Identifier {
                fn from(v: $t) -> Self {
                    Self::Integer(i64::from(v))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

// Widths that can exceed `i64` are fallible.
macro_rules! impl_try_from_integer {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Identifier {
                type Error = TryFromIntError;

                fn try_from(v: $t) -> Result<Self, Self::Error> {
                    i64::try_from(v).map(Self::Integer)
                }
            }
        )*
    };
}

impl_try_from_integer!(isize, u64, usize);

impl From<String> for Identifier {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Identifier {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}
