//! Runtime argument values supplied to a format call.

use alloc::string::{String, ToString};

use rustc_hash::FxHashMap;

/// The arguments of one format call, keyed by name. Positional arguments
/// are stored under their decimal index, so `{0}` looks up `"0"`.
pub type Args = FxHashMap<String, Value>;

/// A value an argument can take at format time.
///
/// Numbers keep their flavor so that plural selection sees the operands
/// the caller supplied: a string like `"1.30"` carries its visible
/// fraction digits into plural rules, which `1.3_f64` would not.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
}

impl Value {
    /// Plain-text rendering used for `{arg}`, `select` matching, and `#`.
    pub(crate) fn render(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Bool(b) => b.to_string(),
            Self::Int(v) => v.to_string(),
            Self::Uint(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
        }
    }

    /// The value with a plural offset subtracted, keeping the numeric
    /// flavor where possible. `None` means the value is not numeric.
    pub(crate) fn minus_offset(&self, offset: u64) -> Option<Value> {
        match self {
            Self::Int(v) => Some(Self::Int(v.wrapping_sub_unsigned(offset))),
            Self::Uint(v) => Some(match v.checked_sub(offset) {
                Some(n) => Self::Uint(n),
                // Offsetting below zero turns the value signed.
                None => Self::Int((*v as i64).wrapping_sub_unsigned(offset)),
            }),
            Self::Float(v) => Some(Self::Float(v - offset as f64)),
            Self::String(s) => {
                let parsed = s.parse::<f64>().ok().filter(|f| f.is_finite())?;
                Some(Self::String((parsed - offset as f64).to_string()))
            }
            Self::Bool(_) => None,
        }
    }

    /// Whether the value equals an `=n` clause value. Matching uses the
    /// original value, before any offset. `None` means not numeric.
    pub(crate) fn matches_explicit(&self, explicit: u64) -> Option<bool> {
        match self {
            Self::Int(v) => Some(u64::try_from(*v).is_ok_and(|v| v == explicit)),
            Self::Uint(v) => Some(*v == explicit),
            Self::Float(v) => Some(*v == explicit as f64),
            Self::String(s) => {
                let parsed = s.parse::<f64>().ok()?;
                Some(parsed == explicit as f64)
            }
            Self::Bool(_) => None,
        }
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

macro_rules! impl_value_from_signed {
    ($($int:ty),+) => {
        $(
            impl From<$int> for Value {
                fn from(v: $int) -> Self {
                    Self::Int(v.into())
                }
            }
        )+
    };
}

macro_rules! impl_value_from_unsigned {
    ($($int:ty),+) => {
        $(
            impl From<$int> for Value {
                fn from(v: $int) -> Self {
                    Self::Uint(v.into())
                }
            }
        )+
    };
}

impl_value_from_signed!(i8, i16, i32, i64);
impl_value_from_unsigned!(u8, u16, u32, u64);
