// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::fmt;

/// A value attached to an [`ErrorRecord`](crate::ErrorRecord) as a diagnostic argument.
///
/// Values convert from the usual primitive types via [`From`], so they rarely need to be built
/// by hand. Anything else can be attached through its [`Debug`](fmt::Debug) representation with
/// [`ArgValue::debug`].
///
/// # Examples
///
/// ```rust
/// use errtrail::ArgValue;
///
/// assert_eq!(ArgValue::from(42), ArgValue::I64(42));
/// assert_eq!(ArgValue::from("alice").as_str(), Some("alice"));
/// assert_eq!(ArgValue::debug(&[1, 2]).to_string(), "[1, 2]");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ArgValue {
    /// A string.
    Str(Cow<'static, str>),
    /// A signed integer.
    I64(i64),
    /// An unsigned integer.
    U64(u64),
    /// A floating point number.
    F64(f64),
    /// A boolean.
    Bool(bool),
    /// The [`Debug`](fmt::Debug) representation of a value of any other type.
    Debug(String),
}

impl ArgValue {
    /// Captures the [`Debug`](fmt::Debug) representation of `value`.
    pub fn debug(value: &impl fmt::Debug) -> Self {
        Self::Debug(format!("{value:?}"))
    }

    /// Returns the string, if this is a [`ArgValue::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as `i64`, if it is an integer that fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            Self::U64(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Returns the value as `u64`, if it is an integer that fits.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::U64(v) => Some(*v),
            Self::I64(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Returns the float, if this is a [`ArgValue::F64`].
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the boolean, if this is a [`ArgValue::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

/// Strings are quoted, everything else is written bare.
impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s:?}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Debug(v) => f.write_str(v),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Str(Cow::Owned(value.to_owned()))
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for ArgValue {
    fn from(value: Cow<'static, str>) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ArgValue {
    fn from(value: &String) -> Self {
        Self::Str(Cow::Owned(value.clone()))
    }
}

macro_rules! from_lossless {
    ($variant:ident($target:ty): $($source:ty),+) => {
        $(
            impl From<$source> for ArgValue {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

from_lossless!(I64(i64): i8, i16, i32, i64);
from_lossless!(U64(u64): u8, u16, u32, u64);
from_lossless!(F64(f64): f32, f64);
from_lossless!(Bool(bool): bool);

impl From<isize> for ArgValue {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits wide on every supported target
        i64::try_from(value).map_or_else(|_| Self::debug(&value), Self::I64)
    }
}

impl From<usize> for ArgValue {
    fn from(value: usize) -> Self {
        u64::try_from(value).map_or_else(|_| Self::debug(&value), Self::U64)
    }
}
