//! Conversion of raw environment strings into field values.
//!
//! Every supported field type implements [`EnvValue`]. Booleans and strings
//! always convert; numbers report a [`CoerceError`] which the loader logs and
//! discards, leaving the field at its zero value.

use crate::error::CoerceError;
use crate::schema::FieldKind;

/// Spellings accepted as `true`, compared case-insensitively.
const TRUTHY: [&str; 5] = ["yes", "true", "y", "1", "on"];

/// A type that can be populated from a raw environment string.
///
/// # Examples
///
/// ```
/// use envstruct::EnvValue;
///
/// assert!(bool::from_env_str("ON").is_ok_and(|v| v));
/// assert!(i16::from_env_str("70000").is_err());
/// assert_eq!(
///     Vec::<String>::from_env_str("a,,b").ok(),
///     Some(vec![String::from("a"), String::new(), String::from("b")])
/// );
/// ```
pub trait EnvValue: Sized {
    /// Semantic kind reported in field listings and diagnostics.
    const KIND: FieldKind;

    /// Converts `raw` into a value of this type.
    ///
    /// # Errors
    ///
    /// Returns a [`CoerceError`] when `raw` cannot be represented as `Self`.
    fn from_env_str(raw: &str) -> Result<Self, CoerceError>;
}

impl EnvValue for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn from_env_str(raw: &str) -> Result<Self, CoerceError> {
        Ok(TRUTHY.iter().any(|t| raw.eq_ignore_ascii_case(t)))
    }
}

impl EnvValue for String {
    const KIND: FieldKind = FieldKind::Str;

    fn from_env_str(raw: &str) -> Result<Self, CoerceError> {
        Ok(raw.to_owned())
    }
}

impl EnvValue for Vec<String> {
    const KIND: FieldKind = FieldKind::StrList;

    /// Splits on commas without trimming; an empty value is an empty list.
    fn from_env_str(raw: &str) -> Result<Self, CoerceError> {
        if raw.is_empty() {
            return Ok(Self::new());
        }
        Ok(raw.split(',').map(str::to_owned).collect())
    }
}

macro_rules! impl_integer {
    ($kind:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl EnvValue for $ty {
                const KIND: FieldKind = FieldKind::$kind { bits: <$ty>::BITS };

                fn from_env_str(raw: &str) -> Result<Self, CoerceError> {
                    raw.parse().map_err(|source| CoerceError::int(raw, source))
                }
            }
        )+
    };
}

impl_integer!(Signed: i8, i16, i32, i64, isize);
impl_integer!(Unsigned: u8, u16, u32, u64, usize);

macro_rules! impl_float {
    ($($ty:ty => $bits:literal),+ $(,)?) => {
        $(
            impl EnvValue for $ty {
                const KIND: FieldKind = FieldKind::Float { bits: $bits };

                fn from_env_str(raw: &str) -> Result<Self, CoerceError> {
                    raw.parse().map_err(|source| CoerceError::float(raw, source))
                }
            }
        )+
    };
}

impl_float!(f32 => 32, f64 => 64);
