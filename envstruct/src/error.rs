//! Errors raised while coercing raw environment values.
//!
//! The loader never returns these to its caller: a failed coercion is logged
//! and the field keeps its zero value. They are public so that
//! [`EnvValue::from_env_str`](crate::EnvValue::from_env_str) can be used for
//! strict parsing of individual values.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Failure converting a raw string into a field's declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CoerceError {
    /// The value is not a base-10 integer that fits the declared width.
    #[error("invalid integer {raw:?}: {source}")]
    Int {
        /// Raw value that failed to parse.
        raw: String,
        /// Underlying parse error.
        #[source]
        source: ParseIntError,
    },

    /// The value is not a decimal floating point number.
    #[error("invalid float {raw:?}: {source}")]
    Float {
        /// Raw value that failed to parse.
        raw: String,
        /// Underlying parse error.
        #[source]
        source: ParseFloatError,
    },
}

impl CoerceError {
    pub(crate) fn int(raw: &str, source: ParseIntError) -> Self {
        Self::Int {
            raw: raw.to_owned(),
            source,
        }
    }

    pub(crate) fn float(raw: &str, source: ParseFloatError) -> Self {
        Self::Float {
            raw: raw.to_owned(),
            source,
        }
    }

    /// Returns the raw value that failed to coerce.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Int { raw, .. } | Self::Float { raw, .. } => raw,
        }
    }
}
