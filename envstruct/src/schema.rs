//! Field descriptor tables for configuration types.
//!
//! A configuration type describes its fields once, in declaration order, as
//! a list of [`Field`] values. `#[derive(EnvConfig)]` generates the list from
//! `#[envstruct(...)]` annotations; it can also be written by hand.

use std::fmt;

use crate::coerce::EnvValue;
use crate::error::CoerceError;

/// Semantic type of a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FieldKind {
    /// Boolean flag.
    Bool,
    /// Signed integer of the given width.
    Signed {
        /// Width in bits.
        bits: u32,
    },
    /// Unsigned integer of the given width.
    Unsigned {
        /// Width in bits.
        bits: u32,
    },
    /// Floating point number of the given width.
    Float {
        /// Width in bits.
        bits: u32,
    },
    /// String stored verbatim.
    Str,
    /// Comma-separated list of strings.
    StrList,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Signed { bits } => write!(f, "i{bits}"),
            Self::Unsigned { bits } => write!(f, "u{bits}"),
            Self::Float { bits } => write!(f, "f{bits}"),
            Self::Str => f.write_str("string"),
            Self::StrList => f.write_str("list of strings"),
        }
    }
}

type Setter<T> = Box<dyn Fn(&mut T, &str) -> Result<(), CoerceError> + Send + Sync>;

/// Describes one field of the configuration type `T`.
///
/// # Examples
///
/// ```
/// use envstruct::{Field, FieldKind};
///
/// #[derive(Default)]
/// struct Settings {
///     port: u16,
/// }
///
/// let field = Field::new("port", |s: &mut Settings| &mut s.port).default("8080");
/// assert_eq!(field.name(), "port");
/// assert_eq!(field.kind(), FieldKind::Unsigned { bits: 16 });
/// assert_eq!(field.default_value(), Some("8080"));
/// ```
pub struct Field<T> {
    name: &'static str,
    kind: FieldKind,
    skip: bool,
    default: Option<&'static str>,
    setter: Setter<T>,
}

impl<T> Field<T> {
    /// Describes the field `name`, reached through `accessor`.
    ///
    /// `name` is the identifier the environment key is derived from. The
    /// field's kind follows from the accessor's target type.
    pub fn new<V, F>(name: &'static str, accessor: F) -> Self
    where
        T: 'static,
        V: EnvValue + 'static,
        F: Fn(&mut T) -> &mut V + Send + Sync + 'static,
    {
        Self {
            name,
            kind: V::KIND,
            skip: false,
            default: None,
            setter: Box::new(move |target: &mut T, raw: &str| {
                *accessor(target) = V::from_env_str(raw)?;
                Ok(())
            }),
        }
    }

    /// Sets the value used when the variable is absent or empty.
    ///
    /// An empty string means "no default".
    #[must_use]
    pub fn default(mut self, value: &'static str) -> Self {
        self.default = (!value.is_empty()).then_some(value);
        self
    }

    /// Excludes the field from loading; it keeps its zero value.
    #[must_use]
    pub const fn skip(mut self) -> Self {
        self.skip = true;
        self
    }

    /// Identifier the environment key is derived from.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Semantic type of the field.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Whether the loader leaves this field untouched.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        self.skip
    }

    /// Default applied when the variable is absent or empty.
    #[must_use]
    pub const fn default_value(&self) -> Option<&'static str> {
        self.default
    }

    /// Coerces `raw` and stores it in `target`.
    ///
    /// On failure `target` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the [`CoerceError`] produced by the field type.
    pub fn assign(&self, target: &mut T, raw: &str) -> Result<(), CoerceError> {
        (self.setter)(target, raw)
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("skip", &self.skip)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

/// Resolved view of a loadable field, as reported by [`describe`](crate::describe).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    /// Field identifier.
    pub name: &'static str,
    /// Environment variable consulted for the field.
    pub key: String,
    /// Semantic type of the field.
    pub kind: FieldKind,
    /// Default applied when the variable is absent or empty.
    pub default: Option<&'static str>,
}

/// Configuration types that can be populated from the environment.
///
/// Usually derived:
///
/// ```
/// use envstruct::EnvConfig;
///
/// #[derive(Default, EnvConfig)]
/// struct Settings {
///     #[envstruct(default = "info")]
///     log_level: String,
/// }
///
/// let names: Vec<_> = Settings::fields().iter().map(|f| f.name()).collect();
/// assert_eq!(names, ["log_level"]);
/// ```
///
/// A manual implementation lists the fields in declaration order:
///
/// ```
/// use envstruct::{EnvConfig, Field};
///
/// #[derive(Default)]
/// struct Settings {
///     api_key: String,
///     retries: i32,
/// }
///
/// impl EnvConfig for Settings {
///     fn fields() -> Vec<Field<Self>> {
///         vec![
///             Field::new("APIKey", |s: &mut Self| &mut s.api_key),
///             Field::new("Retries", |s: &mut Self| &mut s.retries).default("3"),
///         ]
///     }
/// }
/// ```
pub trait EnvConfig: Default {
    /// Field descriptors in declaration order.
    fn fields() -> Vec<Field<Self>>;

    /// Prefix applied by [`load_envs`](crate::load_envs).
    #[must_use]
    fn prefix() -> &'static str {
        ""
    }
}
