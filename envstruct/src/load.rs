//! Walks a configuration type's fields and fills a fresh instance.

use crate::name::env_key;
use crate::schema::{EnvConfig, Field, FieldInfo};
use crate::source::{EnvSource, ProcessEnv};

/// Loads `T` from the process environment using [`EnvConfig::prefix`].
///
/// Equivalent to `load_envs_with_prefix::<T>(T::prefix())`.
#[must_use]
pub fn load_envs<T: EnvConfig>() -> T {
    load_envs_with_prefix(T::prefix())
}

/// Loads `T` from the process environment.
///
/// With the prefix `pref`, a field named `username` is read from
/// `PREF_USERNAME`; with an empty prefix, from `USERNAME`.
#[must_use]
pub fn load_envs_with_prefix<T: EnvConfig>(prefix: &str) -> T {
    load_from(&ProcessEnv, prefix)
}

/// Loads `T` from `source`.
///
/// Starts from `T::default()` and visits every field once, in declaration
/// order. Skipped fields are left alone. Each remaining field reads its
/// variable, falling back to its default when the variable is absent or
/// empty, and stores the coerced value. Values that fail to coerce are
/// logged and leave the field at its zero value; this function never fails.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use envstruct::EnvConfig;
///
/// #[derive(Default, EnvConfig)]
/// struct Limits {
///     max_conns: i32,
///     #[envstruct(default = "30")]
///     timeout_secs: u64,
/// }
///
/// let env = BTreeMap::from([(String::from("MAX_CONNS"), String::from("lots"))]);
/// let limits: Limits = envstruct::load_from(&env, "");
/// assert_eq!(limits.max_conns, 0);
/// assert_eq!(limits.timeout_secs, 30);
/// ```
#[must_use]
pub fn load_from<T, S>(source: &S, prefix: &str) -> T
where
    T: EnvConfig,
    S: EnvSource + ?Sized,
{
    let mut target = T::default();
    for field in T::fields().iter().filter(|f| !f.is_skipped()) {
        fill_field(field, &mut target, source, prefix);
    }
    target
}

fn fill_field<T, S>(field: &Field<T>, target: &mut T, source: &S, prefix: &str)
where
    S: EnvSource + ?Sized,
{
    let key = env_key(prefix, field.name());
    let found = source.var(&key).filter(|value| !value.is_empty());
    let raw = match (found, field.default_value()) {
        (Some(value), _) => value,
        (None, Some(default)) => {
            tracing::trace!(field = field.name(), %key, default, "using default value");
            default.to_owned()
        }
        (None, None) => String::new(),
    };
    tracing::trace!(field = field.name(), %key, kind = %field.kind(), "filling field");
    if let Err(err) = field.assign(target, &raw) {
        tracing::debug!(
            field = field.name(),
            %key,
            error = %err,
            "leaving field at zero value"
        );
    }
}

/// Lists the fields `T` loads, with the variables they read.
///
/// Skipped fields are omitted. The order matches declaration order.
///
/// # Examples
///
/// ```
/// use envstruct::{EnvConfig, FieldKind};
///
/// #[derive(Default, EnvConfig)]
/// struct Settings {
///     #[envstruct(default = "8080")]
///     port: u16,
///     #[envstruct(skip)]
///     cache: Vec<String>,
/// }
///
/// let fields = envstruct::describe::<Settings>("app");
/// assert_eq!(fields.len(), 1);
/// assert_eq!(fields[0].key, "APP_PORT");
/// assert_eq!(fields[0].kind, FieldKind::Unsigned { bits: 16 });
/// assert_eq!(fields[0].default, Some("8080"));
/// ```
#[must_use]
pub fn describe<T: EnvConfig>(prefix: &str) -> Vec<FieldInfo> {
    T::fields()
        .iter()
        .filter(|f| !f.is_skipped())
        .map(|f| FieldInfo {
            name: f.name(),
            key: env_key(prefix, f.name()),
            kind: f.kind(),
            default: f.default_value(),
        })
        .collect()
}
