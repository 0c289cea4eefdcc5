//! Populate configuration structs from environment variables.
//!
//! Each field of a configuration struct is matched to an environment
//! variable whose name is derived from the field identifier: `api_key` and
//! `APIKey` both read `API_KEY`, or `APP_API_KEY` when the prefix `app` is in
//! effect. Values are coerced into the field's type on a best-effort basis.
//! A missing or malformed value leaves the field at its zero value rather
//! than failing the load.
//!
//! ```rust
//! use envstruct::EnvConfig;
//!
//! #[derive(Debug, Default, EnvConfig)]
//! #[envstruct(prefix = "pref")]
//! struct Settings {
//!     username: String,
//!     #[envstruct(default = "s3cr37")]
//!     secret_key: String,
//!     #[envstruct(default = "true")]
//!     auto_restart: bool,
//!     #[envstruct(skip)]
//!     ignored_field: String,
//! }
//!
//! let env = std::collections::HashMap::from([
//!     (String::from("PREF_USERNAME"), String::from("Rob")),
//!     (String::from("PREF_AUTO_RESTART"), String::from("false")),
//! ]);
//! let settings: Settings = envstruct::load_from(&env, Settings::prefix());
//! assert_eq!(settings.username, "Rob");
//! assert_eq!(settings.secret_key, "s3cr37");
//! assert!(!settings.auto_restart);
//! assert!(settings.ignored_field.is_empty());
//! ```

pub use envstruct_macros::EnvConfig;

mod coerce;
mod error;
mod load;
pub mod name;
mod schema;
mod source;

pub use coerce::EnvValue;
pub use error::CoerceError;
pub use load::{describe, load_envs, load_envs_with_prefix, load_from};
pub use schema::{EnvConfig, Field, FieldInfo, FieldKind};
pub use source::{EnvSource, ProcessEnv};
