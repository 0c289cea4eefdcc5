//! Sources of environment values.

use std::collections::{BTreeMap, HashMap};
use std::env::{self, VarError};
use std::hash::BuildHasher;

/// Read-only lookup of environment variables by exact key.
///
/// The loader always asks for the upper-cased key.
pub trait EnvSource {
    /// Returns the value stored under `key`, if any.
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the current process.
///
/// Values that are not valid Unicode are reported as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                tracing::debug!(key, "ignoring environment variable with non-Unicode value");
                None
            }
        }
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
