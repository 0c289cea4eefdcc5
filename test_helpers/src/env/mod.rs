//! Guards for mutating process environment variables in tests.
//!
//! Every mutation takes a global re-entrant lock and returns an
//! [`EnvVarGuard`] that puts the previous value back (or removes the
//! variable if it was absent) when dropped. Guards for the same key restore
//! in LIFO order.
//!
//! Tests that load configuration should hold an [`EnvScope`] for the whole
//! load, so that no other test changes the environment mid-read:
//!
//! ```
//! use envstruct_test_helpers::env;
//!
//! let _scope = env::vars([("APP_PORT", Some("8080")), ("APP_HOST", None)]);
//! assert_eq!(std::env::var("APP_PORT").ok().as_deref(), Some("8080"));
//! assert!(std::env::var("APP_HOST").is_err());
//! ```

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// Writes `key` while the caller holds [`ENV_MUTEX`].
fn write_locked(key: &str, value: Option<&OsStr>, _lock: &ReentrantMutexGuard<'static, ()>) {
    match value {
        // SAFETY: the environment lock is held for the duration of the write.
        Some(v) => unsafe { env::set_var(key, v) },
        // SAFETY: the environment lock is held for the duration of the write.
        None => unsafe { env::remove_var(key) },
    }
}

fn mutate_locked(
    key: String,
    value: Option<&OsStr>,
    lock: &ReentrantMutexGuard<'static, ()>,
) -> EnvVarGuard {
    let original = env::var_os(&key);
    write_locked(&key, value, lock);
    EnvVarGuard { key, original }
}

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let lock = ENV_MUTEX.lock();
        write_locked(&self.key, self.original.as_deref(), &lock);
    }
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish_non_exhaustive()
    }
}

/// Holds the environment lock; mutations made through it reuse the lock.
#[must_use = "dropping releases the environment lock"]
pub struct EnvVarLock {
    guard: ReentrantMutexGuard<'static, ()>,
}

impl EnvVarLock {
    /// Sets `key` to `value` under the held lock.
    pub fn set_var<K, V>(&self, key: K, value: V) -> EnvVarGuard
    where
        K: Into<String>,
        V: AsRef<OsStr>,
    {
        mutate_locked(key.into(), Some(value.as_ref()), &self.guard)
    }

    /// Removes `key` under the held lock.
    pub fn remove_var<K: Into<String>>(&self, key: K) -> EnvVarGuard {
        mutate_locked(key.into(), None, &self.guard)
    }
}

/// Keeps the environment lock and a set of guards alive together.
///
/// Guards are restored before the lock is released.
#[must_use = "dropping releases the environment lock and restores guards"]
pub struct EnvScope {
    guards: Vec<EnvVarGuard>,
    _lock: EnvVarLock,
}

impl EnvScope {
    /// Runs `builder` under the lock and keeps the guards it returns.
    pub fn new_with<F>(builder: F) -> Self
    where
        F: FnOnce(&EnvVarLock) -> Vec<EnvVarGuard>,
    {
        let lock = lock();
        let guards = builder(&lock);
        Self {
            guards,
            _lock: lock,
        }
    }

    /// Number of variables the scope will restore.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.guards.len()
    }

    /// Whether the scope restores no variables.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        // Restore while `_lock` is still held; fields drop after this body.
        drop(std::mem::take(&mut self.guards));
    }
}

/// Sets `key` to `value`, returning a guard that restores the prior state.
///
/// # Examples
/// ```
/// use envstruct_test_helpers::env;
///
/// let _g = env::set_var("HELPERS_DOC_FOO", "bar");
/// assert_eq!(std::env::var("HELPERS_DOC_FOO").ok().as_deref(), Some("bar"));
/// ```
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    lock().set_var(key, value)
}

/// Removes `key`, returning a guard that restores the prior state.
pub fn remove_var<K: Into<String>>(key: K) -> EnvVarGuard {
    lock().remove_var(key)
}

/// Acquires the global environment lock.
pub fn lock() -> EnvVarLock {
    EnvVarLock {
        guard: ENV_MUTEX.lock(),
    }
}

/// Creates a scope from `builder`, run while the lock is held.
pub fn scope_with<F>(builder: F) -> EnvScope
where
    F: FnOnce(&EnvVarLock) -> Vec<EnvVarGuard>,
{
    EnvScope::new_with(builder)
}

/// Sets (`Some`) or removes (`None`) each variable, holding the lock until
/// the returned scope drops.
pub fn vars<I, K, V>(pairs: I) -> EnvScope
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: Into<String>,
    V: AsRef<OsStr>,
{
    scope_with(|lock| {
        pairs
            .into_iter()
            .map(|(key, value)| match value {
                Some(v) => lock.set_var(key, v),
                None => lock.remove_var(key),
            })
            .collect()
    })
}
