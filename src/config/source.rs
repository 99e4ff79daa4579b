use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// Where an [`EnvironmentStore`](super::EnvironmentStore) reads its "process
/// environment" from.
///
/// The store never touches `std::env` directly; it goes through this trait so
/// tests can supply a private, in-memory environment.
pub trait EnvSource: Send + Sync + std::fmt::Debug {
    fn var(&self, key: &str) -> Option<String>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-unicode values count as unset.
        std::env::var(key).ok()
    }
}

/// An in-memory environment.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// change values after handing a clone to a store.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: Arc<RwLock<HashMap<String, String>>>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.write().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.write().remove(key);
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: Arc::new(RwLock::new(vars)),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.read().get(key).cloned()
    }
}
