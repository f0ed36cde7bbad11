//! Where the base URL comes from.
//!
//! Resolution only ever needs "give me the value for this key, if any", so
//! that is the whole of [`ConfigSource`]. Tests and embedding applications
//! swap in a [`MapSource`] instead of touching the process environment.

use std::collections::HashMap;

/// Primary variable holding the API base URL.
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";
/// Variable name used by web frontends that share the same `.env` file.
pub const VITE_API_BASE_URL_VAR: &str = "VITE_API_BASE_URL";

/// Keys consulted during resolution, highest priority first.
pub const BASE_URL_KEYS: [&str; 2] = [API_BASE_URL_VAR, VITE_API_BASE_URL_VAR];

/// A source of optional string configuration values.
pub trait ConfigSource: Send + Sync {
    /// Value for `key`, or `None` if the source has no such key.
    fn get(&self, key: &str) -> Option<String>;

    /// Consult `self` first and fall back to `other` when `self` yields
    /// nothing or an empty string.
    fn or<B: ConfigSource>(self, other: B) -> Layered<Self, B>
    where
        Self: Sized,
    {
        Layered {
            first: self,
            second: other,
        }
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// The environment of the running process.
///
/// Values that are not valid unicode are treated as missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Values of the base URL variables captured when this crate was compiled.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildEnv;

impl ConfigSource for BuildEnv {
    fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            API_BASE_URL_VAR => option_env!("API_BASE_URL"),
            VITE_API_BASE_URL_VAR => option_env!("VITE_API_BASE_URL"),
            _ => None,
        };
        value.map(str::to_string)
    }
}

/// In-memory key/value configuration.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Two sources consulted in order, key by key. Built with
/// [`ConfigSource::or`].
///
/// Layering is per key: `second`'s value for one key can win over
/// `first`'s value for another. Use [`ApiBase::resolve_in_order`] when a
/// whole source should take priority.
///
/// [`ApiBase::resolve_in_order`]: crate::ApiBase::resolve_in_order
#[derive(Debug, Clone, Copy)]
pub struct Layered<A, B> {
    first: A,
    second: B,
}

impl<A: ConfigSource, B: ConfigSource> ConfigSource for Layered<A, B> {
    fn get(&self, key: &str) -> Option<String> {
        self.first
            .get(key)
            .filter(|v| !v.is_empty())
            .or_else(|| self.second.get(key))
    }
}
