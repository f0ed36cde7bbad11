//! The resolved API base URL.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{ApiBaseError, Result};
use crate::source::{BuildEnv, ConfigSource, ProcessEnv, BASE_URL_KEYS};
use crate::util::join_url;

/// Base URL used when no configuration supplies one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Root address that relative API paths are joined onto.
///
/// Never empty: every constructor maps a missing or empty value to
/// [`DEFAULT_API_BASE_URL`]. Anything else is kept verbatim, malformed or
/// not; use [`ApiBase::to_url`] to validate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub struct ApiBase {
    url: String,
}

impl ApiBase {
    /// Wrap `url`, falling back to the default if it is empty.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        if url.is_empty() {
            Self::default()
        } else {
            Self { url }
        }
    }

    /// Resolve the base URL from `source`.
    ///
    /// `API_BASE_URL` is consulted first, then `VITE_API_BASE_URL`; the
    /// first non-empty value wins.
    pub fn resolve<S: ConfigSource + ?Sized>(source: &S) -> Self {
        Self::try_resolve(source).unwrap_or_else(Self::fallback)
    }

    /// Like [`ApiBase::resolve`], but `None` when `source` has no non-empty
    /// value under any of the keys.
    pub fn try_resolve<S: ConfigSource + ?Sized>(source: &S) -> Option<Self> {
        for key in BASE_URL_KEYS {
            match source.get(key) {
                Some(url) if !url.is_empty() => {
                    debug!(key, url = %url, "resolved API base URL");
                    return Some(Self { url });
                }
                Some(_) => debug!(key, "ignoring empty API base URL"),
                None => {}
            }
        }
        None
    }

    /// Resolve against each source in turn. A source is only consulted if
    /// every earlier one had no value under any key.
    pub fn resolve_in_order(sources: &[&dyn ConfigSource]) -> Self {
        sources
            .iter()
            .find_map(|source| Self::try_resolve(*source))
            .unwrap_or_else(Self::fallback)
    }

    /// Resolve from the process environment, then from values baked in at
    /// compile time, then the default. Any runtime value beats every
    /// compiled-in one.
    pub fn from_env() -> Self {
        Self::resolve_in_order(&[&ProcessEnv, &BuildEnv])
    }

    fn fallback() -> Self {
        debug!(url = DEFAULT_API_BASE_URL, "no API base URL configured, using default");
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// `true` if this is the built-in default.
    pub fn is_default(&self) -> bool {
        self.url == DEFAULT_API_BASE_URL
    }

    /// Join `path` onto this base URL. See [`join_url`].
    pub fn join(&self, path: &str) -> String {
        join_url(&self.url, path)
    }

    /// Parse the base URL.
    pub fn to_url(&self) -> Result<Url> {
        Url::parse(&self.url).map_err(|e| ApiBaseError::invalid_url(self.url.as_str(), e))
    }

    /// Join `path` and parse the result.
    pub fn join_to_url(&self, path: &str) -> Result<Url> {
        let joined = self.join(path);
        Url::parse(&joined).map_err(|e| ApiBaseError::invalid_url(joined, e))
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Display for ApiBase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for ApiBase {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl From<String> for ApiBase {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}

impl From<&str> for ApiBase {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<Option<String>> for ApiBase {
    fn from(url: Option<String>) -> Self {
        url.map(Self::new).unwrap_or_default()
    }
}

impl From<ApiBase> for String {
    fn from(base: ApiBase) -> Self {
        base.url
    }
}
