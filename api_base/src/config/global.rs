//! The process-wide base URL.

use once_cell::sync::Lazy;

use super::base::ApiBase;

/// API base URL resolved once, on first access, via [`ApiBase::from_env`].
///
/// Prefer passing an [`ApiBase`] to components that can take one; this
/// static is for call sites that have nowhere to receive it from.
pub static API_BASE_URL: Lazy<ApiBase> = Lazy::new(ApiBase::from_env);

/// Join `path` onto [`API_BASE_URL`].
pub fn join_with_base(path: &str) -> String {
    API_BASE_URL.join(path)
}
