use thiserror::Error;

/// A unified error type for this library.
///
/// Resolving and joining never fail; only conversions into a parsed
/// [`url::Url`] do.
#[derive(Debug, Error)]
pub enum ApiBaseError {
    /// The base URL, or a URL joined onto it, is not a valid absolute URL.
    #[error("invalid URL `{value}`: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

impl ApiBaseError {
    pub(crate) fn invalid_url(value: impl Into<String>, source: url::ParseError) -> Self {
        ApiBaseError::InvalidUrl {
            value: value.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiBaseError>;
