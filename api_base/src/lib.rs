//! # API base
//!
//! Resolves the base URL of a backend API from configuration and joins
//! request paths onto it. The base URL comes from `API_BASE_URL` (or
//! `VITE_API_BASE_URL`) and falls back to `http://localhost:3000`.
//!
//! ```
//! use api_base::{ApiBase, MapSource};
//!
//! let base = ApiBase::resolve(&MapSource::new().with("API_BASE_URL", "https://api.example.com/"));
//! assert_eq!(base.join("/users"), "https://api.example.com/users");
//! assert_eq!(base.join("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
//! ```

pub mod config;
pub mod error;
pub mod source;
pub mod util;

pub use config::*;
pub use error::ApiBaseError;
pub use source::{BuildEnv, ConfigSource, Layered, MapSource, ProcessEnv};
pub use util::{is_absolute, join_segments, join_url};
