mod base;
mod global;

pub use base::{ApiBase, DEFAULT_API_BASE_URL};
pub use global::{join_with_base, API_BASE_URL};
