pub mod api;
pub mod config;
pub mod error;
pub mod upstream;

pub use error::{ProxyError, Result};
