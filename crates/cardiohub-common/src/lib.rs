//! cardiohub-common — Shared error types and configuration used across all
//! CardioHub crates.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{ApiError, CardioHubError, Result};
