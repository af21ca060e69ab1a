//! Common utilities and shared infrastructure
//!
//! - [`AppError`] / [`AppResult`] - HTTP-level error handling
//! - Logger setup

pub mod error;
pub mod logger;

// Re-export commonly used items
pub use error::{AppError, AppResult};
pub use logger::{init_logger, init_logger_with_file};
