//! Shared utilities and common functionality
//!
//! Error handling, logging and argument validation used across the crate.

pub mod error;
pub mod logging;
pub mod validation;

pub use error::{AppError, AppResult};
pub use logging::LoggingUtils;
pub use validation::ValidationUtils;
