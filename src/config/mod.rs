//! Configuration management module
//!
//! This module handles loading and validating the client configuration.

pub mod app_config;
pub mod validation;

pub use app_config::{AppConfig, DaemonConfig, LoggingConfig};
pub use validation::ConfigValidator;
