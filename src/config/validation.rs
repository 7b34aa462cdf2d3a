//! Configuration validation module
//!
//! Cross-field checks the validator derive cannot express.

use crate::config::app_config::{AppConfig, DaemonConfig, LoggingConfig};
use crate::shared::error::{AppError, AppResult};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["text", "compact"];

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> AppResult<()> {
        Self::validate_daemon_config(&config.daemon)?;
        Self::validate_logging_config(&config.logging)?;

        Ok(())
    }

    /// Validate daemon URL scheme and credential pairing
    fn validate_daemon_config(daemon: &DaemonConfig) -> AppResult<()> {
        if !daemon.rpc_url.starts_with("http://") && !daemon.rpc_url.starts_with("https://") {
            return Err(AppError::Validation(
                "Daemon RPC URL must start with http:// or https://".to_string(),
            ));
        }

        if daemon.rpc_user.is_some() != daemon.rpc_password.is_some() {
            return Err(AppError::Validation(
                "rpc_user and rpc_password must be set together".to_string(),
            ));
        }

        if daemon.credentials().is_some() && daemon.rpc_url.contains('@') {
            tracing::warn!("Credentials configured both in rpc_url and rpc_user/rpc_password; rpc_url credentials are ignored");
        }

        Ok(())
    }

    /// Validate logging level and format names
    fn validate_logging_config(logging: &LoggingConfig) -> AppResult<()> {
        if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            return Err(AppError::Validation(format!("Invalid log level: {}", logging.level)));
        }

        if !LOG_FORMATS.contains(&logging.format.as_str()) {
            return Err(AppError::Validation(format!("Invalid log format: {}", logging.format)));
        }

        Ok(())
    }
}
