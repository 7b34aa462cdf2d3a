//! Logging utilities module
//!
//! This module provides centralized logging setup and structured events
//! for wallet calls.

use crate::config::LoggingConfig;
use crate::shared::error::{AppError, AppResult};
use reqwest::Url;
use tracing::{debug, error};

/// Remove the `user:password@` part of a URL
pub fn strip_credentials(url: &mut Url) {
    // only fails for URLs that cannot carry userinfo
    let _ = url.set_username("");
    let _ = url.set_password(None);
}

/// Logging utilities for the client
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified configuration.
    /// `RUST_LOG` overrides the configured level.
    pub fn initialize(config: &LoggingConfig) -> AppResult<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.to_lowercase()));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(false);

        let result = if config.format == "compact" {
            tracing::subscriber::set_global_default(builder.compact().finish())
        } else {
            tracing::subscriber::set_global_default(
                builder.with_file(true).with_line_number(true).finish(),
            )
        };

        result.map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))
    }

    /// Render a URL for logs, without credentials
    pub fn redact_url(url: &str) -> String {
        match Url::parse(url) {
            Ok(mut parsed) => {
                strip_credentials(&mut parsed);
                parsed.to_string()
            }
            Err(_) => "<invalid url>".to_string(),
        }
    }

    /// Log an outgoing wallet call
    pub fn log_call(method: &str, url: &str) {
        debug!(method = %method, url = %url, "Sending wallet RPC request");
    }

    /// Log a reply received from the daemon
    pub fn log_reply(method: &str, status: u16, bytes: usize, duration_ms: u64) {
        debug!(
            method = %method,
            status = %status,
            bytes = %bytes,
            duration_ms = %duration_ms,
            "Wallet RPC reply received"
        );
    }

    /// Log a failed wallet call at the outer edge
    pub fn log_failure(operation: &str, error: &AppError) {
        error!(
            operation = %operation,
            error = %error,
            rpc_code = ?error.rpc_code(),
            "Wallet call failed"
        );
    }
}
