//! Error handling module
//!
//! This module provides centralized error handling for the client. Every
//! failure a wallet call can produce is one of these variants.

use crate::domain::rpc::{RpcError, NO_RESULT_CODE};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Network, timeout or connection failure before any reply was read
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status without a body to decode
    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    #[error("JSON error: {0}")]
    Json(String),

    /// Error reported by the daemon in the reply envelope
    #[error("RPC error {0}")]
    Rpc(RpcError),

    /// The reply carried no error but also no usable `result`.
    /// Synthesized by the client, never sent by the daemon.
    #[error("RPC error 500: No result")]
    NoResult,
}

impl AppError {
    /// RPC-level code carried by this error, if any
    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            AppError::Rpc(err) => Some(err.code),
            AppError::NoResult => Some(NO_RESULT_CODE),
            _ => None,
        }
    }

    /// Render this error as a JSON-RPC error object
    pub fn to_rpc_error(&self) -> RpcError {
        match self {
            AppError::Rpc(err) => err.clone(),
            AppError::NoResult => RpcError::no_result(),
            AppError::Json(_) => RpcError::new(-32700, "Parse error"),
            AppError::Validation(msg) => RpcError::new(-32602, format!("Invalid params: {}", msg)),
            other => RpcError::new(-32603, other.to_string()),
        }
    }

    /// Whether the failure happened before a reply envelope existed
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport(_) | AppError::Http { .. })
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<RpcError> for AppError {
    fn from(err: RpcError) -> Self {
        AppError::Rpc(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}
