//! RPC domain logic - request/reply models and error classification

use crate::domain::coercion::coerce;
use crate::shared::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Code the client reserves for replies without a usable `result`
pub const NO_RESULT_CODE: i64 = 500;

/// Message paired with [`NO_RESULT_CODE`]
pub const NO_RESULT_MESSAGE: &str = "No result";

/// JSON-RPC protocol version sent with every request
pub const JSONRPC_VERSION: &str = "2.0";

/// Outgoing wallet RPC request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    /// JSON-RPC version
    pub jsonrpc: String,

    /// Daemon method name
    pub method: String,

    /// Positional parameters, in daemon order
    pub params: Vec<Value>,
}

impl RpcRequest {
    /// Create a request for `method` with positional `params`
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
        }
    }

    /// Create a request without parameters
    pub fn without_params(method: impl Into<String>) -> Self {
        Self::new(method, Vec::new())
    }

    /// Serialize the request body
    pub fn to_bytes(&self) -> AppResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Error reported by the daemon inside a reply envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    /// Error code
    pub code: i64,

    /// Error message
    pub message: String,
}

impl RpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The client-side "no usable result" error
    pub fn no_result() -> Self {
        Self::new(NO_RESULT_CODE, NO_RESULT_MESSAGE)
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for RpcError {}

/// One decoded JSON-RPC reply, kept untyped until a caller asks for a shape
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseEnvelope {
    fields: Map<String, Value>,
}

impl ResponseEnvelope {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Decode raw reply bytes. The top level must be a JSON object.
    pub fn from_slice(body: &[u8]) -> AppResult<Self> {
        let fields: Map<String, Value> = serde_json::from_slice(body)?;
        Ok(Self::new(fields))
    }

    /// Decode raw reply bytes and fail on a daemon error.
    ///
    /// A non-zero `error.code` wins over any `result` in the same reply.
    pub fn decode(body: &[u8]) -> AppResult<Self> {
        let envelope = Self::from_slice(body)?;
        envelope.check_error()?;
        Ok(envelope)
    }

    /// Fail with the classified daemon error, if any
    pub fn check_error(&self) -> AppResult<()> {
        match self.classify_error() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// Inspect the `error` member.
    ///
    /// Only a non-zero code signals failure: an `error` object whose code is
    /// zero or missing is inert even when it carries a message.
    pub fn classify_error(&self) -> Option<RpcError> {
        let error = self.fields.get("error")?.as_object()?;

        let code = error.get("code").map(coerce::<i64>).unwrap_or(0);
        if code == 0 {
            return None;
        }

        let message = error
            .get("message")
            .map(coerce::<String>)
            .unwrap_or_default();

        Some(RpcError::new(code, message))
    }

    /// The `result` member; JSON `null` counts as absent
    pub fn result(&self) -> Option<&Value> {
        self.fields.get("result").filter(|value| !value.is_null())
    }

    /// Remove and return the `result` member
    pub fn take_result(&mut self) -> Option<Value> {
        self.fields.remove("result").filter(|value| !value.is_null())
    }
}
