//! Result extraction
//!
//! Typed results are strict: a missing or mis-shaped `result` is a
//! [`AppError::NoResult`]. Opaque results are lenient and fall back to an
//! empty object.

use crate::domain::coercion::{coerce, is_scalar};
use crate::domain::rpc::ResponseEnvelope;
use crate::shared::error::{AppError, AppResult};
use serde_json::{Map, Value};

/// A shape a `result` member can be read as
pub trait FromRpcResult: Sized {
    /// Read the value, or `None` when the shape does not match
    fn from_result(value: &Value) -> Option<Self>;
}

/// Text results such as addresses and txids must be JSON strings
impl FromRpcResult for String {
    fn from_result(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

/// Amounts may be numbers or numeric strings
impl FromRpcResult for f64 {
    fn from_result(value: &Value) -> Option<Self> {
        is_scalar(value).then(|| coerce::<f64>(value))
    }
}

impl FromRpcResult for i64 {
    fn from_result(value: &Value) -> Option<Self> {
        is_scalar(value).then(|| coerce::<i64>(value))
    }
}

impl FromRpcResult for bool {
    fn from_result(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromRpcResult for Map<String, Value> {
    fn from_result(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

impl ResponseEnvelope {
    /// Read `result` as `T`, failing with `NoResult` when absent or mis-shaped
    pub fn extract<T: FromRpcResult>(&self) -> AppResult<T> {
        self.result()
            .and_then(T::from_result)
            .ok_or(AppError::NoResult)
    }

    /// Take `result` as an object, substituting `{}` when absent or mis-shaped
    pub fn extract_opaque(mut self) -> Map<String, Value> {
        match self.take_result() {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}
