//! Common test utilities and mock implementations

use crate::infrastructure::adapters::RpcTransport;
use crate::shared::error::{AppError, AppResult};
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock transport answering every request with one canned reply
pub struct MockTransport {
    reply: AppResult<Bytes>,
    requests: Mutex<Vec<Value>>,
}

impl MockTransport {
    /// Reply with `body` serialized as JSON
    pub fn replying(body: Value) -> Arc<Self> {
        Self::replying_raw(body.to_string())
    }

    /// Reply with raw bytes, which need not be valid JSON
    pub fn replying_raw(body: impl Into<Bytes>) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(body.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Fail every request with `error`
    pub fn failing(error: AppError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Most recent request body, parsed
    pub fn last_request(&self) -> Option<Value> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn post(&self, _method: &str, body: Vec<u8>) -> AppResult<Bytes> {
        let request: Value = serde_json::from_slice(&body)?;
        self.requests.lock().unwrap().push(request);
        self.reply.clone()
    }
}

/// In-memory log sink for asserting on what the client writes to its logs
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Plain-text subscriber writing DEBUG and above into this sink
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
        let sink = self.clone();
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Assertion helpers
pub mod assertions {
    use crate::shared::error::AppError;

    /// Assert the error is the client-side no-result condition
    pub fn assert_no_result<T: std::fmt::Debug>(result: Result<T, AppError>) {
        match result {
            Err(err) => {
                assert_eq!(err, AppError::NoResult);
                assert_eq!(err.rpc_code(), Some(500));
            }
            Ok(value) => panic!("expected NoResult, got Ok({:?})", value),
        }
    }

    /// Assert the error is a daemon error with this code and message
    pub fn assert_rpc_error<T: std::fmt::Debug>(result: Result<T, AppError>, code: i64, message: &str) {
        match result {
            Err(AppError::Rpc(err)) => {
                assert_eq!(err.code, code);
                assert_eq!(err.message, message);
            }
            other => panic!("expected RPC error {}, got {:?}", code, other),
        }
    }
}
