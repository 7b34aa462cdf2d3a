//! External RPC adapter for communicating with the DigiByte daemon
//!
//! The adapter only moves bytes: it posts a serialized request and hands
//! the raw reply body back for decoding. The daemon answers RPC failures
//! with a JSON body and a non-2xx status, so the body is returned whatever
//! the status. One attempt per call; there is no retry.
//!
//! Credentials embedded in the URL are sent as basic auth unless an
//! explicit `rpc_user`/`rpc_password` pair is configured, which replaces
//! them. Logged URLs never carry credentials.

use crate::config::DaemonConfig;
use crate::shared::error::{AppError, AppResult};
use crate::shared::logging::{strip_credentials, LoggingUtils};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use std::time::Instant;

/// Byte-level transport for wallet RPC requests
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Send one serialized request for `method` and return the reply body
    async fn post(&self, method: &str, body: Vec<u8>) -> AppResult<Bytes>;
}

/// HTTP transport backed by a shared reqwest client
pub struct HttpTransport {
    client: Client,
    url: Url,
    log_url: String,
    credentials: Option<(String, String)>,
}

impl HttpTransport {
    /// Create a new transport from daemon configuration
    pub fn new(config: &DaemonConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let mut url = Url::parse(&config.rpc_url)
            .map_err(|e| AppError::Config(format!("Invalid daemon RPC URL: {}", e)))?;

        let credentials = config
            .credentials()
            .map(|(user, password)| (user.to_string(), password.to_string()));

        // reqwest turns URL userinfo into its own Authorization header
        if credentials.is_some() {
            strip_credentials(&mut url);
        }

        let mut log_url = url.clone();
        strip_credentials(&mut log_url);

        Ok(Self {
            client,
            url,
            log_url: log_url.to_string(),
            credentials,
        })
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn post(&self, method: &str, body: Vec<u8>) -> AppResult<Bytes> {
        LoggingUtils::log_call(method, &self.log_url);
        let started = Instant::now();

        let mut request = self
            .client
            .post(self.url.clone())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        if let Some((user, password)) = &self.credentials {
            request = request.basic_auth(user, Some(password));
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read response body: {}", e)))?;

        LoggingUtils::log_reply(method, status.as_u16(), bytes.len(), started.elapsed().as_millis() as u64);

        // an empty or non-JSON error page says nothing beyond its status
        if !status.is_success() && serde_json::from_slice::<serde_json::Value>(&bytes).is_err() {
            return Err(AppError::Http { status: status.as_u16() });
        }

        Ok(bytes)
    }
}
