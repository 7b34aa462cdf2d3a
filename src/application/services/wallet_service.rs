//! Wallet service exposing one typed operation per daemon RPC method

use crate::config::DaemonConfig;
use crate::domain::coercion::format_decimal;
use crate::domain::confirmation::ConfirmationPolicy;
use crate::domain::extraction::FromRpcResult;
use crate::domain::rpc::{ResponseEnvelope, RpcRequest};
use crate::domain::wallet::WalletInfo;
use crate::infrastructure::adapters::{HttpTransport, RpcTransport};
use crate::shared::error::AppResult;
use crate::shared::validation::ValidationUtils;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Typed client for the daemon's wallet RPC methods
#[derive(Clone)]
pub struct WalletClient {
    transport: Arc<dyn RpcTransport>,
    policy: ConfirmationPolicy,
}

impl WalletClient {
    /// Create a client talking HTTP to the configured daemon
    pub fn new(config: &DaemonConfig) -> AppResult<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport), config.confirmations))
    }

    /// Create a client over any transport (for testing/DI)
    pub fn with_transport(transport: Arc<dyn RpcTransport>, confirmations: i64) -> Self {
        Self {
            transport,
            policy: ConfirmationPolicy::new(confirmations),
        }
    }

    /// Confirmation threshold used by [`Self::check_transaction`]
    pub fn confirmations(&self) -> i64 {
        self.policy.threshold()
    }

    /// Generate a new receiving address (`getnewaddress`)
    pub async fn create_address(&self) -> AppResult<String> {
        self.call("getnewaddress", Vec::new()).await
    }

    /// Total wallet balance (`getbalance`)
    pub async fn get_balance(&self) -> AppResult<f64> {
        self.call("getbalance", Vec::new()).await
    }

    /// Amount received by `address` with at least the configured
    /// confirmations (`getreceivedbyaddress`)
    pub async fn get_balance_by_address(&self, address: &str) -> AppResult<f64> {
        ValidationUtils::validate_address(address)?;
        self.call(
            "getreceivedbyaddress",
            vec![json!(address), json!(self.policy.threshold())],
        )
        .await
    }

    /// Wallet state snapshot (`getwalletinfo`)
    pub async fn get_wallet_info(&self) -> AppResult<WalletInfo> {
        self.call("getwalletinfo", Vec::new()).await
    }

    /// Send `amount` to `address`, returning the txid (`sendtoaddress`)
    pub async fn send_to_address(&self, address: &str, amount: f64) -> AppResult<String> {
        ValidationUtils::validate_address(address)?;
        ValidationUtils::validate_amount(amount)?;
        self.call(
            "sendtoaddress",
            vec![json!(address), json!(format_decimal(amount))],
        )
        .await
    }

    /// Raw wallet transaction (`gettransaction`).
    ///
    /// Returns `{}` rather than failing when the reply has no object result.
    pub async fn get_transaction(&self, txid: &str) -> AppResult<Map<String, Value>> {
        ValidationUtils::validate_txid(txid)?;
        let envelope = self.send(RpcRequest::new("gettransaction", vec![json!(txid)])).await?;
        Ok(envelope.extract_opaque())
    }

    /// Whether a wallet transaction reached the confirmation threshold
    pub async fn check_transaction(&self, txid: &str) -> AppResult<bool> {
        ValidationUtils::validate_txid(txid)?;
        let transaction: Map<String, Value> = self.call("gettransaction", vec![json!(txid)]).await?;
        self.policy.is_settled(&transaction)
    }

    /// Set the wallet fee rate per kB (`settxfee`)
    pub async fn set_fee(&self, fee: f64) -> AppResult<bool> {
        ValidationUtils::validate_fee(fee)?;
        self.call("settxfee", vec![json!(format_decimal(fee))]).await
    }

    /// Call any wallet method and read its `result` as `T`
    pub async fn call<T: FromRpcResult>(&self, method: &str, params: Vec<Value>) -> AppResult<T> {
        self.send(RpcRequest::new(method, params)).await?.extract()
    }

    async fn send(&self, request: RpcRequest) -> AppResult<ResponseEnvelope> {
        let body = request.to_bytes()?;
        let reply = self.transport.post(&request.method, body).await?;
        ResponseEnvelope::decode(&reply)
    }
}
