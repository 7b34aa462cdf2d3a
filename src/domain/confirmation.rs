//! Settlement rule for wallet transactions

use crate::domain::coercion::coerce;
use crate::shared::error::{AppError, AppResult};
use serde_json::{Map, Value};

/// Confirmation threshold a transaction must reach to count as settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationPolicy {
    threshold: i64,
}

impl ConfirmationPolicy {
    pub fn new(threshold: i64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// Whether a `gettransaction` result has enough confirmations.
    ///
    /// The comparison is inclusive. A result without `confirmations`
    /// is `NoResult`.
    pub fn is_settled(&self, transaction: &Map<String, Value>) -> AppResult<bool> {
        let confirmations = transaction
            .get("confirmations")
            .map(coerce::<i64>)
            .ok_or(AppError::NoResult)?;

        Ok(confirmations >= self.threshold)
    }
}
