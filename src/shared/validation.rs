//! Validation utilities module
//!
//! Checks run on wallet call arguments before a request is sent.

use crate::shared::error::{AppError, AppResult};
use regex::Regex;

const BASE58_ADDRESS_PATTERN: &str = r"^[1-9A-HJ-NP-Za-km-z]{25,35}$";
const BECH32_ADDRESS_PATTERN: &str = r"^(?i:(dgb|dgbt|dgbrt)1[02-9ac-hj-np-z]{6,87})$";
const TXID_PATTERN: &str = r"^[0-9a-fA-F]{64}$";

/// Validation utilities for wallet call arguments
pub struct ValidationUtils;

impl ValidationUtils {
    /// Validate a legacy (base58) or segwit (bech32) address
    pub fn validate_address(address: &str) -> AppResult<()> {
        if address.is_empty() {
            return Err(AppError::Validation("Address cannot be empty".to_string()));
        }

        if Self::matches(BASE58_ADDRESS_PATTERN, address)? || Self::matches(BECH32_ADDRESS_PATTERN, address)? {
            Ok(())
        } else {
            Err(AppError::Validation(format!("Invalid address format: {}", address)))
        }
    }

    /// Validate a transaction id (64 hex characters)
    pub fn validate_txid(txid: &str) -> AppResult<()> {
        if Self::matches(TXID_PATTERN, txid)? {
            Ok(())
        } else {
            Err(AppError::Validation(format!("Invalid transaction id: {}", txid)))
        }
    }

    /// Validate an amount to send; must be finite and positive
    pub fn validate_amount(amount: f64) -> AppResult<()> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::Validation(format!("Amount must be a positive number, got {}", amount)));
        }

        Ok(())
    }

    /// Validate a fee rate; zero resets the wallet to its default
    pub fn validate_fee(fee: f64) -> AppResult<()> {
        if !fee.is_finite() || fee < 0.0 {
            return Err(AppError::Validation(format!("Fee must be a non-negative number, got {}", fee)));
        }

        Ok(())
    }

    fn matches(pattern: &str, input: &str) -> AppResult<bool> {
        match Regex::new(pattern) {
            Ok(re) => Ok(re.is_match(input)),
            Err(e) => Err(AppError::Validation(format!("Invalid validation pattern: {}", e))),
        }
    }
}
