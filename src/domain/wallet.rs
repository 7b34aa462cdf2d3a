//! Wallet info record returned by `getwalletinfo`

use crate::domain::coercion::coerce;
use crate::domain::extraction::FromRpcResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Snapshot of the daemon's wallet state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletInfo {
    /// HD master key id
    pub hdmasterkeyid: String,
    pub walletname: String,
    pub walletversion: String,
    pub balance: f64,
    pub unconfirmed_balance: f64,
    /// Timestamp of the oldest pre-generated key in the key pool
    pub keypoololdest: f64,
    pub keypoolsize: i64,
    pub immature_balance: f64,
    pub txcount: i64,
    pub keypoolsize_hd_internal: i64,
    pub paytxfee: f64,
}

type FieldSetter = fn(&mut WalletInfo, &Value);

/// Daemon key to record field, each with its coercion
const FIELDS: &[(&str, FieldSetter)] = &[
    ("hdmasterkeyid", |w, v| w.hdmasterkeyid = coerce(v)),
    ("walletname", |w, v| w.walletname = coerce(v)),
    ("walletversion", |w, v| w.walletversion = coerce(v)),
    ("balance", |w, v| w.balance = coerce(v)),
    ("unconfirmed_balance", |w, v| w.unconfirmed_balance = coerce(v)),
    ("keypoololdest", |w, v| w.keypoololdest = coerce(v)),
    ("keypoolsize", |w, v| w.keypoolsize = coerce(v)),
    ("immature_balance", |w, v| w.immature_balance = coerce(v)),
    ("txcount", |w, v| w.txcount = coerce(v)),
    ("keypoolsize_hd_internal", |w, v| w.keypoolsize_hd_internal = coerce(v)),
    ("paytxfee", |w, v| w.paytxfee = coerce(v)),
];

impl WalletInfo {
    /// Build a record from a raw `getwalletinfo` object.
    ///
    /// Never fails: unknown keys are ignored, missing keys keep their
    /// defaults and unparsable values become zero or empty.
    pub fn from_raw(raw: &Map<String, Value>) -> Self {
        let mut info = WalletInfo::default();
        for (key, set) in FIELDS {
            if let Some(value) = raw.get(*key) {
                set(&mut info, value);
            }
        }
        info
    }

    #[cfg(test)]
    fn known_keys() -> impl Iterator<Item = &'static str> {
        FIELDS.iter().map(|(key, _)| *key)
    }
}

impl FromRpcResult for WalletInfo {
    fn from_result(value: &Value) -> Option<Self> {
        value.as_object().map(WalletInfo::from_raw)
    }
}
