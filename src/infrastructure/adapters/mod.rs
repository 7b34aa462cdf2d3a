//! Infrastructure adapters module
//!
//! This module contains adapters for external services.

pub mod external_rpc;

pub use external_rpc::{HttpTransport, RpcTransport};
