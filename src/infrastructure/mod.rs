//! Infrastructure layer - External concerns and adapters
//!
//! This module contains the HTTP transport to the daemon.

pub mod adapters;

pub use adapters::{HttpTransport, RpcTransport};
