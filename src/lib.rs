//! DigiByte wallet RPC client
//!
//! Typed access to a DigiByte daemon's wallet JSON-RPC methods. Replies are
//! decoded leniently: numbers may arrive as JSON numbers or numeric strings,
//! and daemon errors are classified from the reply envelope.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;


pub use application::WalletClient;
pub use config::AppConfig;
pub use domain::{RpcError, WalletInfo};
pub use shared::error::{AppError, AppResult};
