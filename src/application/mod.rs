//! Application layer - wallet operations
//!
//! This module turns wallet calls into requests and decodes the replies.

pub mod services;

pub use services::*;
