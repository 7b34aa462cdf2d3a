//! Application services - Orchestration of domain logic

pub mod wallet_service;

pub use wallet_service::WalletClient;
