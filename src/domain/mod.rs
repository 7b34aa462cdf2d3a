//! Domain layer - reply decoding and wallet rules
//!
//! Everything here is pure: no I/O and no shared state.

pub mod coercion;
pub mod confirmation;
pub mod extraction;
pub mod rpc;
pub mod wallet;

pub use coercion::{coerce, format_decimal, Coerce};
pub use confirmation::ConfirmationPolicy;
pub use extraction::FromRpcResult;
pub use rpc::{ResponseEnvelope, RpcError, RpcRequest, NO_RESULT_CODE, NO_RESULT_MESSAGE};
pub use wallet::WalletInfo;
