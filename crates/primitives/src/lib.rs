//! Account abstraction (ERC-4337) primitive types
//!
//! This crate contains the user operation types exchanged with bundlers and the constants
//! shared by the aa-sdk client and signer crates.

pub mod constants;
mod user_operation;
mod utils;

pub use user_operation::{
    UserOperation, UserOperationByHash, UserOperationGasEstimation, UserOperationHash,
    UserOperationReceipt, UserOperationRequest,
};
pub use utils::as_checksum;
