//! Smart account signers
//!
//! [SmartAccountSigner] and [SmartAccountAuthenticator] describe what a smart account expects
//! from its signer. [WalletClientSigner] signs through any wallet JSON-RPC transport and
//! [CustodialSigner] plugs a wallet-custody provider in behind the authenticator interface.
mod authenticator;
pub mod custodial;
mod error;
mod wallet_client;

pub use authenticator::{SignableMessage, SmartAccountAuthenticator, SmartAccountSigner};
pub use custodial::{
    AuthState, ClientOptions, CustodialConfig, CustodialSigner, CustodialSignerParams,
    CustodyProvider, Environment,
};
pub use error::SignerError;
pub use wallet_client::WalletClientSigner;
