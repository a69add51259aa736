//! Adapter turning a wallet-custody provider into a
//! [SmartAccountAuthenticator](crate::SmartAccountAuthenticator)
//!
//! The custody provider keeps the keys and exposes a wallet JSON-RPC transport. The
//! [CustodialSigner] forwards the signing-family calls to that transport once authenticated.
mod signer;
mod types;

pub use signer::{AuthState, CustodialSigner};
pub use types::{ClientOptions, CustodialConfig, CustodialSignerParams, Environment};

use async_trait::async_trait;
use ethers::providers::JsonRpcClient;
use std::fmt::Debug;

/// Capabilities the custody provider SDK offers to the adapter
#[async_trait]
pub trait CustodyProvider: Debug + Send + Sync + Sized {
    /// Reported by [signer_type](crate::SmartAccountSigner::signer_type)
    const SIGNER_TYPE: &'static str;

    /// Wallet transport answering `eth_accounts`, `personal_sign` and `eth_signTypedData_v4`
    type Client: JsonRpcClient + Clone + 'static;
    /// Wallets known to the provider for the current session
    type Wallets: Send;
    /// Provider SDK options
    type Options: Send;
    /// Wallet transport configuration
    type WalletConfig: Send;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates the provider handle
    fn connect(
        env: Environment,
        api_key: &str,
        options: Self::Options,
    ) -> Result<Self, Self::Error>;

    /// Builds the wallet transport bound to this handle
    fn wallet_client(
        &self,
        wallet_config: &Self::WalletConfig,
        options: &ClientOptions,
    ) -> Result<Self::Client, Self::Error>;

    async fn get_wallets(&self) -> Result<Self::Wallets, Self::Error>;
}
