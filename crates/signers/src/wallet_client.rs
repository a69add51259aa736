//! Signer over a wallet JSON-RPC transport
//!
//! Uses `eth_accounts`, `personal_sign` and `eth_signTypedData_v4`.
use crate::{
    authenticator::{SignableMessage, SmartAccountSigner},
    error::SignerError,
};
use aa_sdk_primitives::constants::wallet_methods;
use async_trait::async_trait;
use ethers::{
    providers::{JsonRpcClient, Provider},
    types::{transaction::eip712::TypedData, Address, Bytes},
};
use tracing::trace;

/// Signs through the wallet behind an ethers [Provider]
#[derive(Debug)]
pub struct WalletClientSigner<C> {
    provider: Provider<C>,
    signer_type: String,
}

impl<C: JsonRpcClient> WalletClientSigner<C> {
    pub fn new(client: C, signer_type: impl Into<String>) -> Self {
        Self::from_provider(Provider::new(client), signer_type)
    }

    pub fn from_provider(provider: Provider<C>, signer_type: impl Into<String>) -> Self {
        Self { provider, signer_type: signer_type.into() }
    }

    pub fn provider(&self) -> &Provider<C> {
        &self.provider
    }

    /// First account reported by the wallet, if any
    pub async fn address(&self) -> Result<Option<Address>, SignerError> {
        let accounts: Vec<Address> = self.provider.request(wallet_methods::ACCOUNTS, ()).await?;
        Ok(accounts.into_iter().next())
    }
}

#[async_trait]
impl<C: JsonRpcClient> SmartAccountSigner for WalletClientSigner<C> {
    fn signer_type(&self) -> &str {
        &self.signer_type
    }

    async fn get_address(&self) -> Result<Address, SignerError> {
        self.address().await?.ok_or(SignerError::NoAddress)
    }

    async fn sign_message(&self, msg: SignableMessage) -> Result<Bytes, SignerError> {
        let address = self.get_address().await?;
        trace!(?address, "Signing message");
        Ok(self.provider.request(wallet_methods::PERSONAL_SIGN, (msg.to_bytes(), address)).await?)
    }

    async fn sign_typed_data(&self, data: &TypedData) -> Result<Bytes, SignerError> {
        let address = self.get_address().await?;
        let data = serde_json::to_string(data)?;
        trace!(?address, "Signing typed data");
        Ok(self.provider.request(wallet_methods::SIGN_TYPED_DATA_V4, (address, data)).await?)
    }
}
