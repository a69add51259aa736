use super::RpcClient;
use async_trait::async_trait;
use ethers::{
    providers::{Middleware, ProviderError},
    types::{Address, Bytes, U256, U64},
};

/// Read-only network queries
#[async_trait]
pub trait PublicActions: RpcClient {
    /// Chain ID reported by the node
    async fn chain_id(&self) -> Result<U256, ProviderError> {
        self.provider().get_chainid().await
    }

    /// Latest block number
    async fn block_number(&self) -> Result<U64, ProviderError> {
        self.provider().get_block_number().await
    }

    /// Current gas price
    async fn gas_price(&self) -> Result<U256, ProviderError> {
        self.provider().get_gas_price().await
    }

    /// Suggested priority fee (`eth_maxPriorityFeePerGas`)
    async fn max_priority_fee_per_gas(&self) -> Result<U256, ProviderError> {
        self.provider().request("eth_maxPriorityFeePerGas", ()).await
    }

    /// Balance of an address at the latest block
    async fn balance_of(&self, address: Address) -> Result<U256, ProviderError> {
        self.provider().get_balance(address, None).await
    }

    /// Code deployed at an address at the latest block
    async fn code_at(&self, address: Address) -> Result<Bytes, ProviderError> {
        self.provider().get_code(address, None).await
    }
}
