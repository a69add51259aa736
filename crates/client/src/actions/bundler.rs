use super::RpcClient;
use aa_sdk_primitives::{
    constants::bundler_methods::{
        ESTIMATE_USER_OPERATION_GAS, GET_USER_OPERATION_BY_HASH, GET_USER_OPERATION_RECEIPT,
        SEND_USER_OPERATION, SUPPORTED_ENTRY_POINTS,
    },
    UserOperation, UserOperationByHash, UserOperationGasEstimation, UserOperationHash,
    UserOperationReceipt, UserOperationRequest,
};
use async_trait::async_trait;
use ethers::{providers::ProviderError, types::Address};
use tracing::trace;

/// The ERC-4337 bundler RPC methods
///
/// Responses are returned as decoded from the transport; nothing is retried or validated here.
#[async_trait]
pub trait BundlerActions: RpcClient {
    /// Estimate the gas required by a [UserOperation](UserOperation).
    ///
    /// # Arguments
    /// * `request` - A partial user operation; missing fields are filled in by the bundler
    /// * `entry_point` - The address of the entry point
    async fn estimate_user_operation_gas(
        &self,
        request: UserOperationRequest,
        entry_point: Address,
    ) -> Result<UserOperationGasEstimation, ProviderError> {
        trace!(?entry_point, "Estimating user operation gas");
        self.provider().request(ESTIMATE_USER_OPERATION_GAS, (request, entry_point)).await
    }

    /// Submit a signed [UserOperation](UserOperation) to the bundler.
    ///
    /// # Returns
    /// * The hash of the user operation as computed by the bundler
    async fn send_raw_user_operation(
        &self,
        user_operation: UserOperation,
        entry_point: Address,
    ) -> Result<UserOperationHash, ProviderError> {
        trace!(sender = ?user_operation.sender, ?entry_point, "Sending user operation");
        self.provider().request(SEND_USER_OPERATION, (user_operation, entry_point)).await
    }

    /// Retrieve a [UserOperation](UserOperation) by its hash, `None` if the bundler does not
    /// know it.
    async fn get_user_operation_by_hash(
        &self,
        hash: UserOperationHash,
    ) -> Result<Option<UserOperationByHash>, ProviderError> {
        self.provider().request(GET_USER_OPERATION_BY_HASH, [hash]).await
    }

    /// Entry points supported by the bundler
    async fn get_supported_entry_points(&self) -> Result<Vec<Address>, ProviderError> {
        self.provider().request(SUPPORTED_ENTRY_POINTS, ()).await
    }

    /// Retrieve the receipt of a [UserOperation](UserOperation), `None` while it is not included.
    async fn get_user_operation_receipt(
        &self,
        hash: UserOperationHash,
    ) -> Result<Option<UserOperationReceipt>, ProviderError> {
        self.provider().request(GET_USER_OPERATION_RECEIPT, [hash]).await
    }
}
