//! aa-sdk constants

/// Version of the SDK, reported to bundlers over HTTP
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the header carrying [SDK_VERSION] on every HTTP request
pub const SDK_VERSION_HEADER: &str = "Alchemy-AA-Sdk-Version";

/// Entry point smart contract
pub mod entry_point {
    /// Address of the entry point smart contract
    pub const ADDRESS: &str = "0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789";
}

/// Bundler client
pub mod bundler_client {
    /// Key used when the configuration does not provide one
    pub const DEFAULT_KEY: &str = "bundler-public";
    /// Name used when the configuration does not provide one
    pub const DEFAULT_NAME: &str = "Public Bundler Client";
    /// Type tag of clients produced by the bundler client factory
    pub const CLIENT_TYPE: &str = "bundlerClient";
}

/// Public client
pub mod public_client {
    pub const DEFAULT_KEY: &str = "public";
    pub const DEFAULT_NAME: &str = "Public Client";
}

/// Bundler JSON-RPC methods (ERC-4337 `eth` namespace)
pub mod bundler_methods {
    pub const ESTIMATE_USER_OPERATION_GAS: &str = "eth_estimateUserOperationGas";
    pub const SEND_USER_OPERATION: &str = "eth_sendUserOperation";
    pub const GET_USER_OPERATION_BY_HASH: &str = "eth_getUserOperationByHash";
    pub const SUPPORTED_ENTRY_POINTS: &str = "eth_supportedEntryPoints";
    pub const GET_USER_OPERATION_RECEIPT: &str = "eth_getUserOperationReceipt";
}

/// Wallet JSON-RPC methods used by wallet-transport signers
pub mod wallet_methods {
    pub const ACCOUNTS: &str = "eth_accounts";
    pub const PERSONAL_SIGN: &str = "personal_sign";
    pub const SIGN_TYPED_DATA_V4: &str = "eth_signTypedData_v4";
}
