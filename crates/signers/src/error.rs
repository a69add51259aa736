use ethers::providers::ProviderError;
use thiserror::Error;

/// Error returned by the smart account signers
#[derive(Debug, Error)]
pub enum SignerError {
    /// A signing-family call was made before
    /// [authenticate](crate::SmartAccountAuthenticator::authenticate)
    #[error("Not authenticated")]
    NotAuthenticated,
    /// The wallet reported no account
    #[error("No address found")]
    NoAddress,
    /// Wallet transport error
    #[error(transparent)]
    Provider(#[from] ProviderError),
    /// Error reported by the custody provider
    #[error("Custody provider error: {0}")]
    Custody(Box<dyn std::error::Error + Send + Sync>),
    /// Typed data could not be serialized
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl SignerError {
    pub fn custody<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Custody(Box::new(err))
    }
}
