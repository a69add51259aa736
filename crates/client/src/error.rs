use ethers::providers::ProviderError;
use thiserror::Error;

/// Errors raised while building or using a bundler client
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configuration carries no chain descriptor
    #[error("Chain must be provided")]
    MissingChain,

    /// A transport header could not be turned into a valid HTTP header
    #[error("Invalid header {name}: {message}")]
    InvalidHeader { name: String, message: String },

    /// The transport URL could not be parsed
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client backing the transport could not be built
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Error coming from the underlying transport or node
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
