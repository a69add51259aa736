use crate::{
    actions::{BundlerActions, PublicActions, RpcClient},
    config::ClientConfig,
    error::ClientError,
    transport::{ResolvedTransport, RpcTransport, TransportFactory},
};
use aa_sdk_primitives::constants::{bundler_client, public_client};
use alloy_chains::Chain;
use ethers::providers::{JsonRpcClient, Provider};
use std::time::Duration;
use tracing::debug;

/// Client exposing the read-only [PublicActions]
#[derive(Debug)]
pub struct PublicClient<P> {
    provider: Provider<P>,
    key: String,
    name: String,
    chain: Option<Chain>,
}

impl<P: JsonRpcClient> PublicClient<P> {
    /// Wraps an existing provider
    pub fn new(provider: Provider<P>) -> Self {
        Self {
            provider,
            key: public_client::DEFAULT_KEY.to_string(),
            name: public_client::DEFAULT_NAME.to_string(),
            chain: None,
        }
    }

    pub fn with_chain(mut self, chain: Chain) -> Self {
        self.chain = Some(chain);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chain(&self) -> Option<&Chain> {
        self.chain.as_ref()
    }
}

impl<P: JsonRpcClient> From<Provider<P>> for PublicClient<P> {
    fn from(provider: Provider<P>) -> Self {
        Self::new(provider)
    }
}

impl<P: JsonRpcClient> RpcClient for PublicClient<P> {
    type Transport = P;

    fn provider(&self) -> &Provider<P> {
        &self.provider
    }
}

impl<P: JsonRpcClient> PublicActions for PublicClient<P> {}

/// Client exposing both the [PublicActions] and the [BundlerActions]
#[derive(Debug)]
pub struct BundlerClient<P> {
    provider: Provider<P>,
    key: String,
    name: String,
    chain: Option<Chain>,
    transport: Option<ResolvedTransport>,
}

impl<P: JsonRpcClient> BundlerClient<P> {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chain(&self) -> Option<&Chain> {
        self.chain.as_ref()
    }

    /// Always [CLIENT_TYPE](bundler_client::CLIENT_TYPE)
    pub fn client_type(&self) -> &'static str {
        bundler_client::CLIENT_TYPE
    }

    pub fn polling_interval(&self) -> Duration {
        self.provider.get_interval()
    }

    /// The transport the client was built with, `None` for clients built from an existing client
    pub fn transport(&self) -> Option<&ResolvedTransport> {
        self.transport.as_ref()
    }
}

impl<P: JsonRpcClient> RpcClient for BundlerClient<P> {
    type Transport = P;

    fn provider(&self) -> &Provider<P> {
        &self.provider
    }
}

impl<P: JsonRpcClient> PublicActions for BundlerClient<P> {}

impl<P: JsonRpcClient> BundlerActions for BundlerClient<P> {}

/// Creates a client with methods for calling bundler RPC methods
///
/// The chain is checked before the transport factory runs. HTTP transports are rebuilt with the
/// [SDK version header](aa_sdk_primitives::constants::SDK_VERSION_HEADER) added to the caller's
/// headers; other transports are used as resolved.
///
/// # Arguments
/// * `config` - The [ClientConfig](ClientConfig)
///
/// # Returns
/// * `Result<BundlerClient<RpcTransport>, ClientError>` - The client, or
///   [MissingChain](ClientError::MissingChain) if no chain is configured
pub async fn create_bundler_client<F: TransportFactory>(
    config: ClientConfig<F>,
) -> Result<BundlerClient<RpcTransport>, ClientError> {
    let ClientConfig { chain, transport, polling_interval, key, name } = config;

    let chain = chain.ok_or(ClientError::MissingChain)?;
    let key = key.unwrap_or_else(|| bundler_client::DEFAULT_KEY.to_string());
    let name = name.unwrap_or_else(|| bundler_client::DEFAULT_NAME.to_string());

    let resolved = match transport.resolve(&chain, polling_interval)? {
        ResolvedTransport::Http(http) => ResolvedTransport::Http(http.with_sdk_version_header()?),
        other => other,
    };

    debug!(%chain, %key, %name, kind = ?resolved.kind(), "Creating bundler client");

    let mut provider = Provider::new(resolved.connect().await?);
    if let Some(polling_interval) = polling_interval {
        provider = provider.interval(polling_interval);
    }

    Ok(BundlerClient { provider, key, name, chain: Some(chain), transport: Some(resolved) })
}

/// Adds the bundler RPC methods to an existing public client, keeping its transport
pub fn create_bundler_client_from_existing<P: JsonRpcClient>(
    client: PublicClient<P>,
) -> BundlerClient<P> {
    let PublicClient { provider, key, name, chain } = client;
    BundlerClient { provider, key, name, chain, transport: None }
}
