use crate::transport::TransportFactory;
use alloy_chains::Chain;
use std::time::Duration;

/// Configuration of the bundler client factory
///
/// `key` and `name` fall back to
/// [DEFAULT_KEY](aa_sdk_primitives::constants::bundler_client::DEFAULT_KEY) and
/// [DEFAULT_NAME](aa_sdk_primitives::constants::bundler_client::DEFAULT_NAME) when left unset.
#[derive(Clone, Debug)]
pub struct ClientConfig<F> {
    /// Chain the client talks to (required)
    pub chain: Option<Chain>,
    /// Factory producing the transport
    pub transport: F,
    /// Polling interval of the client
    pub polling_interval: Option<Duration>,
    /// Key of the client
    pub key: Option<String>,
    /// Display name of the client
    pub name: Option<String>,
}

impl<F: TransportFactory> ClientConfig<F> {
    /// Creates a configuration with only the transport factory set
    pub fn new(transport: F) -> Self {
        Self { chain: None, transport, polling_interval: None, key: None, name: None }
    }

    pub fn chain(mut self, chain: Chain) -> Self {
        self.chain = Some(chain);
        self
    }

    pub fn polling_interval(mut self, polling_interval: Duration) -> Self {
        self.polling_interval = Some(polling_interval);
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
