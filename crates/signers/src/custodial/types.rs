use crate::custodial::CustodyProvider;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strum::{AsRefStr, Display, EnumString};

/// Deployment environment of the custody provider
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Environment {
    #[strum(serialize = "DEVELOPMENT")]
    #[serde(rename = "DEVELOPMENT")]
    Development,
    #[strum(serialize = "SANDBOX")]
    #[serde(rename = "SANDBOX")]
    Sandbox,
    #[strum(serialize = "BETA")]
    #[serde(rename = "BETA")]
    Beta,
    #[strum(to_string = "PROD", serialize = "PRODUCTION")]
    #[serde(rename = "PROD", alias = "PRODUCTION")]
    Production,
}

/// Options of the ethers provider wrapping the wallet transport
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// Polling interval of the wallet provider, ethers' default when `None`
    pub polling_interval: Option<Duration>,
}

impl ClientOptions {
    pub fn polling_interval(mut self, polling_interval: Duration) -> Self {
        self.polling_interval = Some(polling_interval);
        self
    }
}

/// Credentials and options used to connect to a custody provider
pub struct CustodialConfig<P: CustodyProvider> {
    pub env: Environment,
    pub api_key: String,
    pub options: P::Options,
    pub wallet_config: P::WalletConfig,
    pub client_options: ClientOptions,
}

impl<P: CustodyProvider> CustodialConfig<P>
where
    P::Options: Default,
    P::WalletConfig: Default,
{
    /// Config with default provider options, wallet config and client options
    pub fn new(env: Environment, api_key: impl Into<String>) -> Self {
        Self {
            env,
            api_key: api_key.into(),
            options: Default::default(),
            wallet_config: Default::default(),
            client_options: Default::default(),
        }
    }
}

/// How a [CustodialSigner](crate::custodial::CustodialSigner) gets its provider handle
pub enum CustodialSignerParams<P: CustodyProvider> {
    /// Connect a new provider handle
    Config(CustodialConfig<P>),
    /// Reuse a provider handle and wallet transport that are already set up
    Existing { inner: P, client: P::Client },
}

impl<P: CustodyProvider> From<CustodialConfig<P>> for CustodialSignerParams<P> {
    fn from(config: CustodialConfig<P>) -> Self {
        Self::Config(config)
    }
}
