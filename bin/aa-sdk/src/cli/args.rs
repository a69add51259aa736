use crate::utils::{parse_chain, parse_duration, parse_header};
use aa_sdk_client::{
    create_bundler_client, http_with_config, ws, BundlerClient, ClientConfig,
    HttpTransportConfig, RpcTransport, TransportFactory,
};
use alloy_chains::Chain;
use clap::Parser;
use std::time::Duration;
use tracing::warn;

/// Bundler client args
#[derive(Clone, Debug, Parser, PartialEq)]
pub struct BundlerClientArgs {
    /// Bundler RPC endpoint (`http(s)://` or `ws(s)://`).
    #[clap(long, default_value = "http://127.0.0.1:3000")]
    pub bundler_url: String,

    /// Chain name or id.
    #[clap(long, default_value = "mainnet", value_parser = parse_chain)]
    pub chain: Chain,

    /// Polling interval in milliseconds.
    #[clap(long, value_parser = parse_duration)]
    pub poll_interval: Option<Duration>,

    /// Extra HTTP header sent with every request (KEY:VALUE).
    #[clap(long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// HTTP request timeout in milliseconds.
    #[clap(long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,
}

impl BundlerClientArgs {
    /// Creates the bundler client, over WS for `ws(s)://` endpoints and HTTP otherwise
    pub async fn create_client(&self) -> eyre::Result<BundlerClient<RpcTransport>> {
        let client = if self.bundler_url.starts_with("ws") {
            if !self.headers.is_empty() || self.timeout.is_some() {
                warn!("Headers and timeout only apply to HTTP endpoints, ignoring them");
            }
            create_bundler_client(self.client_config(ws(self.bundler_url.clone()))).await?
        } else {
            let mut config = HttpTransportConfig::default();
            for (name, value) in &self.headers {
                config = config.header(name, value)?;
            }
            if let Some(timeout) = self.timeout {
                config = config.timeout(timeout);
            }
            create_bundler_client(
                self.client_config(http_with_config(self.bundler_url.clone(), config)),
            )
            .await?
        };

        Ok(client)
    }

    fn client_config<F: TransportFactory>(&self, transport: F) -> ClientConfig<F> {
        ClientConfig { polling_interval: self.poll_interval, ..ClientConfig::new(transport) }
            .chain(self.chain)
    }
}
