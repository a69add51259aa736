//! Transports backing the bundler client
//!
//! A [TransportFactory] is invoked by the client factory with the chain and the polling
//! interval and returns a [ResolvedTransport] describing how to reach the node. The resolved
//! transport is then turned into an [RpcTransport], the ethers [JsonRpcClient] that actually
//! performs the requests.

use crate::error::ClientError;
use aa_sdk_primitives::constants::{SDK_VERSION, SDK_VERSION_HEADER};
use alloy_chains::Chain;
use async_trait::async_trait;
use ethers::providers::{Http, JsonRpcClient, MockProvider, ProviderError, Ws};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{de::DeserializeOwned, Serialize};
use std::{fmt::Debug, time::Duration};
use tracing::trace;
use url::Url;

/// Kind of a resolved transport
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportKind {
    Http,
    Ws,
    Mock,
}

/// Options of an HTTP transport
#[derive(Clone, Debug, Default)]
pub struct HttpTransportConfig {
    /// Headers sent with every request
    pub headers: HeaderMap,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl HttpTransportConfig {
    /// Adds a header sent with every request
    ///
    /// # Arguments
    /// * `name` - The header name
    /// * `value` - The header value
    ///
    /// # Returns
    /// * `Result<Self, ClientError>` - The updated config, or an error if the header is invalid
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, ClientError> {
        let (name, value) = parse_header(name, value)?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Sets the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// HTTP transport: the endpoint URL and its options
#[derive(Clone, Debug)]
pub struct HttpTransport {
    pub url: Url,
    pub config: HttpTransportConfig,
}

impl HttpTransport {
    /// Returns a copy of this transport with the SDK version header merged into the headers.
    /// Every other option and header is kept as is.
    pub fn with_sdk_version_header(&self) -> Result<Self, ClientError> {
        let mut config = self.config.clone();
        let (name, value) = parse_header(SDK_VERSION_HEADER, SDK_VERSION)?;
        config.headers.insert(name, value);
        Ok(Self { url: self.url.clone(), config })
    }

    /// Builds the ethers HTTP client for this transport
    pub fn connect(&self) -> Result<Http, ClientError> {
        let mut builder = reqwest::Client::builder().default_headers(self.config.headers.clone());
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Http::new_with_client(self.url.clone(), builder.build()?))
    }
}

/// WebSocket transport
#[derive(Clone, Debug)]
pub struct WsTransport {
    pub url: String,
}

impl WsTransport {
    /// Connects to the WebSocket endpoint
    pub async fn connect(&self) -> Result<Ws, ClientError> {
        Ws::connect(self.url.as_str()).await.map_err(|err| ClientError::Provider(err.into()))
    }
}

/// Transport returned by a [TransportFactory]
#[derive(Clone, Debug)]
pub enum ResolvedTransport {
    Http(HttpTransport),
    Ws(WsTransport),
    /// In-memory transport (tests, offline tooling)
    Mock(MockProvider),
}

impl ResolvedTransport {
    pub fn kind(&self) -> TransportKind {
        match self {
            ResolvedTransport::Http(_) => TransportKind::Http,
            ResolvedTransport::Ws(_) => TransportKind::Ws,
            ResolvedTransport::Mock(_) => TransportKind::Mock,
        }
    }

    /// Headers attached to every request (HTTP transports only)
    pub fn headers(&self) -> Option<&HeaderMap> {
        match self {
            ResolvedTransport::Http(http) => Some(&http.config.headers),
            _ => None,
        }
    }

    /// Establishes the connection described by this transport
    pub async fn connect(&self) -> Result<RpcTransport, ClientError> {
        Ok(match self {
            ResolvedTransport::Http(http) => RpcTransport::Http(http.connect()?),
            ResolvedTransport::Ws(ws) => RpcTransport::Ws(ws.connect().await?),
            ResolvedTransport::Mock(mock) => RpcTransport::Mock(mock.clone()),
        })
    }
}

/// Builds a [ResolvedTransport] for a chain
pub trait TransportFactory {
    /// Resolves the transport
    ///
    /// # Arguments
    /// * `chain` - The chain the client is created for
    /// * `polling_interval` - The polling interval of the client, if configured
    fn resolve(
        &self,
        chain: &Chain,
        polling_interval: Option<Duration>,
    ) -> Result<ResolvedTransport, ClientError>;
}

impl<F> TransportFactory for F
where
    F: Fn(&Chain, Option<Duration>) -> Result<ResolvedTransport, ClientError>,
{
    fn resolve(
        &self,
        chain: &Chain,
        polling_interval: Option<Duration>,
    ) -> Result<ResolvedTransport, ClientError> {
        self(chain, polling_interval)
    }
}

/// Factory of HTTP transports, see [http] and [http_with_config]
#[derive(Clone, Debug)]
pub struct HttpTransportFactory {
    url: String,
    config: HttpTransportConfig,
}

impl TransportFactory for HttpTransportFactory {
    fn resolve(
        &self,
        chain: &Chain,
        polling_interval: Option<Duration>,
    ) -> Result<ResolvedTransport, ClientError> {
        trace!(%chain, ?polling_interval, url = %self.url, "Resolving HTTP transport");
        Ok(ResolvedTransport::Http(HttpTransport {
            url: Url::parse(&self.url)?,
            config: self.config.clone(),
        }))
    }
}

/// Factory of WebSocket transports, see [ws]
#[derive(Clone, Debug)]
pub struct WsTransportFactory {
    url: String,
}

impl TransportFactory for WsTransportFactory {
    fn resolve(
        &self,
        chain: &Chain,
        polling_interval: Option<Duration>,
    ) -> Result<ResolvedTransport, ClientError> {
        trace!(%chain, ?polling_interval, url = %self.url, "Resolving WS transport");
        Ok(ResolvedTransport::Ws(WsTransport { url: self.url.clone() }))
    }
}

/// Factory of in-memory transports, see [mock]
#[derive(Clone, Debug)]
pub struct MockTransportFactory(MockProvider);

impl TransportFactory for MockTransportFactory {
    fn resolve(
        &self,
        _chain: &Chain,
        _polling_interval: Option<Duration>,
    ) -> Result<ResolvedTransport, ClientError> {
        Ok(ResolvedTransport::Mock(self.0.clone()))
    }
}

/// HTTP transport with default options
pub fn http(url: impl Into<String>) -> HttpTransportFactory {
    http_with_config(url, HttpTransportConfig::default())
}

/// HTTP transport with custom options (headers, timeout)
pub fn http_with_config(
    url: impl Into<String>,
    config: HttpTransportConfig,
) -> HttpTransportFactory {
    HttpTransportFactory { url: url.into(), config }
}

/// WebSocket transport
pub fn ws(url: impl Into<String>) -> WsTransportFactory {
    WsTransportFactory { url: url.into() }
}

/// In-memory transport answering from the given ethers mock provider
pub fn mock(provider: MockProvider) -> MockTransportFactory {
    MockTransportFactory(provider)
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), ClientError> {
    let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
        ClientError::InvalidHeader { name: name.to_string(), message: err.to_string() }
    })?;
    let header_value = HeaderValue::from_str(value).map_err(|err| ClientError::InvalidHeader {
        name: name.to_string(),
        message: err.to_string(),
    })?;
    Ok((header_name, header_value))
}

/// Connected transport used by clients built through the bundler client factory
#[derive(Debug)]
pub enum RpcTransport {
    Http(Http),
    Ws(Ws),
    Mock(MockProvider),
}

impl RpcTransport {
    pub fn kind(&self) -> TransportKind {
        match self {
            RpcTransport::Http(_) => TransportKind::Http,
            RpcTransport::Ws(_) => TransportKind::Ws,
            RpcTransport::Mock(_) => TransportKind::Mock,
        }
    }
}

#[async_trait]
impl JsonRpcClient for RpcTransport {
    type Error = ProviderError;

    async fn request<T, R>(&self, method: &str, params: T) -> Result<R, Self::Error>
    where
        T: Debug + Serialize + Send + Sync,
        R: DeserializeOwned + Send,
    {
        match self {
            RpcTransport::Http(http) => http.request(method, params).await.map_err(Into::into),
            RpcTransport::Ws(ws) => ws.request(method, params).await.map_err(Into::into),
            RpcTransport::Mock(mock) => mock.request(method, params).await.map_err(Into::into),
        }
    }
}
