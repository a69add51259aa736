//! Account abstraction (ERC-4337) bundler client
//!
//! [create_bundler_client] builds an ethers provider from a [ClientConfig] and exposes it with
//! the read-only [PublicActions] and the ERC-4337 [BundlerActions].
//! [create_bundler_client_from_existing] adds the bundler actions to a [PublicClient] that is
//! already set up.

pub mod actions;
mod client;
mod config;
mod error;
pub mod transport;

pub use actions::{BundlerActions, PublicActions, RpcClient};
pub use client::{
    create_bundler_client, create_bundler_client_from_existing, BundlerClient, PublicClient,
};
pub use config::ClientConfig;
pub use error::ClientError;
pub use transport::{
    http, http_with_config, mock, ws, HttpTransportConfig, ResolvedTransport, RpcTransport,
    TransportFactory, TransportKind,
};
