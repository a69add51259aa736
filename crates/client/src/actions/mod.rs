//! Action sets layered on top of a JSON-RPC client

mod bundler;
mod public;

pub use bundler::BundlerActions;
pub use public::PublicActions;

use ethers::providers::{JsonRpcClient, Provider};

/// A client owning an ethers [Provider]; the base every action set is built on
pub trait RpcClient: Send + Sync {
    type Transport: JsonRpcClient;

    /// The provider requests are sent through
    fn provider(&self) -> &Provider<Self::Transport>;
}
