use super::args::BundlerClientArgs;
use crate::utils::{parse_address, parse_bytes, parse_u256, parse_uo_hash, print_json};
use aa_sdk_client::{BundlerActions, PublicActions};
use aa_sdk_primitives::{constants::entry_point, UserOperationHash, UserOperationRequest};
use alloy_chains::Chain;
use clap::Parser;
use ethers::types::{Address, Bytes, U256};
use tracing::{info, warn};

/// Print the chain id reported by the bundler
#[derive(Debug, Parser)]
pub struct ChainIdCommand {
    #[clap(flatten)]
    pub client: BundlerClientArgs,
}

impl ChainIdCommand {
    /// Execute the command
    pub async fn execute(self) -> eyre::Result<()> {
        let client = self.client.create_client().await?;
        let chain_id = client.chain_id().await?;
        if !serves_chain(&self.client.chain, chain_id) {
            warn!(expected = self.client.chain.id(), %chain_id, "Bundler serves a different chain");
        }
        println!("{chain_id}");
        Ok(())
    }
}

fn serves_chain(chain: &Chain, reported: U256) -> bool {
    reported == U256::from(chain.id())
}

/// Print the entry points supported by the bundler
#[derive(Debug, Parser)]
pub struct EntryPointsCommand {
    #[clap(flatten)]
    pub client: BundlerClientArgs,
}

impl EntryPointsCommand {
    /// Execute the command
    pub async fn execute(self) -> eyre::Result<()> {
        let client = self.client.create_client().await?;
        print_json(&client.get_supported_entry_points().await?)
    }
}

/// Look up a user operation by its hash
#[derive(Debug, Parser)]
pub struct UserOperationCommand {
    /// User operation hash.
    #[clap(value_parser = parse_uo_hash)]
    pub hash: UserOperationHash,

    #[clap(flatten)]
    pub client: BundlerClientArgs,
}

impl UserOperationCommand {
    /// Execute the command
    pub async fn execute(self) -> eyre::Result<()> {
        let client = self.client.create_client().await?;
        match client.get_user_operation_by_hash(self.hash).await? {
            Some(uo) => print_json(&uo),
            None => {
                info!(hash = %self.hash, "User operation not found");
                Ok(())
            }
        }
    }
}

/// Look up the receipt of a user operation
#[derive(Debug, Parser)]
pub struct ReceiptCommand {
    /// User operation hash.
    #[clap(value_parser = parse_uo_hash)]
    pub hash: UserOperationHash,

    #[clap(flatten)]
    pub client: BundlerClientArgs,
}

impl ReceiptCommand {
    /// Execute the command
    pub async fn execute(self) -> eyre::Result<()> {
        let client = self.client.create_client().await?;
        match client.get_user_operation_receipt(self.hash).await? {
            Some(receipt) => print_json(&receipt),
            None => {
                info!(hash = %self.hash, "User operation receipt not found");
                Ok(())
            }
        }
    }
}

/// Estimate the gas of a user operation
#[derive(Debug, Parser)]
pub struct EstimateGasCommand {
    /// Sender (smart account) address.
    #[clap(long, value_parser = parse_address)]
    pub sender: Address,

    /// Call data executed by the sender.
    #[clap(long, value_parser = parse_bytes)]
    pub call_data: Bytes,

    /// Nonce of the sender.
    #[clap(long, value_parser = parse_u256)]
    pub nonce: Option<U256>,

    /// Init code deploying the sender.
    #[clap(long, value_parser = parse_bytes)]
    pub init_code: Option<Bytes>,

    /// Entry point address.
    #[clap(long, value_parser = parse_address, default_value = entry_point::ADDRESS)]
    pub entry_point: Address,

    #[clap(flatten)]
    pub client: BundlerClientArgs,
}

impl EstimateGasCommand {
    /// Execute the command
    pub async fn execute(self) -> eyre::Result<()> {
        let client = self.client.create_client().await?;
        let request = UserOperationRequest {
            sender: Some(self.sender),
            nonce: self.nonce,
            init_code: self.init_code,
            call_data: Some(self.call_data),
            ..Default::default()
        };
        let estimation = client.estimate_user_operation_gas(request, self.entry_point).await?;
        print_json(&estimation)
    }
}
