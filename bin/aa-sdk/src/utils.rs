use aa_sdk_primitives::UserOperationHash;
use alloy_chains::Chain;
use ethers::types::{Address, Bytes, U256};
use pin_utils::pin_mut;
use serde::Serialize;
use std::{future::Future, str::FromStr, time::Duration};
use tracing::info;

/// Parses address from string
pub fn parse_address(s: &str) -> Result<Address, String> {
    Address::from_str(s).map_err(|_| format!("String {s} is not a valid address"))
}

/// Parses U256 from string
pub fn parse_u256(s: &str) -> Result<U256, String> {
    U256::from_str_radix(s, 10).map_err(|_| format!("String {s} is not a valid U256"))
}

/// Parses hex encoded bytes from string
pub fn parse_bytes(s: &str) -> Result<Bytes, String> {
    Bytes::from_str(s).map_err(|_| format!("String {s} is not valid hex bytes"))
}

/// Parses user operation hash from string
pub fn parse_uo_hash(s: &str) -> Result<UserOperationHash, String> {
    UserOperationHash::from_str(s)
        .map_err(|_| format!("String {s} is not a valid user operation hash"))
}

/// Parses chain from its name or id
pub fn parse_chain(s: &str) -> Result<Chain, String> {
    Chain::from_str(s).map_err(|_| format!("String {s} is not a valid chain name or id"))
}

pub fn parse_duration(duration: &str) -> Result<Duration, String> {
    let millis: u64 = duration.parse().map_err(|_| format!("{duration} must be unsigned int"))?;
    Ok(Duration::from_millis(millis))
}

/// Parses `KEY:VALUE` header
pub fn parse_header(header: &str) -> Result<(String, String), String> {
    let (name, value) = header
        .split_once(':')
        .ok_or_else(|| format!("Header {header} is not a valid KEY:VALUE"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("Header {header} has an empty name"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

/// Prints the value as pretty JSON to stdout
pub fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Runs the future to completion or until:
/// - `ctrl-c` is received.
/// - `SIGTERM` is received (unix only).
pub async fn run_until_ctrl_c<F, E>(fut: F) -> Result<(), E>
where
    F: Future<Output = Result<(), E>>,
    E: Send + Sync + 'static + From<std::io::Error>,
{
    let ctrl_c = tokio::signal::ctrl_c();

    let mut stream = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
    let sigterm = stream.recv();
    pin_mut!(sigterm, ctrl_c, fut);

    tokio::select! {
        _ = ctrl_c => {
            info!("Received ctrl-c signal.");
        },
        _ = sigterm => {
            info!("Received SIGTERM signal.");
        },
        res = fut => res?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_chains::NamedChain;

    #[test]
    fn header_parsing() {
        assert_eq!(
            parse_header("x-api-key: secret").unwrap(),
            ("x-api-key".to_string(), "secret".to_string())
        );
        assert_eq!(
            parse_header("Authorization:Bearer a:b").unwrap(),
            ("Authorization".to_string(), "Bearer a:b".to_string())
        );
        assert!(parse_header("no-separator").is_err());
        assert!(parse_header(":value").is_err());
    }

    #[test]
    fn chain_parsing() {
        assert_eq!(parse_chain("mainnet").unwrap(), Chain::from_named(NamedChain::Mainnet));
        assert_eq!(parse_chain("11155111").unwrap(), Chain::from_named(NamedChain::Sepolia));
        assert!(parse_chain("not-a-chain").is_err());
    }

    #[test]
    fn hash_and_duration_parsing() {
        let hash = "0x95418c07086df02ff6bc9e8bdc150b380cb761beecc098630440bcec6e862702";
        assert_eq!(parse_uo_hash(hash).unwrap().to_string(), hash);
        assert!(parse_uo_hash("0x1234").is_err());
        assert_eq!(parse_duration("250").unwrap(), Duration::from_millis(250));
        assert!(parse_duration("-1").is_err());
    }
}
