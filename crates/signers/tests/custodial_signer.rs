use aa_sdk_signers::{
    ClientOptions, CustodialConfig, CustodialSigner, CustodyProvider, Environment, SignerError,
    SmartAccountAuthenticator, SmartAccountSigner,
};
use async_trait::async_trait;
use ethers::{
    providers::{JsonRpcClient, JsonRpcError, ProviderError, RpcError},
    signers::{LocalWallet, Signer, WalletError},
    types::{
        transaction::eip712::{Eip712, TypedData},
        Address, Bytes, Signature, H256,
    },
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

#[derive(Debug, thiserror::Error)]
enum LocalRpcError {
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Wallet(#[from] WalletError),
    #[error("unsupported method {0}")]
    Unsupported(String),
}

impl RpcError for LocalRpcError {
    fn as_error_response(&self) -> Option<&JsonRpcError> {
        None
    }

    fn as_serde_error(&self) -> Option<&serde_json::Error> {
        match self {
            Self::Serde(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LocalRpcError> for ProviderError {
    fn from(err: LocalRpcError) -> Self {
        ProviderError::JsonRpcClientError(Box::new(err))
    }
}

/// Wallet transport answering the wallet methods with a local key
#[derive(Clone, Debug)]
struct LocalWalletRpc {
    wallet: LocalWallet,
}

#[async_trait]
impl JsonRpcClient for LocalWalletRpc {
    type Error = LocalRpcError;

    async fn request<T, R>(&self, method: &str, params: T) -> Result<R, LocalRpcError>
    where
        T: Debug + Serialize + Send + Sync,
        R: DeserializeOwned + Send,
    {
        let params = serde_json::to_value(params)?;
        let result = match method {
            "eth_accounts" => serde_json::json!([self.wallet.address()]),
            "personal_sign" => {
                let (message, _): (Bytes, Address) = serde_json::from_value(params)?;
                let signature = self.wallet.sign_message(message.as_ref()).await?;
                serde_json::json!(Bytes::from(signature.to_vec()))
            }
            "eth_signTypedData_v4" => {
                let (_, data): (Address, String) = serde_json::from_value(params)?;
                let data: TypedData = serde_json::from_str(&data)?;
                let signature = self.wallet.sign_typed_data(&data).await?;
                serde_json::json!(Bytes::from(signature.to_vec()))
            }
            other => return Err(LocalRpcError::Unsupported(other.to_string())),
        };
        Ok(serde_json::from_value(result)?)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid api key")]
struct InvalidApiKey;

/// Custody provider keeping a single local key
#[derive(Debug)]
struct LocalCustody {
    wallet: LocalWallet,
}

#[async_trait]
impl CustodyProvider for LocalCustody {
    const SIGNER_TYPE: &'static str = "local-custody";

    type Client = LocalWalletRpc;
    type Wallets = Vec<Address>;
    type Options = LocalWallet;
    type WalletConfig = ();
    type Error = InvalidApiKey;

    fn connect(
        _env: Environment,
        api_key: &str,
        options: LocalWallet,
    ) -> Result<Self, InvalidApiKey> {
        if api_key.is_empty() {
            return Err(InvalidApiKey);
        }
        Ok(Self { wallet: options })
    }

    fn wallet_client(&self, _: &(), _: &ClientOptions) -> Result<LocalWalletRpc, InvalidApiKey> {
        Ok(LocalWalletRpc { wallet: self.wallet.clone() })
    }

    async fn get_wallets(&self) -> Result<Vec<Address>, InvalidApiKey> {
        Ok(vec![self.wallet.address()])
    }
}

fn local_wallet() -> LocalWallet {
    "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318".parse().unwrap()
}

fn signer() -> CustodialSigner<LocalCustody> {
    CustodialSigner::<LocalCustody>::new(CustodialConfig::<LocalCustody> {
        env: Environment::Beta,
        api_key: "api-key".to_string(),
        options: local_wallet(),
        wallet_config: (),
        client_options: ClientOptions::default(),
    })
    .unwrap()
}

fn mail() -> TypedData {
    serde_json::from_value(serde_json::json!({
        "types": {
            "EIP712Domain": [
                { "name": "name", "type": "string" },
                { "name": "version", "type": "string" },
                { "name": "chainId", "type": "uint256" },
                { "name": "verifyingContract", "type": "address" }
            ],
            "Person": [
                { "name": "name", "type": "string" },
                { "name": "wallet", "type": "address" }
            ],
            "Mail": [
                { "name": "from", "type": "Person" },
                { "name": "to", "type": "Person" },
                { "name": "contents", "type": "string" }
            ]
        },
        "primaryType": "Mail",
        "domain": {
            "name": "Ether Mail",
            "version": "1",
            "chainId": 1,
            "verifyingContract": "0xCcCCccccCCCCcCCCCCCcCcCccCcCCCcCcccccccC"
        },
        "message": {
            "from": { "name": "Cow", "wallet": "0xCD2a3d9F938E13CD947Ec05AbC7FE734Df8DD826" },
            "to": { "name": "Bob", "wallet": "0xbBbBBBBbbBBBbbbBbbBbbbbBBbBbbbbBbBbbBBbB" },
            "contents": "Hello, Bob!"
        }
    }))
    .unwrap()
}

#[tokio::test]
async fn custodial_signer_signs_with_custody_key() {
    let wallet = local_wallet();
    let mut signer = signer();

    assert!(matches!(signer.get_address().await, Err(SignerError::NotAuthenticated)));

    assert_eq!(signer.authenticate(()).await.unwrap(), vec![wallet.address()]);
    assert_eq!(signer.get_address().await.unwrap(), wallet.address());
    assert_eq!(signer.signer_type(), "local-custody");

    let signature = signer.sign_message("hello world".into()).await.unwrap();
    let signature = Signature::try_from(signature.as_ref()).unwrap();
    assert_eq!(signature.recover("hello world").unwrap(), wallet.address());

    let data = mail();
    let signature = signer.sign_typed_data(&data).await.unwrap();
    let signature = Signature::try_from(signature.as_ref()).unwrap();
    let digest = H256::from(data.encode_eip712().unwrap());
    assert_eq!(signature.recover(digest).unwrap(), wallet.address());
}

#[tokio::test]
async fn auth_details_are_custody_wallets() {
    let mut signer = signer();

    assert!(matches!(signer.get_auth_details().await, Err(SignerError::NotAuthenticated)));

    signer.authenticate(()).await.unwrap();

    assert_eq!(signer.get_auth_details().await.unwrap(), vec![local_wallet().address()]);
    assert_eq!(signer.inner().wallet.address(), local_wallet().address());
}
