use crate::error::SignerError;
use async_trait::async_trait;
use ethers::types::{transaction::eip712::TypedData, Address, Bytes};

/// Message accepted by [SmartAccountSigner::sign_message]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignableMessage {
    /// UTF-8 text, signed as its bytes
    Text(String),
    /// Raw bytes
    Raw(Bytes),
}

impl SignableMessage {
    pub fn to_bytes(&self) -> Bytes {
        match self {
            Self::Text(text) => Bytes::from(text.as_bytes().to_vec()),
            Self::Raw(raw) => raw.clone(),
        }
    }
}

impl From<&str> for SignableMessage {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SignableMessage {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Bytes> for SignableMessage {
    fn from(raw: Bytes) -> Self {
        Self::Raw(raw)
    }
}

impl From<Vec<u8>> for SignableMessage {
    fn from(raw: Vec<u8>) -> Self {
        Self::Raw(raw.into())
    }
}

/// Signer backing a smart account
#[async_trait]
pub trait SmartAccountSigner: Send + Sync {
    /// Short identifier of the signer implementation
    fn signer_type(&self) -> &str;

    /// Address of the account the signer signs for
    async fn get_address(&self) -> Result<Address, SignerError>;

    /// Signs a message (EIP-191 `personal_sign`)
    async fn sign_message(&self, msg: SignableMessage) -> Result<Bytes, SignerError>;

    /// Signs EIP-712 typed data
    async fn sign_typed_data(&self, data: &TypedData) -> Result<Bytes, SignerError>;
}

/// A [SmartAccountSigner] that has to authenticate against its provider before signing
#[async_trait]
pub trait SmartAccountAuthenticator: SmartAccountSigner {
    /// Provider-specific authentication parameters
    type AuthParams: Send;
    /// Provider-specific user information returned on authentication
    type UserInfo: Send;
    /// The underlying provider handle
    type Inner;

    fn inner(&self) -> &Self::Inner;

    /// Authenticates with the provider and returns the user information
    async fn authenticate(
        &mut self,
        params: Self::AuthParams,
    ) -> Result<Self::UserInfo, SignerError>;

    /// Returns the user information of an authenticated signer
    async fn get_auth_details(&self) -> Result<Self::UserInfo, SignerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signable_message_bytes() {
        assert_eq!(SignableMessage::from("hi").to_bytes(), Bytes::from(vec![0x68, 0x69]));
        assert_eq!(SignableMessage::from(vec![1u8, 2, 3]).to_bytes(), Bytes::from(vec![1, 2, 3]));
    }
}
