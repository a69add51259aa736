use crate::{
    authenticator::{SignableMessage, SmartAccountAuthenticator, SmartAccountSigner},
    custodial::{ClientOptions, CustodialConfig, CustodialSignerParams, CustodyProvider},
    error::SignerError,
    wallet_client::WalletClientSigner,
};
use async_trait::async_trait;
use ethers::{
    providers::Provider,
    types::{transaction::eip712::TypedData, Address, Bytes},
};
use tracing::debug;

/// Authentication state of a [CustodialSigner]
#[derive(Debug)]
pub enum AuthState<C> {
    Unauthenticated,
    /// Holds the delegate signing over the wallet transport
    Authenticated(WalletClientSigner<C>),
}

/// [SmartAccountAuthenticator] backed by a wallet-custody provider
#[derive(Debug)]
pub struct CustodialSigner<P: CustodyProvider> {
    inner: P,
    client: P::Client,
    client_options: ClientOptions,
    state: AuthState<P::Client>,
}

impl<P: CustodyProvider> CustodialSigner<P> {
    /// Creates an unauthenticated signer
    ///
    /// # Arguments
    /// * `params` - Either the [CustodialConfig] to connect with, or an existing provider handle
    ///   and wallet transport
    ///
    /// # Returns
    /// * `Result<Self, SignerError>` - The signer, or [Custody](SignerError::Custody) if the
    ///   provider could not be connected
    pub fn new(params: impl Into<CustodialSignerParams<P>>) -> Result<Self, SignerError> {
        let (inner, client, client_options) = match params.into() {
            CustodialSignerParams::Config(CustodialConfig {
                env,
                api_key,
                options,
                wallet_config,
                client_options,
            }) => {
                debug!(signer_type = P::SIGNER_TYPE, %env, "Connecting custody provider");
                let inner = P::connect(env, &api_key, options).map_err(SignerError::custody)?;
                let client = inner
                    .wallet_client(&wallet_config, &client_options)
                    .map_err(SignerError::custody)?;
                (inner, client, client_options)
            }
            CustodialSignerParams::Existing { inner, client } => {
                (inner, client, ClientOptions::default())
            }
        };

        Ok(Self { inner, client, client_options, state: AuthState::Unauthenticated })
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated(_))
    }

    pub fn state(&self) -> &AuthState<P::Client> {
        &self.state
    }

    fn delegate(&self) -> Result<&WalletClientSigner<P::Client>, SignerError> {
        match &self.state {
            AuthState::Authenticated(signer) => Ok(signer),
            AuthState::Unauthenticated => Err(SignerError::NotAuthenticated),
        }
    }
}

#[async_trait]
impl<P: CustodyProvider> SmartAccountSigner for CustodialSigner<P> {
    fn signer_type(&self) -> &str {
        P::SIGNER_TYPE
    }

    async fn get_address(&self) -> Result<Address, SignerError> {
        self.delegate()?.address().await?.ok_or(SignerError::NoAddress)
    }

    async fn sign_message(&self, msg: SignableMessage) -> Result<Bytes, SignerError> {
        self.delegate()?.sign_message(msg).await
    }

    async fn sign_typed_data(&self, data: &TypedData) -> Result<Bytes, SignerError> {
        self.delegate()?.sign_typed_data(data).await
    }
}

#[async_trait]
impl<P: CustodyProvider> SmartAccountAuthenticator for CustodialSigner<P> {
    type AuthParams = ();
    type UserInfo = P::Wallets;
    type Inner = P;

    fn inner(&self) -> &P {
        &self.inner
    }

    async fn authenticate(&mut self, _params: ()) -> Result<P::Wallets, SignerError> {
        let mut provider = Provider::new(self.client.clone());
        if let Some(polling_interval) = self.client_options.polling_interval {
            provider = provider.interval(polling_interval);
        }
        let signer = WalletClientSigner::from_provider(provider, P::SIGNER_TYPE);

        let wallets = self.inner.get_wallets().await.map_err(SignerError::custody)?;

        if self.is_authenticated() {
            debug!(signer_type = P::SIGNER_TYPE, "Replacing custodial signer delegate");
        } else {
            debug!(signer_type = P::SIGNER_TYPE, "Custodial signer authenticated");
        }
        self.state = AuthState::Authenticated(signer);

        Ok(wallets)
    }

    async fn get_auth_details(&self) -> Result<P::Wallets, SignerError> {
        self.delegate()?;
        self.inner.get_wallets().await.map_err(SignerError::custody)
    }
}
