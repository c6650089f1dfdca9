//! Boundary implementations backed by a live node connection.

use {
    crate::{
        account::{Account, NodeAccounts},
        mocks::FeedDeployer,
    },
    alloy::{
        network::EthereumWallet,
        primitives::{Address, I256},
        providers::{DynProvider, Provider, ProviderBuilder},
        signers::local::PrivateKeySigner,
    },
    anyhow::{Context, Result},
    contracts::MockV3Aggregator,
    url::Url,
};

/// Creates a provider whose transactions are signed by the node's unlocked
/// accounts.
pub fn provider(url: &Url) -> Result<DynProvider> {
    Ok(ProviderBuilder::new()
        .connect_http(url.as_str().parse().context("invalid node url")?)
        .erased())
}

/// Creates a provider that signs locally with `signer`.
pub fn provider_with_signer(url: &Url, signer: PrivateKeySigner) -> Result<DynProvider> {
    Ok(ProviderBuilder::new()
        .wallet(EthereumWallet::new(signer))
        .connect_http(url.as_str().parse().context("invalid node url")?)
        .erased())
}

pub struct Onchain {
    provider: DynProvider,
}

impl Onchain {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }
}

#[async_trait::async_trait]
impl NodeAccounts for Onchain {
    async fn accounts(&self) -> Result<Vec<Address>> {
        self.provider
            .get_accounts()
            .await
            .context("failed to query the node's accounts")
    }
}

#[async_trait::async_trait]
impl FeedDeployer for Onchain {
    async fn deploy(&self, decimals: u8, initial_answer: I256, from: &Account) -> Result<Address> {
        MockV3Aggregator::Instance::deploy_builder(
            self.provider.clone(),
            decimals,
            initial_answer,
        )
        .from(from.address())
        .deploy()
        .await
        .context("mock aggregator deployment failed")
    }
}
