//! Helpers for local and forked network development: resolve the account
//! that signs for the selected network and make sure a mock price feed is
//! deployed exactly once per network session.

pub mod account;
pub mod arguments;
pub mod config;
pub mod mocks;
pub mod network;
pub mod onchain;
pub mod registry;

use {
    crate::{account::Account, onchain::Onchain, registry::DeploymentStore},
    anyhow::Result,
};

pub async fn run(args: arguments::Arguments) -> Result<()> {
    let config = match &args.config {
        Some(path) => config::load(path).await?,
        None => Default::default(),
    };

    let node = Onchain::new(onchain::provider(&args.node_url)?);
    let account = account::resolve(&args.network, &node, &config.wallets).await?;

    // An offline account signs locally, so its signer has to be registered
    // with the provider that submits the deployment.
    let deployer = match &account {
        Account::Node(_) => node,
        Account::Offline(signer) => Onchain::new(onchain::provider_with_signer(
            &args.node_url,
            signer.clone(),
        )?),
    };

    let store = DeploymentStore::new(&args.deployments, &args.network);
    let feed = mocks::ensure_price_feed(&args.network, &store, &deployer, &account).await?;
    tracing::info!(%feed, "mock price feed available");
    Ok(())
}
