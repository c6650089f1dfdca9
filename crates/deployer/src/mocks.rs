//! The guard that keeps mock price feed deployments idempotent per network
//! session.

use {
    crate::{account::Account, network::Network},
    alloy::primitives::{Address, I256, U256},
    anyhow::{Context, Result},
};

/// Decimals reported by the mock feed. 8 and not 18 because consumers scale
/// the answer by a further 10 digits when converting to wei.
pub const DECIMALS: u8 = 8;

/// Initial feed answer: $2,000 at 8 decimals.
pub const STARTING_PRICE: I256 = I256::from_raw(U256::from_limbs([200_000_000_000, 0, 0, 0]));

/// The mock feeds recorded as deployed for one network session.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait FeedRegistry: Send + Sync {
    /// Addresses recorded so far, oldest first.
    async fn deployed(&self) -> Result<Vec<Address>>;

    /// Appends a freshly deployed feed.
    async fn record(&self, feed: Address) -> Result<()>;
}

/// Deploys one mock aggregator instance on chain.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait FeedDeployer: Send + Sync {
    async fn deploy(&self, decimals: u8, initial_answer: I256, from: &Account) -> Result<Address>;
}

/// Guarantees that exactly one mock price feed exists for `network`,
/// deploying one only when the registry has no entry yet. Returns the feed
/// the caller should use: the first recorded one, or the fresh deployment.
///
/// The registry check and the deployment are not atomic. Two processes
/// invoking this concurrently can both observe an empty registry and deploy
/// twice; the tool runs from a single developer shell, so no lock is taken.
///
/// A recorded feed also survives changes to the mock contract's artifact. To
/// pick up a new artifact, delete the network's deployments file and rerun.
pub async fn ensure_price_feed(
    network: &Network,
    registry: &dyn FeedRegistry,
    deployer: &dyn FeedDeployer,
    from: &Account,
) -> Result<Address> {
    tracing::info!(%network, "the active network");

    let deployed = registry
        .deployed()
        .await
        .context("failed to read the feed registry")?;
    if let Some(feed) = deployed.first() {
        tracing::info!(%feed, "mock price feed already deployed");
        return Ok(*feed);
    }

    tracing::info!("deploying mocks");
    let feed = deployer
        .deploy(DECIMALS, STARTING_PRICE, from)
        .await
        .context("failed to deploy the mock price feed")?;
    registry
        .record(feed)
        .await
        .context("failed to record the mock price feed")?;
    tracing::info!(%feed, "mocks deployed");
    Ok(feed)
}
