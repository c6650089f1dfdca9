//! File-backed record of contract deployments, one JSON file per network.

use {
    crate::{mocks::FeedRegistry, network::Network},
    alloy::primitives::Address,
    anyhow::{Context, Result},
    serde::{Deserialize, Serialize},
    std::{
        collections::BTreeMap,
        path::{Path, PathBuf},
    },
};

/// Name mock aggregator deployments are recorded under.
const MOCK_V3_AGGREGATOR: &str = "MockV3Aggregator";

/// Maps contract names to the addresses deployed for them, oldest first.
#[derive(Debug, Default, Deserialize, Serialize)]
struct Deployments(BTreeMap<String, Vec<Address>>);

/// The deployments file of one network. Deleting the file resets the
/// network's session; nothing else ever removes an entry.
pub struct DeploymentStore {
    path: PathBuf,
}

impl DeploymentStore {
    pub fn new(dir: &Path, network: &Network) -> Self {
        Self {
            path: dir.join(format!("{}.json", network.name())),
        }
    }

    async fn read(&self) -> Result<Deployments> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Deployments::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {:?}", self.path));
            }
        };
        serde_json::from_str(&data)
            .with_context(|| format!("malformed deployments file {:?}", self.path))
    }

    async fn write(&self, deployments: &Deployments) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("failed to create deployments directory {dir:?}"))?;
        }
        let data = serde_json::to_string_pretty(deployments)
            .context("failed to serialize deployments")?;
        tokio::fs::write(&self.path, data)
            .await
            .with_context(|| format!("failed to write {:?}", self.path))
    }
}

#[async_trait::async_trait]
impl FeedRegistry for DeploymentStore {
    async fn deployed(&self) -> Result<Vec<Address>> {
        Ok(self
            .read()
            .await?
            .0
            .get(MOCK_V3_AGGREGATOR)
            .cloned()
            .unwrap_or_default())
    }

    async fn record(&self, feed: Address) -> Result<()> {
        let mut deployments = self.read().await?;
        deployments
            .0
            .entry(MOCK_V3_AGGREGATOR.to_string())
            .or_default()
            .push(feed);
        self.write(&deployments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeploymentStore::new(dir.path(), &Network::new("development"));
        assert!(store.deployed().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn records_append_per_network() {
        let dir = tempfile::tempdir().unwrap();
        let network = Network::new("development");
        let store = DeploymentStore::new(dir.path(), &network);

        store.record(Address::repeat_byte(0x01)).await.unwrap();
        store.record(Address::repeat_byte(0x02)).await.unwrap();
        assert_eq!(
            store.deployed().await.unwrap(),
            vec![Address::repeat_byte(0x01), Address::repeat_byte(0x02)],
        );

        // Another network's session is unaffected.
        let other = DeploymentStore::new(dir.path(), &Network::new("mainnet-fork"));
        assert!(other.deployed().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn guard_deploys_into_the_store_only_once() {
        use crate::{
            account::Account,
            mocks::{self, MockFeedDeployer},
        };

        let dir = tempfile::tempdir().unwrap();
        let network = Network::new("development");
        let store = DeploymentStore::new(dir.path(), &network);
        let account = Account::Node(Address::repeat_byte(0xaa));

        let mut deployer = MockFeedDeployer::new();
        deployer
            .expect_deploy()
            .times(1)
            .returning(|_, _, _| Ok(Address::repeat_byte(0x05)));

        let first = mocks::ensure_price_feed(&network, &store, &deployer, &account)
            .await
            .unwrap();
        assert_eq!(store.deployed().await.unwrap().len(), 1);

        let second = mocks::ensure_price_feed(&network, &store, &deployer, &account)
            .await
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(store.deployed().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn survives_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let network = Network::new("ganache-local");
        let feed = Address::repeat_byte(0x42);

        DeploymentStore::new(dir.path(), &network)
            .record(feed)
            .await
            .unwrap();
        let reopened = DeploymentStore::new(dir.path(), &network);
        assert_eq!(reopened.deployed().await.unwrap(), vec![feed]);
    }
}
