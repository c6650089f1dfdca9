//! Resolution of the account that signs deployment transactions.

use {
    crate::{config::Wallets, network::Network},
    alloy::{primitives::Address, signers::local::PrivateKeySigner},
    anyhow::{Context, Result},
};

/// The account subsequent transactions are signed with.
#[derive(Clone, Debug)]
pub enum Account {
    /// Pre-funded account managed and unlocked by the test node; the node
    /// signs on its behalf.
    Node(Address),
    /// Account derived from the configured private key; transactions are
    /// signed locally.
    Offline(PrivateKeySigner),
}

impl Account {
    pub fn address(&self) -> Address {
        match self {
            Self::Node(address) => *address,
            Self::Offline(signer) => signer.address(),
        }
    }
}

/// The pre-funded accounts exposed by the connected node.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait NodeAccounts: Send + Sync {
    async fn accounts(&self) -> Result<Vec<Address>>;
}

/// Resolves the account that signs for `network`.
///
/// Local and forked environments use the first pre-funded node account and
/// never consult the wallet configuration. Every other network name derives
/// the account from `wallets.from-key`; a missing or malformed key is a fatal
/// misconfiguration surfaced to the caller.
pub async fn resolve(
    network: &Network,
    node: &dyn NodeAccounts,
    wallets: &Wallets,
) -> Result<Account> {
    if network.is_local() {
        let accounts = node
            .accounts()
            .await
            .context("failed to fetch the node's account list")?;
        let first = accounts
            .first()
            .copied()
            .with_context(|| format!("node for {network} exposes no pre-funded accounts"))?;
        return Ok(Account::Node(first));
    }

    let key = wallets
        .from_key
        .as_deref()
        .with_context(|| format!("wallets.from-key is not configured but {network} needs it"))?;
    let signer: PrivateKeySigner = key
        .parse()
        .map_err(|_| anyhow::anyhow!("wallets.from-key is not a valid private key"))?;
    Ok(Account::Offline(signer))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_ONE: &str = "0x0000000000000000000000000000000000000000000000000000000000000001";

    #[tokio::test]
    async fn local_network_uses_first_node_account() {
        let accounts = vec![Address::repeat_byte(0x11), Address::repeat_byte(0x22)];
        let mut node = MockNodeAccounts::new();
        node.expect_accounts()
            .times(1)
            .returning(move || Ok(accounts.clone()));

        // Even a configured key must not be consulted on this branch.
        let wallets = Wallets {
            from_key: Some("not even a valid key".to_string()),
        };
        let account = resolve(&Network::new("development"), &node, &wallets)
            .await
            .unwrap();
        assert_eq!(account.address(), Address::repeat_byte(0x11));
    }

    #[tokio::test]
    async fn forked_network_uses_first_node_account() {
        let mut node = MockNodeAccounts::new();
        node.expect_accounts()
            .times(1)
            .returning(|| Ok(vec![Address::repeat_byte(0x33)]));

        let account = resolve(&Network::new("mainnet-fork"), &node, &Wallets::default())
            .await
            .unwrap();
        assert_eq!(account.address(), Address::repeat_byte(0x33));
    }

    #[tokio::test]
    async fn live_network_derives_account_from_configured_key() {
        let mut node = MockNodeAccounts::new();
        node.expect_accounts().never();

        let wallets = Wallets {
            from_key: Some(KEY_ONE.to_string()),
        };
        let account = resolve(&Network::new("rinkeby"), &node, &wallets)
            .await
            .unwrap();
        let expected: PrivateKeySigner = KEY_ONE.parse().unwrap();
        assert_eq!(account.address(), expected.address());
    }

    #[tokio::test]
    async fn live_network_without_key_is_an_error() {
        let mut node = MockNodeAccounts::new();
        node.expect_accounts().never();

        let result = resolve(&Network::new("rinkeby"), &node, &Wallets::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn node_without_accounts_is_an_error() {
        let mut node = MockNodeAccounts::new();
        node.expect_accounts().times(1).returning(|| Ok(vec![]));

        let result = resolve(&Network::new("development"), &node, &Wallets::default()).await;
        assert!(result.is_err());
    }
}
