//! Names of the network environments the deployer distinguishes between.

/// Environments backed by an in-process development chain whose accounts are
/// pre-funded and unlocked.
pub const LOCAL_BLOCKCHAIN_ENVIRONMENTS: &[&str] = &["development", "ganache-local"];

/// Environments that fork mainnet state into a local node.
pub const FORKED_LOCAL_ENVIRONMENTS: &[&str] = &["mainnet-fork", "mainnet-fork-dev"];

/// The network environment an invocation runs against, selected by name on
/// the command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Network(String);

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether the deploying account comes from the node's pre-funded account
    /// list instead of the wallet configuration. Unrecognized names are not
    /// an error; they take the wallet configuration branch.
    pub fn is_local(&self) -> bool {
        LOCAL_BLOCKCHAIN_ENVIRONMENTS.contains(&self.0.as_str())
            || FORKED_LOCAL_ENVIRONMENTS.contains(&self.0.as_str())
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Network {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_chains_are_local() {
        for name in LOCAL_BLOCKCHAIN_ENVIRONMENTS
            .iter()
            .chain(FORKED_LOCAL_ENVIRONMENTS)
        {
            assert!(Network::new(*name).is_local(), "{name} should be local");
        }
    }

    #[test]
    fn live_chains_are_not_local() {
        for name in ["rinkeby", "mainnet", "sepolia", ""] {
            assert!(!Network::new(name).is_local(), "{name} should not be local");
        }
    }
}
