//! TOML configuration holding the secrets the deployer needs on networks
//! whose accounts are not managed by the node.

use {
    anyhow::{Context, Result},
    serde::Deserialize,
    std::path::Path,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub wallets: Wallets,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Wallets {
    /// Raw hex private key the deploying account is derived from on networks
    /// that are neither local nor forked.
    #[serde(default)]
    pub from_key: Option<String>,
}

/// Loads the deployer configuration from a TOML file.
pub async fn load(path: &Path) -> Result<Config> {
    let data = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("I/O error while reading {path:?}"))?;
    // Not printing the detailed error because it could leak private keys.
    toml::de::from_str(&data)
        .map_err(|_| anyhow::anyhow!("TOML syntax error while reading {path:?}"))
}
