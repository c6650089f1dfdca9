use {
    crate::network::Network,
    clap::Parser,
    std::path::PathBuf,
    tracing::level_filters::LevelFilter,
    url::Url,
};

#[derive(Parser)]
pub struct Arguments {
    /// Name of the network to deploy against. Local and forked environments
    /// use the node's first pre-funded account; any other name requires
    /// `wallets.from-key` in the config file.
    #[clap(long, env, default_value = "development")]
    pub network: Network,

    /// The EVM node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Path to the TOML file holding wallet secrets. Only read for networks
    /// that are neither local nor forked.
    #[clap(long, env)]
    pub config: Option<PathBuf>,

    /// Directory the per-network deployment records live in.
    #[clap(long, env, default_value = "deployments")]
    pub deployments: PathBuf,

    #[clap(long, env, default_value = "warn,deployer=debug")]
    pub log_filter: String,

    #[clap(long, env, default_value = "error")]
    pub log_stderr_threshold: LevelFilter,
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "network: {}", self.network)?;
        writeln!(f, "node_url: {}", self.node_url)?;
        writeln!(f, "config: {:?}", self.config)?;
        writeln!(f, "deployments: {:?}", self.deployments)?;
        writeln!(f, "log_filter: {}", self.log_filter)?;
        writeln!(f, "log_stderr_threshold: {}", self.log_stderr_threshold)?;
        Ok(())
    }
}
