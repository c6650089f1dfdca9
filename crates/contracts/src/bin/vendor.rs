//! Vendors hardhat JSON artifacts from published npm packages so code
//! generation does not have to hit the network at build time.

use {
    anyhow::{Context, Result},
    serde_json::{Map, Value},
    std::fs,
};

// unpkg path and local file name
const NPM_CONTRACTS: &[(&str, &str)] = &[(
    "@chainlink/contracts@0.8.0/artifacts/src/v0.8/tests/MockV3Aggregator.sol/MockV3Aggregator.json",
    "MockV3Aggregator.json",
)];

#[tokio::main]
async fn main() {
    observe_init();

    if let Err(err) = run().await {
        tracing::error!("error vendoring contracts: {:?}", err);
        std::process::exit(1);
    }
}

// The vendor binary must not depend on the workspace's observe crate (that
// would invert the dependency between the crates), so it sets up its own
// minimal subscriber.
fn observe_init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,vendor=info".into()),
        )
        .init();
}

async fn run() -> Result<()> {
    let artifacts = contracts::paths::contract_artifacts_dir();
    fs::create_dir_all(&artifacts)?;

    tracing::info!("vendoring contract artifacts to {:?}", artifacts);
    let client = reqwest::Client::new();
    for (npm_path, local_path) in NPM_CONTRACTS {
        tracing::info!("retrieving {}", npm_path);
        let url = format!("https://unpkg.com/{npm_path}");
        let artifact_json = client
            .get(url.as_str())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .with_context(|| format!("failed to fetch {url}"))?
            .text()
            .await
            .with_context(|| format!("failed to read body of {url}"))?;

        tracing::debug!("pruning artifact JSON");
        let pruned_artifact_json = {
            let mut json = serde_json::from_str::<Value>(&artifact_json)
                .with_context(|| format!("{npm_path} is not valid JSON"))?;
            let mut pruned = Map::new();
            for property in &["abi", "bytecode", "contractName"] {
                if let Some(value) = json.get_mut(*property) {
                    pruned.insert(property.to_string(), value.take());
                }
            }
            serde_json::to_string_pretty(&pruned)?
        };

        let path = artifacts.join(local_path);
        tracing::debug!("saving artifact to {:?}", path);
        fs::write(path, pruned_artifact_json)?;
    }

    Ok(())
}
