//! Corkboard server entry point

use corkboard_server::{logging, run, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let config = ServerConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");
    run(config).await
}
