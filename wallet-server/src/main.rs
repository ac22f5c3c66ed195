//! # Wallet Server
//!
//! Thin entry point that delegates to the library for server setup.

use wallet_server::{init_tracing, start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    init_tracing(&config.log_level);
    config.validate()?;

    start_server(config).await
}
