//! Shielded NFT Minting Client
//!
//! Single-shot CLI that mints one NFT to one recipient through a node that
//! accepts shielded transactions.
//!
//! # Flow Overview
//!
//! ```text
//!  config (TOML)          MINT_PRIVATE_KEY (env)
//!       │                        │
//!       ▼                        ▼
//!  ┌─────────┐    ┌────────┐    ┌────────────┐
//!  │  mint   │───▶│ shield │───▶│   chain    │
//!  │ encode  │    │encrypt │    │ send + wait│
//!  └─────────┘    └────────┘    └────────────┘
//!                                     │
//!                                     ▼
//!                            console status lines
//! ```
//!
//! Exactly one transaction per invocation. Any failure aborts the run with a
//! logged diagnostic and exit code 1.

use clap::Parser;
use std::path::PathBuf;

use shielded_mint::chain::{ChainClient, Wallet};
use shielded_mint::config::loader::load_or_default;
use shielded_mint::mint::MintClient;
use shielded_mint::observability::logging;
use shielded_mint::shield::ShieldClient;

#[derive(Parser)]
#[command(name = "shielded-mint")]
#[command(about = "Mint one NFT through a shielded transaction", long_about = None)]
struct Cli {
    /// Path to the TOML config file; defaults apply when absent
    #[arg(short, long, default_value = "mint.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    logging::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        tracing::error!("Transaction failed! Could not mint NFT.");
        tracing::error!(error = %e, "Run aborted");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("shielded-mint v0.1.0 starting");

    let config = load_or_default(&cli.config)?;
    tracing::info!(
        rpc_url = %config.network.rpc_url,
        chain_id = config.network.chain_id,
        contract = %config.mint.contract_address,
        "Configuration loaded"
    );

    let wallet = Wallet::from_env(config.network.chain_id)?;
    let chain = ChainClient::new(config.network.clone(), &wallet).await?;
    let shield = ShieldClient::new(&config.network.rpc_url, config.network.rpc_timeout_secs)?;

    let client = MintClient::new(config.mint, chain, shield, wallet);
    let outcome = client.run().await?;

    tracing::info!(
        tx_hash = %outcome.tx_hash,
        block_number = outcome.block_number,
        "Shutdown complete"
    );
    Ok(())
}
