use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use canopy::api::routes::{self, ApiState};
use canopy::client::WalletApiClient;
use canopy::commands::{self, ArgsForm};
use canopy::config::{load_config, AppConfig};
use canopy::panel::ConsolePanel;
use canopy::wallet::DevWallet;

#[derive(Parser)]
#[command(name = "canopy", version, about = "Status console and wallet API for storage provider nodes")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch provider status and wallet address
    Status,
    /// Withdraw tokens from the provider wallet
    Withdraw {
        to_address: String,
        /// Coin expression, e.g. 100ujkl
        amount: String,
    },
    /// Serve the wallet status API backed by the dev wallet
    Serve {
        /// Override the configured listen port
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| config.logging.level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Command::Status => {
            let client = WalletApiClient::from_config(&config.api)?;
            let mut panel = ConsolePanel;
            commands::show_status(&client, &mut panel).await?;
        }
        Command::Withdraw { to_address, amount } => {
            let client = WalletApiClient::from_config(&config.api)?;
            let form = ArgsForm { to_address, amount };
            commands::handle_withdraw(&client, &form).await;
        }
        Command::Serve { port } => {
            serve(&config, port).await?;
        }
    }

    Ok(())
}

async fn serve(config: &AppConfig, port_override: Option<u16>) -> anyhow::Result<()> {
    let port = port_override.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", config.server.host, port).parse()?;

    let state = Arc::new(ApiState {
        wallet: Box::new(DevWallet::new(config.wallet.address.clone())),
        chain_id: config.wallet.chain_id.clone(),
    });

    info!(address = %config.wallet.address, "starting wallet api");
    routes::serve(addr, state).await
}
