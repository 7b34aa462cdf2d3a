mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use digibyte_rpc::shared::LoggingUtils;
use digibyte_rpc::{AppConfig, AppError, WalletClient};
use serde::Serialize;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = LoggingUtils::initialize(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(url = %LoggingUtils::redact_url(&config.daemon.rpc_url), "Using DigiByte daemon");

    let client = match WalletClient::new(&config.daemon) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create wallet client: {}", e);
            std::process::exit(1);
        }
    };

    let operation = cli.command.name();
    match run(&client, cli.command).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            if let Some(app_error) = e.downcast_ref::<AppError>() {
                LoggingUtils::log_failure(operation, app_error);
            } else {
                error!("{} failed: {:#}", operation, e);
            }
            std::process::exit(1);
        }
    }
}

/// Load configuration and apply command line overrides
fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load().context("loading Conf file and DIGIBYTE_RPC__* environment")?;

    if let Some(url) = &cli.url {
        config.daemon.rpc_url = url.clone();
    }
    if let Some(confirmations) = cli.confirmations {
        config.daemon.confirmations = confirmations;
    }

    config.validate_config().context("validating command line overrides")?;
    Ok(config)
}

async fn run(client: &WalletClient, command: Commands) -> anyhow::Result<String> {
    match command {
        Commands::NewAddress => render(&client.create_address().await?),
        Commands::Balance => render(&client.get_balance().await?),
        Commands::ReceivedBy { address } => render(&client.get_balance_by_address(&address).await?),
        Commands::WalletInfo => render(&client.get_wallet_info().await?),
        Commands::Send { address, amount } => render(&client.send_to_address(&address, amount).await?),
        Commands::Transaction { txid } => render(&client.get_transaction(&txid).await?),
        Commands::Check { txid } => render(&client.check_transaction(&txid).await?),
        Commands::SetFee { fee } => render(&client.set_fee(fee).await?),
    }
}

fn render<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("rendering result")
}
