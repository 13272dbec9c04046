use clap::Parser;
use log::error;

use corebank::cli::Cli;
use corebank::config::load_configuration;
use corebank::demo::run_demo;
use corebank::http::BankingApiClient;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    corebank::log::init_logging();

    if let Err(e) = run(cli).await {
        error!("Fatal error running demo: {e:#}");
        eprintln!("Fatal error running demo: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_configuration(cli.base_url.as_deref())?;
    let client = BankingApiClient::new(&config.base_url);
    run_demo(&client).await
}
