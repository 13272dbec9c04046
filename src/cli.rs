use clap::Parser;

#[derive(Parser)]
#[command(name = "corebank")]
#[command(about = "Core Banking API demo client", long_about = None)]
pub struct Cli {
    #[arg(
        short = 'u',
        long,
        help = "The base URL of the Core Banking API (overrides COREBANK_BASE_URL)"
    )]
    pub base_url: Option<String>,
}
