use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "fintrack")]
#[command(about = "FinTrack client: sign in online or offline and inspect the session")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Auth service base URL (overrides config and FT_API_BASE_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}
