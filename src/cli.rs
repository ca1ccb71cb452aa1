use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Debug, Parser)]
#[command(name = "mizan", version, about = "Wallet analytics over an Ethereum transaction ledger")]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, default_value = "Config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the HTTP API (the default)
    Serve,
    /// Print the analytics report for one wallet and exit
    Analyze {
        wallet: String,
        /// Also write the trend chart as a PNG
        #[arg(long)]
        chart: Option<PathBuf>,
    },
}
