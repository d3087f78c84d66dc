use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Subcommand)]
pub enum Commands {
    /// exports commodities, player bases and their goods as json
    Export {
        #[arg(long, env("TRADE_CATALOG_SNAPSHOT"))]
        snapshot: PathBuf,
        /// writes to stdout when omitted
        #[arg(long, env("TRADE_CATALOG_OUTPUT"))]
        output: Option<PathBuf>,
        #[arg(long)]
        useful_only: bool,
    },
    /// prints the most profitable commodities
    Overview {
        #[arg(long, env("TRADE_CATALOG_SNAPSHOT"))]
        snapshot: PathBuf,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}
