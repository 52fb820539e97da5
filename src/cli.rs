use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "walletdeck")]
#[command(about = "A terminal dashboard for wallets, stats and API snippets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Dashboard data file (overrides the config)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print stats, wallets and their events
    Show {
        /// Only print the wallet with this id
        #[arg(short, long)]
        wallet: Option<String>,
    },
    /// Copy a code snippet to the clipboard
    Copy {
        /// Snippet index, starting at 1
        #[arg(default_value_t = 1)]
        index: usize,
    },
    /// Write the default dashboard data file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
