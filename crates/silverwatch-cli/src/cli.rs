//! CLI argument definitions.

use clap::Parser;

use crate::commands::Command;

/// Silver Watch backend CLI.
#[derive(Parser, Debug)]
#[command(name = "silverwatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}
