use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use printwatch::monitoring::domain::ConnectivityStatus;

/// Monitor a printer fleet: reachability, supply levels and page counters
#[derive(Parser, Debug)]
#[command(name = "printwatch")]
#[command(version)]
#[command(about = "Monitor a printer fleet: reachability, supply levels and page counters", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Path to a config file (defaults to ./printwatch.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the JSON printer inventory
    #[arg(short, long, global = true, value_name = "PATH")]
    pub inventory: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check every printer once and write the results back to the inventory
    Sweep(SweepArgs),

    /// Show the last known status of the printers
    Status(StatusArgs),

    /// Keep checking: initial sweep, Enter for a manual sweep, optional auto-refresh
    Watch(WatchArgs),
}

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Maximum number of printers checked at the same time
    #[arg(short, long, value_name = "N")]
    pub workers: Option<usize>,

    /// Exit with code 1 when at least one printer is offline
    #[arg(long)]
    pub fail_on_offline: bool,

    /// Do not show the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Only show printers of this unit
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Only show printers with this status: online, offline or unknown
    #[arg(short, long)]
    pub status: Option<ConnectivityStatus>,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Maximum number of printers checked at the same time
    #[arg(short, long, value_name = "N")]
    pub workers: Option<usize>,

    /// Re-check automatically once the refresh interval has elapsed
    #[arg(short, long)]
    pub auto_refresh: bool,

    /// Seconds between automatic checks
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
