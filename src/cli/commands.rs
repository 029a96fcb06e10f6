use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "sdash", about = concat!("studydash v", env!("CARGO_PKG_VERSION"), " - tasks, notes and a calendar in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding saved state (theme) and the default log file
    #[arg(long = "state-dir", global = true)]
    pub state_dir: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Start the dashboard without the sample tasks and notes
    #[arg(long, global = true)]
    pub empty: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a month calendar
    Cal(CalArgs),
    /// Show or change the light/dark theme
    Theme(ThemeArgs),
}

#[derive(Args)]
pub struct CalArgs {
    /// Month to show as YYYY-MM (default: the current month)
    #[arg(long)]
    pub month: Option<String>,
}

#[derive(Args)]
pub struct ThemeArgs {
    /// Set or toggle the theme; omit to print the current one
    #[arg(value_enum)]
    pub action: Option<ThemeAction>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}
