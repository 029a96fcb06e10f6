use clap::Parser;
use studydash::cli::commands::Cli;
use studydash::cli::handlers;

fn main() {
    let cli = Cli::parse();

    let result = if cli.command.is_none() {
        // No subcommand → launch TUI
        handlers::launch_tui(cli)
    } else {
        handlers::dispatch(cli)
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
