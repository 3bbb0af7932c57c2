//! blocklog - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use blocklog::cli::{Cli, Commands, ConfigCommands};
use blocklog::theme::current_theme;

/// Environment variable holding a tracing filter directive (e.g. `blocklog=debug`).
const LOG_ENV: &str = "BLOCKLOG_LOG";

/// Install the stderr log subscriber.
///
/// `BLOCKLOG_LOG` takes precedence; otherwise `-v` flags raise the level
/// from the default of warnings only.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score {
            scrape,
            drop,
            json,
            export,
            node_bin,
        } => commands::score::handle(&scrape, drop, json, export, node_bin),
        Commands::Summary { scrape } => commands::summary::handle(&scrape),
        Commands::Blocks {
            scrape,
            steady_state,
            drop,
            json,
        } => commands::blocks::handle(&scrape, steady_state, drop, json),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        let theme = current_theme();
        eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}
