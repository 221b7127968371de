//! revsync CLI
//!
//! Usage: revsync [OPTIONS] <COMMAND>
//!
//! Commands:
//!   deploy     Deploy the changes since the last deployment to a location
//!   status     Show the deployed and current revision of a location
//!   locations  List configured locations

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Deploy {
            location,
            append,
            remove,
            from,
            to,
            yes,
        } => commands::cmd_deploy(
            cli.config.as_deref(),
            location,
            append,
            remove,
            from,
            to,
            yes,
        ),
        Commands::Status { location } => commands::cmd_status(cli.config.as_deref(), &location),
        Commands::Locations => commands::cmd_locations(cli.config.as_deref()),
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from warn
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "revsync=info,warn",
        2 => "revsync=debug,info",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
