mod cli;
mod commands;
mod metrics;
mod model;
mod util;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate(args) => {
            let report_path = commands::evaluate::run(args)?;
            println!("Report written to: {}", report_path.display());
            Ok(())
        }
        Commands::Score(args) => commands::score::run(args),
        Commands::Rent(args) => commands::tenancy::rent::run(args),
        Commands::Moveout(args) => commands::tenancy::moveout::run(args),
        Commands::Repair(args) => commands::tenancy::repair::run(args),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
