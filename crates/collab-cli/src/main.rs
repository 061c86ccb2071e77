use std::error::Error;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{
    degree_dist::{self, DegreeDistArgs},
    reconstruct::{self, ReconstructArgs},
    stats::{self, StatsArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "collab", about = "Collaboration network statistics and reconstruction")]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the network property table.
    Stats(StatsArgs),
    /// Print the log-log degree distribution and its trend line.
    DegreeDist(DegreeDistArgs),
    /// Reconstruct the graph and print the reconstruction report.
    Reconstruct(ReconstructArgs),
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Command::Stats(args) => stats::run(&args),
        Command::DegreeDist(args) => degree_dist::run(&args),
        Command::Reconstruct(args) => reconstruct::run(&args),
    }
}
