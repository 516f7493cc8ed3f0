//! SafeZone CLI - Command-line interface
//!
//! This binary provides a command-line interface to the SafeZone library:
//! classify coordinates against a zone file, drive simulated or replayed
//! monitor sessions, and manage configuration.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::classify::ClassifyArgs;
use commands::config::ConfigCommands;
use commands::grade::GradeArgs;
use commands::replay::ReplayArgs;
use commands::simulate::SimulateArgs;
use error::CliError;
use runner::{CliRunner, GlobalOptions};

#[derive(Parser)]
#[command(name = "safezone")]
#[command(version = safezone::VERSION)]
#[command(about = "Geofencing engine for tourist safety monitoring", long_about = None)]
struct Cli {
    /// Config file (default: ~/.safezone/config.ini)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Zone definition file (overrides [zones] file in the config)
    #[arg(long, global = true, value_name = "PATH")]
    zones: Option<PathBuf>,

    /// Enable debug-level logging regardless of RUST_LOG
    #[arg(long, global = true)]
    debug: bool,

    /// Print results as JSON, one object per line
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the zones in the zone file
    Zones,

    /// Classify a single coordinate
    Classify(ClassifyArgs),

    /// Grade an accuracy radius (High, Medium, Low or Unknown)
    Grade(GradeArgs),

    /// Push simulated points through a monitor session
    Simulate(SimulateArgs),

    /// Replay a GPS track through a full monitor session
    Replay(ReplayArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let options = GlobalOptions {
        config: cli.config,
        zones: cli.zones,
        debug: cli.debug,
        json: cli.json,
    };

    if let Err(e) = dispatch(cli.command, &options).await {
        e.exit();
    }
}

async fn dispatch(command: Commands, options: &GlobalOptions) -> Result<(), CliError> {
    match command {
        Commands::Config(command) => commands::config::run(options, command),
        Commands::Grade(args) => commands::grade::run(options, args),
        Commands::Zones => commands::zones::run(&CliRunner::new(options)?),
        Commands::Classify(args) => commands::classify::run(&CliRunner::new(options)?, args),
        Commands::Simulate(args) => {
            let runner = CliRunner::new(options)?;
            commands::simulate::run(&runner, args).await
        }
        Commands::Replay(args) => {
            let runner = CliRunner::new(options)?;
            commands::replay::run(&runner, args).await
        }
    }
}
