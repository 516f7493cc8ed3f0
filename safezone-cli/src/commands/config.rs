//! Configuration management CLI commands.
//!
//! Provides `config path`, `config show` and `config init` for inspecting
//! and creating the settings file.

use clap::Subcommand;
use safezone::config::ConfigFile;

use crate::error::CliError;
use crate::runner::GlobalOptions;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Print the effective configuration (file values over defaults)
    Show,

    /// Write a default configuration file if none exists
    Init,
}

/// Run a config subcommand.
pub fn run(options: &GlobalOptions, command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(options),
        ConfigCommands::Show => run_show(options),
        ConfigCommands::Init => run_init(options),
    }
}

/// Show the configuration file path.
fn run_path(options: &GlobalOptions) -> Result<(), CliError> {
    println!("{}", options.config_path().display());
    Ok(())
}

/// Print the effective configuration.
fn run_show(options: &GlobalOptions) -> Result<(), CliError> {
    let config = options.load_config()?;
    print!("{}", config.to_ini_string());
    Ok(())
}

/// Create the configuration file with defaults.
fn run_init(options: &GlobalOptions) -> Result<(), CliError> {
    let path = options.config_path();
    if ConfigFile::init_at(&path)? {
        println!("Created {}", path.display());
    } else {
        println!("Configuration already exists: {}", path.display());
    }
    Ok(())
}
