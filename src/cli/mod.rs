//! CLI module for Clientele.
//!
//! This module provides command-line interface functionality:
//! - Argument parsing
//! - The `serve` command (run the persistence backend)
//! - The `seed` command (write generated records to the store)
//! - Version display
//!
//! # Usage
//!
//! ```ignore
//! use clientele::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! run_cli_command(command)?;
//! ```

pub mod args;
pub mod seed;
pub mod serve;

pub use args::{parse_args, CliCommand, DEFAULT_ADDR, DEFAULT_DATA_DIR};
pub use seed::handle_seed_command;
pub use serve::handle_serve_command;

use color_eyre::Result;

/// Version of the clientele binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "\
clientele - CRM demo backend

USAGE:
    clientele [serve] [--addr HOST:PORT] [--data-dir PATH]
    clientele seed [--seed N] [--count N] [--data-dir PATH]
    clientele --version

COMMANDS:
    serve    Run the persistence backend (default)
    seed     Write generated records into the store files
";

/// Execute a parsed CLI command.
pub fn run_cli_command(command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Version => {
            println!("clientele {}", VERSION);
            Ok(())
        }
        CliCommand::Help { error } => {
            match error {
                Some(message) => {
                    eprintln!("error: {}", message);
                    eprintln!();
                    eprintln!("{}", USAGE);
                    std::process::exit(2);
                }
                None => {
                    println!("{}", USAGE);
                    Ok(())
                }
            }
        }
        CliCommand::Seed {
            seed,
            count,
            data_dir,
        } => handle_seed_command(seed, count, data_dir),
        CliCommand::Serve { addr, data_dir } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(handle_serve_command(addr, data_dir))
        }
    }
}
