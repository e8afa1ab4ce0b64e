//! Command-line argument parsing.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::generator::DEFAULT_SEED;

/// Address the backend binds when none is given.
pub const DEFAULT_ADDR: &str = "127.0.0.1:7878";

/// Directory the collection files live in when none is given.
pub const DEFAULT_DATA_DIR: &str = "data";

/// A parsed CLI invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Run the persistence backend.
    Serve { addr: SocketAddr, data_dir: PathBuf },
    /// Write generated records into the store files.
    Seed {
        seed: u64,
        /// Per-kind record count; defaults per kind when absent.
        count: Option<usize>,
        data_dir: PathBuf,
    },
    /// Print the version and exit.
    Version,
    /// Print usage and exit (also used for malformed invocations).
    Help { error: Option<String> },
}

fn parse_addr(value: &str) -> Result<SocketAddr, String> {
    value
        .parse()
        .map_err(|_| format!("invalid address '{}', expected HOST:PORT", value))
}

/// Parse process arguments into a command.
///
/// The first argument (the program name) is skipped. No arguments means
/// `serve` with defaults.
pub fn parse_args(args: impl Iterator<Item = String>) -> CliCommand {
    let args: Vec<String> = args.skip(1).collect();

    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        return CliCommand::Version;
    }
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        return CliCommand::Help { error: None };
    }

    let (command, rest) = match args.split_first() {
        None => return default_serve(),
        Some((first, rest)) => (first.as_str(), rest),
    };

    match command {
        "serve" => parse_serve(rest),
        "seed" => parse_seed(rest),
        other => CliCommand::Help {
            error: Some(format!("unknown command '{}'", other)),
        },
    }
}

fn default_serve() -> CliCommand {
    CliCommand::Serve {
        // The default address is a valid literal.
        addr: DEFAULT_ADDR.parse().expect("default address parses"),
        data_dir: PathBuf::from(DEFAULT_DATA_DIR),
    }
}

fn parse_serve(args: &[String]) -> CliCommand {
    let mut addr = DEFAULT_ADDR.to_string();
    let mut data_dir = PathBuf::from(DEFAULT_DATA_DIR);

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--addr" => match iter.next() {
                Some(value) => addr = value.clone(),
                None => return missing_value("--addr"),
            },
            "--data-dir" => match iter.next() {
                Some(value) => data_dir = PathBuf::from(value),
                None => return missing_value("--data-dir"),
            },
            other => return unknown_flag(other),
        }
    }

    match parse_addr(&addr) {
        Ok(addr) => CliCommand::Serve { addr, data_dir },
        Err(error) => CliCommand::Help { error: Some(error) },
    }
}

fn parse_seed(args: &[String]) -> CliCommand {
    let mut seed = DEFAULT_SEED;
    let mut count = None;
    let mut data_dir = PathBuf::from(DEFAULT_DATA_DIR);

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--seed" => match iter.next().map(|value| value.parse::<u64>()) {
                Some(Ok(value)) => seed = value,
                Some(Err(_)) => {
                    return CliCommand::Help {
                        error: Some("--seed expects an integer".to_string()),
                    }
                }
                None => return missing_value("--seed"),
            },
            "--count" => match iter.next().map(|value| value.parse::<usize>()) {
                Some(Ok(value)) => count = Some(value),
                Some(Err(_)) => {
                    return CliCommand::Help {
                        error: Some("--count expects an integer".to_string()),
                    }
                }
                None => return missing_value("--count"),
            },
            "--data-dir" => match iter.next() {
                Some(value) => data_dir = PathBuf::from(value),
                None => return missing_value("--data-dir"),
            },
            other => return unknown_flag(other),
        }
    }

    CliCommand::Seed {
        seed,
        count,
        data_dir,
    }
}

fn missing_value(flag: &str) -> CliCommand {
    CliCommand::Help {
        error: Some(format!("{} expects a value", flag)),
    }
}

fn unknown_flag(flag: &str) -> CliCommand {
    CliCommand::Help {
        error: Some(format!("unknown flag '{}'", flag)),
    }
}
