//! # hilo CLI Library
//!
//! This library provides the command-line interface for the hilo counting
//! engine: a manual blackjack card-counting aid driven from the terminal.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["hilo", "legend"];
//! let code = hilo_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `count`: Interactive counting session (card buttons, deck selector, reset)
//! - `tally`: Apply a list of count values and print the resulting state
//! - `drill`: Practice counting against a seeded, shuffled shoe
//! - `legend`: Print the Hi-Lo counting rule legend
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, HiloCli};

use commands::{
    handle_cfg_command, handle_count_command, handle_drill_command, handle_legend_command,
    handle_tally_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["hilo", "tally", "--cards", "+1,0,-1"];
/// let code = hilo_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["count", "tally", "drill", "legend", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = HiloCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    // Print clap error first
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "hilo - Hi-Lo card counting aid").is_err()
                        || writeln!(err, "Usage: hilo <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: hilo --help").is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Count { decks } => {
                // Use stdin for real input (supports both TTY and piped stdin)
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                match handle_count_command(decks, out, err, &mut stdin_lock) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(e) => {
                        if writeln!(err, "Error: {}", e).is_err() {
                            return exit_code::ERROR;
                        }
                        exit_code::ERROR
                    }
                }
            }
            Commands::Tally { cards, decks, json } => {
                match handle_tally_command(&cards, decks, json, out, err) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(e) => {
                        if writeln!(err, "Error: {}", e).is_err() {
                            return exit_code::ERROR;
                        }
                        exit_code::ERROR
                    }
                }
            }
            Commands::Drill { decks, cards, seed } => {
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                match handle_drill_command(decks, cards, seed, out, err, &mut stdin_lock) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(e) => {
                        if writeln!(err, "Error: {}", e).is_err() {
                            return exit_code::ERROR;
                        }
                        exit_code::ERROR
                    }
                }
            }
            Commands::Legend => match handle_legend_command(out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
            Commands::Cfg => match handle_cfg_command(out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
        },
    }
}
