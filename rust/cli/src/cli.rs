//! Command-line argument definitions for the `hilo` binary.
//!
//! Deck counts are restricted to the supported 1-8 range at the clap layer,
//! so command handlers never see out-of-range values from the command line.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "hilo", version, about = "Hi-Lo blackjack card counting aid")]
pub struct HiloCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run an interactive counting session
    Count {
        /// Number of decks in the shoe (1-8)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
        decks: Option<u8>,
    },
    /// Apply a list of count values and print the resulting state
    Tally {
        /// Count values to record, comma or space separated (e.g. "+1,+1,0,-1")
        #[arg(long, allow_hyphen_values = true)]
        cards: String,
        /// Number of decks in the shoe (1-8)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
        decks: Option<u8>,
        /// Print the result as pretty JSON
        #[arg(long)]
        json: bool,
    },
    /// Practice counting against a shuffled shoe
    Drill {
        /// Number of decks in the shoe (1-8)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
        decks: Option<u8>,
        /// Number of cards to deal (default: the whole shoe)
        #[arg(long)]
        cards: Option<u32>,
        /// RNG seed for a reproducible deal order (default: random)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the counting rule legend
    Legend,
    /// Show resolved configuration settings
    Cfg,
}
