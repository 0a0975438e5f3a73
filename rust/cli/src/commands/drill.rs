//! # Drill Command
//!
//! Practice mode: deals cards from a seeded, shuffled shoe and asks the user
//! for each card's Hi-Lo value. Answers are scored, and the true value is fed
//! into a counting session so the summary shows the state a perfect count
//! would have reached.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_card, format_status};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_drill_answer, DrillAnswer};
use hilo_engine::counting::hi_lo_value;
use hilo_engine::session::{CountingSession, CARDS_PER_DECK};
use hilo_engine::shoe::Shoe;
use std::io::{BufRead, Write};

/// Handle the drill command: practice counting against a shuffled shoe.
///
/// # Arguments
///
/// * `decks` - Shoe size (1-8, default: configuration value)
/// * `cards` - Number of cards to deal (default: the whole shoe, must be >= 1)
/// * `seed` - RNG seed for a reproducible deal order (default: random)
/// * `out` - Output stream for dealt cards and the summary
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for answers
///
/// # Errors
///
/// Returns `CliError::InvalidInput` if `cards` is 0, `CliError::Config` if
/// configuration loading fails, or `CliError::Io` on stream failures.
pub fn handle_drill_command(
    decks: Option<u8>,
    cards: Option<u32>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let decks = decks.unwrap_or(cfg.decks);
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let shoe_size = decks as u32 * CARDS_PER_DECK;
    let target = cards.unwrap_or(shoe_size).min(shoe_size);
    if target == 0 {
        ui::write_error(err, "cards must be >= 1")?;
        return Err(CliError::InvalidInput("cards must be >= 1".to_string()));
    }

    writeln!(out, "drill: decks={} cards={} seed={}", decks, target, seed)?;

    let mut shoe = Shoe::new_with_seed(decks, seed);
    shoe.shuffle();
    let mut session = CountingSession::with_deck_count(decks)?;

    let mut dealt = 0u32;
    let mut correct = 0u32;
    let mut quit_requested = false;

    while dealt < target && !quit_requested {
        let Some(card) = shoe.deal_card() else {
            break;
        };
        writeln!(out, "Card: {}", format_card(&card))?;

        loop {
            write!(out, "count value (+1/0/-1, q): ")?;
            out.flush()?;

            match read_stdin_line(stdin) {
                None => {
                    quit_requested = true;
                    break;
                }
                Some(input) => match parse_drill_answer(&input) {
                    DrillAnswer::Value(answer) => {
                        let expected = hi_lo_value(card.rank);
                        if answer == expected {
                            correct += 1;
                            writeln!(out, "Correct.")?;
                        } else {
                            writeln!(
                                out,
                                "Miss: {} counts {}",
                                format_card(&card),
                                expected.as_str()
                            )?;
                        }
                        // The session tracks the true count, not the guesses
                        session.record_card(expected);
                        dealt += 1;
                        break;
                    }
                    DrillAnswer::Quit => {
                        quit_requested = true;
                        break;
                    }
                    DrillAnswer::Invalid(msg) => {
                        ui::write_error(err, &msg)?;
                    }
                },
            }
        }
    }

    writeln!(out, "Cards dealt: {}", dealt)?;
    if dealt > 0 {
        writeln!(
            out,
            "Correct: {} ({:.1}%)",
            correct,
            correct as f64 * 100.0 / dealt as f64
        )?;
    }
    writeln!(out, "{}", format_status(&session))?;
    Ok(())
}
