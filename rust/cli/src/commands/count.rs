//! # Count Command
//!
//! The interactive counting session: the terminal rendition of the three
//! card buttons, the deck selector, and the reset action.
//!
//! Each stdin line is parsed into a session event or view command and handled
//! to completion before the next read, so the session state is never mutated
//! concurrently. After every accepted event the full state block is
//! re-rendered: running count, deck count, cards and decks remaining, true
//! count with its color tier, and the win/lose probabilities.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_status;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_count_input, ParseResult};
use hilo_engine::counting::LEGEND;
use hilo_engine::session::{CountingSession, SessionEvent};
use std::io::{BufRead, Write};

const PROMPT: &str = "card (+1/0/-1, d <decks>, r, s, l, q): ";

/// Handle the count command: an interactive counting session.
///
/// # Arguments
///
/// * `decks` - Shoe size (1-8, default: configuration value)
/// * `out` - Output stream for state display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for session commands
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails, or
/// `CliError::Io` if a stream write fails. User input errors are reported on
/// `err` and never abort the session.
pub fn handle_count_command(
    decks: Option<u8>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let decks = decks.unwrap_or(cfg.decks);

    let mut session = CountingSession::with_deck_count(decks)?;
    writeln!(out, "count: decks={}", decks)?;
    writeln!(out, "{}", format_status(&session))?;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(input) = read_stdin_line(stdin) else {
            break;
        };
        match parse_count_input(&input) {
            ParseResult::Event(SessionEvent::Card(value)) => {
                if session.record_card(value) {
                    writeln!(out, "{}", format_status(&session))?;
                } else {
                    ui::display_warning(
                        err,
                        "Estimated shoe is empty; card ignored. Reset (r) or change decks (d N).",
                    )?;
                }
            }
            ParseResult::Event(event) => {
                // SetDecks comes pre-validated from the parser, Reset is total
                session.apply(event)?;
                writeln!(out, "{}", format_status(&session))?;
            }
            ParseResult::Status => {
                writeln!(out, "{}", format_status(&session))?;
            }
            ParseResult::Legend => {
                writeln!(out, "{}", LEGEND)?;
            }
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
            }
        }
    }

    writeln!(
        out,
        "Session ended after {} card(s).",
        session.cards_seen()
    )?;
    Ok(())
}
