//! Input parsing and validation for interactive commands.
//!
//! This module provides functions for parsing and validating user input in
//! interactive CLI commands. It handles:
//! - Counting session commands (card values, deck changes, reset, status)
//! - Count value lists for the tally command
//! - Drill mode answers
//!
//! ## Error Handling
//!
//! Parsing functions return structured enums (like `ParseResult`) or
//! `Result` types to provide clear error messages to users.

use hilo_engine::counting::CountValue;
use hilo_engine::session::{SessionEvent, DECK_COUNT_MAX, DECK_COUNT_MIN};

/// Result type for parsing user input during an interactive counting session.
///
/// This enum represents the possible outcomes when parsing a line of input:
/// - A session event (card recorded, deck change, reset)
/// - A view-only command (status, legend)
/// - Quit command (user wants to exit)
/// - Invalid input with error message
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid session event parsed from input
    Event(SessionEvent),
    /// User asked for the current state to be reprinted
    Status,
    /// User asked for the counting rule legend
    Legend,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse one line of interactive input into a session event or view command.
///
/// Accepts the following input formats (case-insensitive):
/// - "+1" or "+" → record a +1 card
/// - "0" → record a neutral card
/// - "-1" or "-" → record a -1 card
/// - "d N" or "decks N" → change the shoe to N decks (1-8)
/// - "r" or "reset" → reset the count, keeping the deck count
/// - "s" or "status" → reprint the current state
/// - "l" or "legend" → print the counting rule legend
/// - "q" or "quit" → quit the session
pub fn parse_count_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    // Check for quit commands first
    if parts[0] == "q" || parts[0] == "quit" {
        return ParseResult::Quit;
    }

    match parts[0] {
        "+1" | "+" => ParseResult::Event(SessionEvent::Card(CountValue::Plus)),
        "0" => ParseResult::Event(SessionEvent::Card(CountValue::Zero)),
        "-1" | "-" => ParseResult::Event(SessionEvent::Card(CountValue::Minus)),
        "r" | "reset" => ParseResult::Event(SessionEvent::Reset),
        "s" | "status" => ParseResult::Status,
        "l" | "legend" => ParseResult::Legend,
        "d" | "decks" => {
            if parts.len() < 2 {
                return ParseResult::Invalid(
                    "Deck change requires a count (e.g. 'd 6')".to_string(),
                );
            }
            match parts[1].parse::<u8>() {
                Ok(n) if (DECK_COUNT_MIN..=DECK_COUNT_MAX).contains(&n) => {
                    ParseResult::Event(SessionEvent::SetDecks(n))
                }
                Ok(n) => ParseResult::Invalid(format!(
                    "Deck count must be {}-{}, got {}",
                    DECK_COUNT_MIN, DECK_COUNT_MAX, n
                )),
                Err(_) => ParseResult::Invalid("Invalid deck count".to_string()),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized input '{}'. Valid inputs: +1, 0, -1, d <decks>, r, s, l, q",
            parts[0]
        )),
    }
}

/// Parse a single count value token ("+1", "+", "0", "-1", "-").
pub fn parse_count_value(token: &str) -> Result<CountValue, String> {
    match token.trim() {
        "+1" | "+" => Ok(CountValue::Plus),
        "0" => Ok(CountValue::Zero),
        "-1" | "-" => Ok(CountValue::Minus),
        other => Err(format!(
            "Invalid count value '{}'. Valid values: +1, 0, -1",
            other
        )),
    }
}

/// Parse a comma- or whitespace-separated list of count values, as accepted
/// by the tally command's `--cards` argument.
pub fn parse_card_list(list: &str) -> Result<Vec<CountValue>, String> {
    let tokens: Vec<&str> = list
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err("No count values given".to_string());
    }
    tokens.iter().map(|t| parse_count_value(t)).collect()
}

/// Result type for parsing a drill answer.
#[derive(Debug, PartialEq)]
pub enum DrillAnswer {
    /// The user's guessed count value for the dealt card
    Value(CountValue),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse the user's answer to a drill prompt.
pub fn parse_drill_answer(input: &str) -> DrillAnswer {
    let input = input.trim().to_lowercase();
    if input == "q" || input == "quit" {
        return DrillAnswer::Quit;
    }
    match parse_count_value(&input) {
        Ok(value) => DrillAnswer::Value(value),
        Err(msg) => DrillAnswer::Invalid(msg),
    }
}
