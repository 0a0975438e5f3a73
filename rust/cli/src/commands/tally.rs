//! # Tally Command
//!
//! Non-interactive counting: applies a list of count values to a fresh
//! session and prints the resulting state, as text or pretty JSON. Useful for
//! checking a count after the fact without stepping through a session.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_status;
use crate::ui;
use crate::validation::parse_card_list;
use hilo_engine::session::CountingSession;
use std::io::Write;

/// Handle the tally command.
///
/// # Arguments
///
/// * `cards` - Comma- or space-separated count values (e.g. "+1,+1,0,-1")
/// * `decks` - Shoe size override (1-8, default: configuration value)
/// * `json` - Print the final state as pretty JSON instead of text
/// * `out` - Output stream for the result
/// * `err` - Error stream for warnings and errors
///
/// # Errors
///
/// Returns `CliError::InvalidInput` if the card list fails to parse and
/// `CliError::Config` if configuration loading fails.
pub fn handle_tally_command(
    cards: &str,
    decks: Option<u8>,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let decks = decks.unwrap_or(cfg.decks);

    let values = match parse_card_list(cards) {
        Ok(values) => values,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };

    let mut session = CountingSession::with_deck_count(decks)?;
    let mut ignored = 0u32;
    for value in &values {
        if !session.record_card(*value) {
            ignored += 1;
        }
    }
    if ignored > 0 {
        ui::display_warning(
            err,
            &format!("{} card(s) ignored: the estimated shoe ran out", ignored),
        )?;
    }

    if json {
        let derived = session.derived();
        let display = serde_json::json!({
            "session": session,
            "cards_seen": session.cards_seen(),
            "derived": derived,
            "tier": derived.tier(),
        });
        let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
    } else {
        writeln!(out, "tally: decks={} cards={}", decks, values.len())?;
        writeln!(out, "{}", format_status(&session))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_config_env() {
        unsafe {
            std::env::remove_var("HILO_CONFIG");
            std::env::remove_var("HILO_DECKS");
            std::env::remove_var("HILO_SEED");
        }
    }

    #[test]
    #[serial]
    fn test_tally_text_output_shows_final_state() {
        clear_config_env();
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_tally_command("+1,+1,+1,+1,+1", None, false, &mut out, &mut err);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("tally: decks=1 cards=5"));
        assert!(output.contains("Running count: +5"));
        assert!(output.contains("Cards remaining: 47"));
        assert!(output.contains("Win: 52.3%"));
    }

    #[test]
    #[serial]
    fn test_tally_json_output_is_valid_and_complete() {
        clear_config_env();
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_tally_command("-1 -1 0", Some(2), true, &mut out, &mut err);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["session"]["deck_count"].as_u64(), Some(2));
        assert_eq!(json["session"]["running_count"].as_i64(), Some(-2));
        assert_eq!(json["session"]["cards_remaining"].as_u64(), Some(101));
        assert_eq!(json["cards_seen"].as_u64(), Some(3));
        assert_eq!(json["tier"].as_str(), Some("yellow"));
        let win = json["derived"]["win_probability"].as_f64().unwrap();
        let lose = json["derived"]["lose_probability"].as_f64().unwrap();
        assert!((win + lose - 100.0).abs() < 1e-9);
    }

    #[test]
    #[serial]
    fn test_tally_rejects_invalid_card_lists() {
        clear_config_env();
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_tally_command("+1,hearts", None, false, &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));

        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("Invalid count value"));
    }

    #[test]
    #[serial]
    fn test_tally_warns_when_shoe_overdrawn() {
        clear_config_env();
        let mut out = Vec::new();
        let mut err = Vec::new();

        // 53 zeros against a single deck: the last one cannot be recorded
        let cards = vec!["0"; 53].join(",");
        let result = handle_tally_command(&cards, Some(1), false, &mut out, &mut err);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Cards remaining: 0"));

        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("WARNING"));
        assert!(errors.contains("1 card(s) ignored"));
    }
}
