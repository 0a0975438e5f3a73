//! Pure display formatters for counts, probabilities, and dealt cards.
//!
//! Card symbols use Unicode suits with an ASCII fallback for terminal
//! environments that don't render them, detected the same way as modern
//! terminal checks on Windows (WT_SESSION, TERM_PROGRAM, VSCODE_INJECTION).

use hilo_engine::cards::{Card, Rank, Suit};
use hilo_engine::session::CountingSession;

/// Check if the terminal supports Unicode card symbols by detecting modern
/// terminal environments. On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit as a string using Unicode symbols with ASCII fallback.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as a string (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
    .to_string()
}

/// Format a Card as rank plus suit, e.g. "A♠" (Unicode) or "As" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a running count with an explicit sign for positive values.
pub fn format_signed(count: i32) -> String {
    if count > 0 {
        format!("+{}", count)
    } else {
        count.to_string()
    }
}

/// Format a true count with sign and two decimals, e.g. "+5.53".
pub fn format_true_count(true_count: f64) -> String {
    format!("{:+.2}", true_count)
}

/// Format a probability as a percentage with one decimal, e.g. "52.3%".
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Render the full session state as the view's multi-line status block.
pub fn format_status(session: &CountingSession) -> String {
    let derived = session.derived();
    format!(
        "Running count: {}\n\
         Decks: {}  Cards remaining: {} (decks remaining: {:.2})\n\
         True count: {} [{}]\n\
         Win: {}  Lose: {}",
        format_signed(session.running_count()),
        session.deck_count(),
        session.cards_remaining(),
        derived.decks_remaining,
        format_true_count(derived.true_count),
        derived.tier().as_str(),
        format_percent(derived.win_probability),
        format_percent(derived.lose_probability),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilo_engine::counting::CountValue;

    #[test]
    fn test_format_rank_uses_single_characters() {
        assert_eq!(format_rank(&Rank::Two), "2");
        assert_eq!(format_rank(&Rank::Ten), "T");
        assert_eq!(format_rank(&Rank::Ace), "A");
    }

    #[test]
    fn test_format_card_combines_rank_and_suit() {
        let card = Card {
            rank: Rank::Ace,
            suit: Suit::Spades,
        };
        let formatted = format_card(&card);
        assert!(formatted == "A♠" || formatted == "As");
    }

    #[test]
    fn test_format_signed_marks_positive_counts() {
        assert_eq!(format_signed(5), "+5");
        assert_eq!(format_signed(0), "0");
        assert_eq!(format_signed(-3), "-3");
    }

    #[test]
    fn test_format_true_count_and_percent() {
        assert_eq!(format_true_count(0.0), "+0.00");
        assert_eq!(format_true_count(-5.532), "-5.53");
        assert_eq!(format_percent(52.266), "52.3%");
        assert_eq!(format_percent(100.0), "100.0%");
    }

    #[test]
    fn test_format_status_contains_all_display_fields() {
        let mut session = CountingSession::new();
        for _ in 0..5 {
            session.record_card(CountValue::Plus);
        }

        let status = format_status(&session);
        assert!(status.contains("Running count: +5"));
        assert!(status.contains("Decks: 1"));
        assert!(status.contains("Cards remaining: 47"));
        assert!(status.contains("True count: +5.53 [green]"));
        assert!(status.contains("Win: 52.3%"));
        assert!(status.contains("Lose: 47.7%"));
    }

    #[test]
    fn test_format_status_for_fresh_session_is_yellow() {
        let session = CountingSession::new();
        let status = format_status(&session);
        assert!(status.contains("True count: +0.00 [yellow]"));
        assert!(status.contains("Win: 49.5%"));
        assert!(status.contains("Lose: 50.5%"));
    }
}
