use serde::{Deserialize, Serialize};

use crate::counting::CountValue;
use crate::errors::SessionError;

/// Smallest supported shoe size in decks
pub const DECK_COUNT_MIN: u8 = 1;
/// Largest supported shoe size in decks
pub const DECK_COUNT_MAX: u8 = 8;
/// Cards per standard deck
pub const CARDS_PER_DECK: u32 = 52;

/// A discrete user action dispatched by the view into the counting session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A card with the given count value was observed
    Card(CountValue),
    /// The shoe size changed (full reset to the new size)
    SetDecks(u8),
    /// Manual reset keeping the current shoe size
    Reset,
}

/// The counting session state machine for one counting run.
///
/// Owns the deck configuration, the running count, and the remaining-card
/// estimate. `running_count` and `cards_remaining` only ever change together:
/// each recorded card updates both or neither, so the state can never
/// overdraw the shoe.
///
/// # Examples
///
/// ```
/// use hilo_engine::counting::CountValue;
/// use hilo_engine::session::CountingSession;
///
/// let mut session = CountingSession::with_deck_count(2).unwrap();
/// assert_eq!(session.cards_remaining(), 104);
///
/// session.record_card(CountValue::Minus);
/// assert_eq!(session.running_count(), -1);
/// assert_eq!(session.cards_remaining(), 103);
///
/// session.reset();
/// assert_eq!(session.deck_count(), 2);
/// assert_eq!(session.running_count(), 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountingSession {
    /// Number of decks in the shoe, in [DECK_COUNT_MIN, DECK_COUNT_MAX]
    deck_count: u8,
    /// Cumulative Hi-Lo count of all recorded cards
    running_count: i32,
    /// Estimated undealt cards, in [0, deck_count * 52]
    cards_remaining: u32,
}

impl Default for CountingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CountingSession {
    /// Creates a session over a single deck with a fresh count.
    pub fn new() -> Self {
        Self {
            deck_count: DECK_COUNT_MIN,
            running_count: 0,
            cards_remaining: DECK_COUNT_MIN as u32 * CARDS_PER_DECK,
        }
    }

    /// Creates a session over `deck_count` decks.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DeckCountOutOfRange`] when `deck_count` is not
    /// in `[1, 8]`.
    pub fn with_deck_count(deck_count: u8) -> Result<Self, SessionError> {
        let mut session = Self::new();
        session.set_deck_count(deck_count)?;
        Ok(session)
    }

    pub fn deck_count(&self) -> u8 {
        self.deck_count
    }
    pub fn running_count(&self) -> i32 {
        self.running_count
    }
    pub fn cards_remaining(&self) -> u32 {
        self.cards_remaining
    }

    /// Total cards in a full shoe for the current deck count.
    pub fn shoe_size(&self) -> u32 {
        self.deck_count as u32 * CARDS_PER_DECK
    }

    /// Number of cards recorded since the last reset.
    pub fn cards_seen(&self) -> u32 {
        self.shoe_size() - self.cards_remaining
    }

    /// Records one observed card.
    ///
    /// Adds the card's weight to the running count and consumes one card from
    /// the remaining-card estimate. Recording past the end of the estimated
    /// shoe is not an error: once `cards_remaining` hits zero the call leaves
    /// the state untouched and returns `false`.
    pub fn record_card(&mut self, value: CountValue) -> bool {
        if self.cards_remaining == 0 {
            return false;
        }
        self.running_count += value.weight();
        self.cards_remaining -= 1;
        true
    }

    /// Changes the shoe size. Counting never carries over across a shoe-size
    /// change: the running count is zeroed and the shoe refilled.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DeckCountOutOfRange`] (leaving the state
    /// unchanged) when `deck_count` is not in `[1, 8]`.
    pub fn set_deck_count(&mut self, deck_count: u8) -> Result<(), SessionError> {
        if !(DECK_COUNT_MIN..=DECK_COUNT_MAX).contains(&deck_count) {
            return Err(SessionError::DeckCountOutOfRange {
                requested: deck_count,
                min: DECK_COUNT_MIN,
                max: DECK_COUNT_MAX,
            });
        }
        self.deck_count = deck_count;
        self.running_count = 0;
        self.cards_remaining = self.shoe_size();
        Ok(())
    }

    /// Manual reset: zeroes the count and refills the shoe, preserving the
    /// current deck count.
    pub fn reset(&mut self) {
        self.running_count = 0;
        self.cards_remaining = self.shoe_size();
    }

    /// Applies a dispatched view event to the session.
    pub fn apply(&mut self, event: SessionEvent) -> Result<(), SessionError> {
        match event {
            SessionEvent::Card(value) => {
                self.record_card(value);
                Ok(())
            }
            SessionEvent::SetDecks(n) => self.set_deck_count(n),
            SessionEvent::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Computes the derived values for the current state. Pure; no side
    /// effects.
    ///
    /// The true count is defined as 0 at an empty shoe (rather than dividing
    /// by zero), and the win probability is clamped to [0, 100] since the
    /// linear advantage formula can leave that range at extreme true counts.
    pub fn derived(&self) -> Derived {
        let decks_remaining = self.cards_remaining as f64 / CARDS_PER_DECK as f64;
        let true_count = if decks_remaining > 0.0 {
            self.running_count as f64 / decks_remaining
        } else {
            0.0
        };
        let advantage = -0.5 + 0.5 * true_count;
        let win_probability = (50.0 + advantage).clamp(0.0, 100.0);
        let lose_probability = 100.0 - win_probability;
        Derived {
            decks_remaining,
            true_count,
            advantage,
            win_probability,
            lose_probability,
        }
    }
}

/// Values derived from the session state, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Derived {
    /// Estimated undealt decks (cards remaining / 52)
    pub decks_remaining: f64,
    /// Running count normalized by decks remaining (0 at an empty shoe)
    pub true_count: f64,
    /// Heuristic player advantage in percentage points
    pub advantage: f64,
    /// Heuristic win probability in percent, clamped to [0, 100]
    pub win_probability: f64,
    /// 100 minus the win probability
    pub lose_probability: f64,
}

impl Derived {
    /// The display color tier for the current true count.
    pub fn tier(&self) -> Tier {
        Tier::from_true_count(self.true_count)
    }
}

/// Display color tier keyed off the true count.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// True count above +1.5: player-favorable
    Green,
    /// True count between -1.5 and +1.5 inclusive
    Yellow,
    /// True count below -1.5: house-favorable
    Red,
}

impl Tier {
    pub fn from_true_count(true_count: f64) -> Tier {
        if true_count > 1.5 {
            Tier::Green
        } else if true_count < -1.5 {
            Tier::Red
        } else {
            Tier::Yellow
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Green => "green",
            Tier::Yellow => "yellow",
            Tier::Red => "red",
        }
    }
}
