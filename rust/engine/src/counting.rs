use serde::{Deserialize, Serialize};

use crate::cards::Rank;

/// The count value assigned to one observed card under the Hi-Lo scheme.
/// The view's three card buttons map one-to-one onto these variants.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CountValue {
    /// High card seen (10, J, Q, K, A): running count -1
    Minus,
    /// Neutral card seen (7, 8, 9): running count unchanged
    Zero,
    /// Low card seen (2-6): running count +1
    Plus,
}

impl CountValue {
    /// The signed contribution of this value to the running count.
    pub fn weight(self) -> i32 {
        match self {
            CountValue::Minus => -1,
            CountValue::Zero => 0,
            CountValue::Plus => 1,
        }
    }

    /// Maps a raw weight back to a count value. Returns `None` for anything
    /// outside {-1, 0, +1}.
    pub fn from_weight(w: i32) -> Option<CountValue> {
        match w {
            -1 => Some(CountValue::Minus),
            0 => Some(CountValue::Zero),
            1 => Some(CountValue::Plus),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CountValue::Minus => "-1",
            CountValue::Zero => "0",
            CountValue::Plus => "+1",
        }
    }
}

/// Hi-Lo count value for a rank: 2-6 are +1, 7-9 are 0, 10 through Ace are -1.
pub fn hi_lo_value(rank: Rank) -> CountValue {
    match rank {
        Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => CountValue::Plus,
        Rank::Seven | Rank::Eight | Rank::Nine => CountValue::Zero,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => CountValue::Minus,
    }
}

/// Static reference text for the counting rule legend.
pub const LEGEND: &str = "Blackjack card counting rules:\n\
    - High cards (10, J, Q, K, A) = -1\n\
    - Neutral cards (7, 8, 9) = 0\n\
    - Low cards (2, 3, 4, 5, 6) = +1";
