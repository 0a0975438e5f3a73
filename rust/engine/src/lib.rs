//! # hilo-engine: Hi-Lo Card Counting Core
//!
//! The counting core for a manual blackjack card-counting aid. A view layer
//! (terminal, GUI, whatever) dispatches observed-card events into a
//! [`session::CountingSession`], which keeps the running count and the
//! remaining-card estimate consistent and derives the true count and a
//! heuristic win/lose probability on demand.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and shoe construction
//! - [`counting`] - Hi-Lo count values, per-rank assignment, and the rule legend
//! - [`session`] - The counting session state machine and derived values
//! - [`shoe`] - Deterministic practice shoe with ChaCha-seeded shuffling
//! - [`errors`] - Error types for session configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use hilo_engine::counting::CountValue;
//! use hilo_engine::session::CountingSession;
//!
//! let mut session = CountingSession::new();
//! session.record_card(CountValue::Plus);
//! session.record_card(CountValue::Plus);
//! assert_eq!(session.running_count(), 2);
//! assert_eq!(session.cards_remaining(), 50);
//!
//! let derived = session.derived();
//! assert!(derived.true_count > 0.0);
//! assert!((derived.win_probability + derived.lose_probability - 100.0).abs() < 1e-9);
//! ```
//!
//! ## Deterministic Practice Deals
//!
//! Drill deals are reproducible using seeded RNG:
//!
//! ```rust
//! use hilo_engine::shoe::Shoe;
//!
//! // Same seed produces same deal order
//! let shoe1 = Shoe::new_with_seed(1, 42);
//! let shoe2 = Shoe::new_with_seed(1, 42);
//! // shoe1 and shoe2 will deal identical card sequences after shuffle()
//! ```

pub mod cards;
pub mod counting;
pub mod errors;
pub mod session;
pub mod shoe;
