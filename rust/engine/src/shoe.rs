use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{shoe_cards, Card};

/// A multi-deck shoe with deterministic shuffling, used by drill mode to deal
/// practice cards. Same seed, same deal order.
#[derive(Debug)]
pub struct Shoe {
    cards: Vec<Card>,
    position: usize,
    deck_count: u8,
    rng: ChaCha20Rng,
}

impl Shoe {
    pub fn new_with_seed(deck_count: u8, seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: shoe_cards(deck_count),
            position: 0,
            deck_count,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = shoe_cards(self.deck_count);
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
