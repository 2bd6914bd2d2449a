use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::EngineError;
use crate::game::Phase;

/// An ordered 52-card deck dealt from a cursor.
///
/// The deck owns its RNG so every shuffle is reproducible from the seed it was
/// created with. A freshly created deck is in canonical suit-major,
/// rank-ascending order until [`shuffle`](Deck::shuffle) is called.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Creates a deck seeded from thread-local entropy.
    pub fn new() -> Self {
        Self::new_with_seed(rand::rng().random())
    }

    /// Creates a deck with a fixed seed for reproducible shuffles.
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep canonical order until shuffle is called explicitly.
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Rebuilds the full deck and applies a Fisher-Yates shuffle.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Deals one card, or `None` when the deck is exhausted.
    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    /// Discards the top card, per the physical dealing convention.
    pub fn burn_card(&mut self) {
        let _ = self.deal_card();
    }

    /// Deals `n` cards, failing fast instead of truncating short.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        if self.remaining() < n {
            return Err(EngineError::DeckExhausted {
                needed: n,
                remaining: self.remaining(),
            });
        }
        Ok((0..n).map_while(|_| self.deal_card()).collect())
    }

    /// Deals two hole cards to each of `player_count` players, one card per
    /// player per pass: everyone receives their first card before anyone
    /// receives a second, mirroring physical dealing.
    pub fn deal_hole_cards(&mut self, player_count: usize) -> Result<Vec<(Card, Card)>, EngineError> {
        let firsts = self.deal(player_count)?;
        let seconds = self.deal(player_count)?;
        Ok(firsts.into_iter().zip(seconds).collect())
    }

    /// Burns one card then deals the street's community cards: 3 for the
    /// flop, 1 for the turn or river. Other phases deal nothing and fail.
    pub fn deal_community(&mut self, phase: Phase) -> Result<Vec<Card>, EngineError> {
        let n = match phase {
            Phase::Flop => 3,
            Phase::Turn | Phase::River => 1,
            other => return Err(EngineError::NoDealForPhase(other)),
        };
        if self.remaining() < n + 1 {
            return Err(EngineError::DeckExhausted {
                needed: n + 1,
                remaining: self.remaining(),
            });
        }
        self.burn_card();
        self.deal(n)
    }

    /// Restores canonical order without reseeding the RNG.
    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    /// Number of cards left to deal.
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
