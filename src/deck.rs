use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, HAND_SIZE};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("cannot deal {requested} cards, only {available} left in the deck")]
    NotEnoughCards { requested: usize, available: usize },
}

/// A standard 52-card deck. Index 0 is the top.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_hand_analyzer::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Rank::ALL
            .into_iter()
            .flat_map(|r| Suit::ALL.into_iter().map(move |s| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards still in the deck, top first.
    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw `n` cards from the top of the deck. Fails without drawing if fewer remain.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::NotEnoughCards { requested: n, available: self.cards.len() });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Deal `count` hands. Each hand takes the next five cards from the top.
    ///
    /// ```
    /// use poker_hand_analyzer::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// deck.shuffle_seeded(7);
    /// let hands = deck.deal(6).unwrap();
    /// assert_eq!(hands.len(), 6);
    /// assert_eq!(deck.len(), 22);
    /// ```
    pub fn deal(&mut self, count: usize) -> Result<Vec<Hand>, DeckError> {
        let requested = count.checked_mul(HAND_SIZE).ok_or(DeckError::NotEnoughCards {
            requested: usize::MAX,
            available: self.cards.len(),
        })?;
        let cards = self.draw_n(requested)?;
        Ok(cards.chunks_exact(HAND_SIZE).map(hand_from_chunk).collect())
    }
}

fn hand_from_chunk(chunk: &[Card]) -> Hand {
    Hand::new([chunk[0], chunk[1], chunk[2], chunk[3], chunk[4]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let set: HashSet<Card> = d.remaining().iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn draw_n_takes_from_the_top() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let top: Vec<Card> = d.remaining()[..5].to_vec();
        assert_eq!(d.draw_n(5).unwrap(), top);
        assert_eq!(d.len(), 47);
    }

    #[test]
    fn deal_uses_consecutive_cards() {
        let mut d = Deck::standard();
        d.shuffle_seeded(3);
        let order: Vec<Card> = d.remaining().to_vec();
        let hands = d.deal(2).unwrap();
        assert_eq!(hands[0].cards()[..], order[0..5]);
        assert_eq!(hands[1].cards()[..], order[5..10]);
        assert_eq!(d.remaining(), &order[10..]);
    }

    #[test]
    fn deal_fails_when_deck_runs_out() {
        let mut d = Deck::standard();
        assert_eq!(d.deal(10).unwrap().len(), 10);
        let err = d.deal(1).unwrap_err();
        assert_eq!(err, DeckError::NotEnoughCards { requested: 5, available: 2 });
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn draw_from_empty_deck() {
        let mut d = Deck::standard();
        d.draw_n(52).unwrap();
        assert!(d.is_empty());
        assert_eq!(d.draw_n(1), Err(DeckError::NotEnoughCards { requested: 1, available: 0 }));
    }

    #[test]
    fn huge_deal_counts_are_rejected() {
        for count in [usize::MAX, usize::MAX / HAND_SIZE + 1] {
            let mut d = Deck::standard();
            let err = d.deal(count).unwrap_err();
            assert_eq!(err, DeckError::NotEnoughCards { requested: usize::MAX, available: 52 });
            assert_eq!(d.len(), 52);
        }
    }
}
