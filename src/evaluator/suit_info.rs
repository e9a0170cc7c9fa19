use crate::cards::Card;

/// Information about whether all cards share the same suit (flush).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub distinct_suits: usize,
}

impl SuitInfo {
    /// Count the distinct suits across the five cards.
    pub fn detect(cards: &[Card; 5]) -> Self {
        let mut suit_counts = [0u8; 4];
        for card in cards {
            suit_counts[card.suit().index()] += 1;
        }
        let distinct_suits = suit_counts.iter().filter(|&&c| c > 0).count();
        SuitInfo { distinct_suits }
    }

    pub fn is_flush(&self) -> bool {
        self.distinct_suits == 1
    }
}
