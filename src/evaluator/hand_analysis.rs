use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::Card;

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let ranks = cards.map(Card::rank);

        let mut rank_counts = [0u8; 15];
        for rank in ranks {
            rank_counts[rank.value() as usize] += 1;
        }

        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { rank_groups, suit_info, straight_info }
    }

    pub fn is_flush(&self) -> bool {
        self.suit_info.is_flush()
    }

    pub fn is_straight(&self) -> bool {
        self.straight_info.is_straight
    }

    pub fn distinct_faces(&self) -> usize {
        self.rank_groups.distinct()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_royal_flush_analysis() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Ten, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(analysis.is_flush());
        assert!(analysis.is_straight());
        assert!(analysis.straight_info.is_broadway());
        assert_eq!(analysis.distinct_faces(), 5);
    }

    #[test]
    fn test_full_house_analysis() {
        let cards = [
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::Queen, Suit::Clubs),
            Card::new(Rank::Queen, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert_eq!(analysis.distinct_faces(), 2);
        assert_eq!(analysis.rank_groups.max_count(), 3);
        assert!(!analysis.is_flush());
        assert!(!analysis.is_straight());
    }

    #[test]
    fn test_ace_low_analysis() {
        let cards = [
            Card::new(Rank::Five, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Three, Suit::Diamonds),
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Four, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(analysis.is_straight());
        assert_eq!(analysis.straight_info.top_rank, Some(Rank::Five));
        assert!(!analysis.straight_info.is_broadway());
    }

    #[test]
    fn test_high_card_analysis() {
        let cards = [
            Card::new(Rank::Three, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Five, Suit::Diamonds),
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::Nine, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert_eq!(analysis.distinct_faces(), 5);
        assert_eq!(analysis.rank_groups.max_count(), 1);
        assert!(!analysis.is_flush());
        assert!(!analysis.is_straight());
    }
}
