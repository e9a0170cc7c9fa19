//! Five-card hand classification.

pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::hand::Hand;
use std::fmt;

/// Poker hand category from weakest to strongest.
///
/// The discriminant is the category strength, 1 (High Card) to 10
/// (Royal Straight Flush).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalStraightFlush = 10,
}

impl Category {
    /// All categories, strongest first.
    pub const ALL: [Category; 10] = [
        Category::RoyalStraightFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    pub const fn strength(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalStraightFlush => "Royal Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a hand.
///
/// ```
/// use poker_hand_analyzer::evaluator::{classify, Category};
/// use poker_hand_analyzer::hand::Hand;
///
/// let hand: Hand = "AS, 2S, 3S, 4S, 5S".parse().unwrap();
/// assert_eq!(classify(&hand), Category::StraightFlush);
/// ```
pub fn classify(hand: &Hand) -> Category {
    classify_cards(hand.cards())
}

/// Classify exactly five cards. Duplicate cards are not rejected; the
/// result is whatever the face and suit counts say.
pub fn classify_cards(cards: &[Card; 5]) -> Category {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    DETECTORS
        .iter()
        .find(|detector| detector.detect(&analysis))
        .map_or(Category::HighCard, |detector| detector.category())
}
