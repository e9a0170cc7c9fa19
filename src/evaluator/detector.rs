use super::hand_analysis::HandAnalysis;
use crate::evaluator::Category;

/// Strategy pattern: each detector recognises one category.
///
/// Detectors only make sense in table order; later ones assume the earlier
/// ones did not match.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
}

// ============================================================================
// Detector Implementations (in precedence order)
// ============================================================================

/// Royal Straight Flush: 10-J-Q-K-A, all same suit
pub struct RoyalStraightFlushDetector;

impl CategoryDetector for RoyalStraightFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalStraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush() && analysis.is_straight() && analysis.straight_info.is_broadway()
    }
}

/// Straight Flush: five consecutive faces, all same suit (ace-low included)
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush() && analysis.is_straight()
    }
}

/// Four of a Kind: two distinct faces, one of them four times
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.distinct_faces() == 2 && analysis.rank_groups.max_count() == 4
    }
}

/// Full House: two distinct faces otherwise (3 + 2)
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.distinct_faces() == 2
    }
}

/// Flush: all five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush()
    }
}

/// Straight: five consecutive faces
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight()
    }
}

/// Three of a Kind: three distinct faces, one of them three times
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.distinct_faces() == 3 && analysis.rank_groups.trips().is_some()
    }
}

/// Two Pair: three distinct faces otherwise (2 + 2 + 1)
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.distinct_faces() == 3
    }
}

/// Pair: four distinct faces
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.distinct_faces() == 4
    }
}

/// High Card: nothing else matched
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true // Always matches as fallback
    }
}

// ============================================================================
// Static detector list (in precedence order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalStraightFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
