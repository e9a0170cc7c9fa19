//! Ordering hands from strongest to weakest.

use crate::evaluator::{classify, Category};
use crate::hand::Hand;
use core::cmp::Ordering;
use log::debug;

/// A hand placed in the winning order, with its 1-based seat in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedHand {
    pub seat: usize,
    pub hand: Hand,
    pub category: Category,
}

/// Compare two hands. `Greater` means `a` is the stronger hand.
///
/// Category strength decides first. Hands of the same category are compared
/// card by card on copies sorted by descending face, with the suit order
/// breaking ties on equal faces.
///
/// This is not real poker kicker logic: it never looks at which cards
/// form the pair or trips, and suits decide otherwise-equal hands.
///
/// ```
/// use poker_hand_analyzer::hand::Hand;
/// use poker_hand_analyzer::ranker::compare;
/// use std::cmp::Ordering;
///
/// let flush: Hand = "2D, 5D, 9D, JD, KD".parse().unwrap();
/// let straight: Hand = "10C, JD, QH, KS, AD".parse().unwrap();
/// assert_eq!(compare(&flush, &straight), Ordering::Greater);
/// ```
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    compare_classified(a, classify(a), b, classify(b))
}

fn compare_classified(a: &Hand, cat_a: Category, b: &Hand, cat_b: Category) -> Ordering {
    cat_a.cmp(&cat_b).then_with(|| tie_break(a, b))
}

// Card order is (face, suit), so comparing the sorted arrays stops at the
// first differing face, or the first differing suit on an equal face.
fn tie_break(a: &Hand, b: &Hand) -> Ordering {
    a.sorted_desc().cmp(&b.sorted_desc())
}

/// Order hands strongest first. Equal hands keep their input order and the
/// input slice is left untouched.
///
/// ```
/// use poker_hand_analyzer::hand::Hand;
/// use poker_hand_analyzer::ranker::rank;
///
/// let pair: Hand = "7D, 7C, QH, KS, 2D".parse().unwrap();
/// let quads: Hand = "2D, 2C, 2H, 2S, 9D".parse().unwrap();
/// assert_eq!(rank(&[pair, quads]), vec![quads, pair]);
/// ```
pub fn rank(hands: &[Hand]) -> Vec<Hand> {
    rank_hands(hands).into_iter().map(|ranked| ranked.hand).collect()
}

/// Like [`rank`], keeping each hand's seat and category for reporting.
pub fn rank_hands(hands: &[Hand]) -> Vec<RankedHand> {
    let mut ranked: Vec<RankedHand> = hands
        .iter()
        .enumerate()
        .map(|(i, hand)| RankedHand { seat: i + 1, hand: *hand, category: classify(hand) })
        .collect();

    // Stable sort, descending
    ranked.sort_by(|x, y| compare_classified(&y.hand, y.category, &x.hand, x.category));

    for (place, r) in ranked.iter().enumerate() {
        debug!("#{} seat {}: {} ({})", place + 1, r.seat, r.hand, r.category);
    }
    ranked
}
