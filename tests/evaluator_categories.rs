use poker_hand_analyzer::cards::{Card, Rank, Suit};
use poker_hand_analyzer::evaluator::{classify, classify_cards, Category};
use poker_hand_analyzer::hand::Hand;

fn hand(s: &str) -> Hand {
    s.parse().expect("valid hand")
}

#[test]
fn category_royal_straight_flush() {
    assert_eq!(classify(&hand("10D, JD, QD, KD, AD")), Category::RoyalStraightFlush);
    assert_eq!(classify(&hand("AS, KS, QS, JS, 10S")), Category::RoyalStraightFlush);
}

#[test]
fn category_straight_flush() {
    assert_eq!(classify(&hand("9D, 10D, JD, QD, KD")), Category::StraightFlush);
}

#[test]
fn category_ace_low_straight_flush() {
    assert_eq!(classify(&hand("AS, 2S, 3S, 4S, 5S")), Category::StraightFlush);
}

#[test]
fn category_ace_low_straight() {
    assert_eq!(classify(&hand("AS, 2D, 3S, 4S, 5S")), Category::Straight);
}

#[test]
fn category_four_of_a_kind() {
    assert_eq!(classify(&hand("2D, 2C, 2H, 2S, 9D")), Category::FourOfAKind);
}

#[test]
fn category_full_house() {
    assert_eq!(classify(&hand("2D, 2C, 2H, 9S, 9D")), Category::FullHouse);
}

#[test]
fn category_flush() {
    assert_eq!(classify(&hand("2D, 5D, 9D, JD, KD")), Category::Flush);
}

#[test]
fn category_straight() {
    let xs = [
        Card::new(Rank::Six, Suit::Clubs),
        Card::new(Rank::Ten, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Spades),
        Card::new(Rank::Eight, Suit::Clubs),
    ];
    assert_eq!(classify_cards(&xs), Category::Straight);
}

#[test]
fn category_three_of_a_kind() {
    assert_eq!(classify(&hand("QC, QD, QH, 10S, 2C")), Category::ThreeOfAKind);
}

#[test]
fn category_two_pair() {
    assert_eq!(classify(&hand("JC, JD, 9C, 9H, 2S")), Category::TwoPair);
}

#[test]
fn category_pair() {
    assert_eq!(classify(&hand("AH, AD, 10S, 9C, 2D")), Category::Pair);
}

#[test]
fn category_high_card() {
    assert_eq!(classify(&hand("2D, 5C, 9H, JD, KD")), Category::HighCard);
}

#[test]
fn near_straights_are_not_straights() {
    assert_eq!(classify(&hand("2D, 3C, 4H, 5S, 7D")), Category::HighCard);
    assert_eq!(classify(&hand("KD, AC, 2H, 3S, 4D")), Category::HighCard);
    assert_eq!(classify(&hand("10D, 10C, JH, QS, KD")), Category::Pair);
}
