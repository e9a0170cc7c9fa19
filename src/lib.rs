//! poker-hand-analyzer: five-card poker hand classification and ranking
//!
//! Goals:
//! - Deterministic classification into ten categories, Royal Straight Flush down to High Card
//! - A total, stable order over any number of hands
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: rank a few hands
//! ```
//! use poker_hand_analyzer::evaluator::{classify, Category};
//! use poker_hand_analyzer::hand::Hand;
//! use poker_hand_analyzer::ranker::rank;
//!
//! let royal: Hand = "10D, JD, QD, KD, AD".parse().unwrap();
//! let boat: Hand = "2D, 2C, 2H, 9S, 9D".parse().unwrap();
//! assert_eq!(classify(&royal), Category::RoyalStraightFlush);
//! assert_eq!(classify(&boat), Category::FullHouse);
//!
//! let ranked = rank(&[boat, royal]);
//! assert_eq!(ranked[0], royal);
//! ```
//!
//! ## CLI
//! Deal six random hands, or rank hands from a file:
//! ```sh
//! cargo run -- --seed 42
//! cargo run -- hands.txt
//! ```

pub mod analyzer;
pub mod cards;
pub mod config;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod ranker;
pub mod report;
