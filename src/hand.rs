use crate::cards::{format_cards, parse_cards, Card, CardParseError};
use log::{debug, warn};
use std::collections::HashSet;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 5 cards, got {0}")]
    CardCount(usize),
    #[error("card parse error: {0}")]
    CardParse(#[from] CardParseError),
}

/// Errors from reading a stream of hand records.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum RecordError {
    #[error("failed to read hand records: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: HandError,
    },
}

/// Five cards, kept in the order they were dealt or read.
///
/// Cards are not required to be distinct; the classifier works on whatever
/// multiset it is given.
///
/// ```
/// use poker_hand_analyzer::hand::Hand;
///
/// let hand: Hand = "10D, JD, QD, KD, AD".parse().unwrap();
/// assert_eq!(hand.to_string(), "10D JD QD KD AD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::CardCount(slice.len()))?;
        Ok(Self(cards))
    }

    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    /// A copy of the cards sorted by descending face, equal faces by
    /// descending suit. The hand itself keeps its original order.
    pub fn sorted_desc(&self) -> [Card; HAND_SIZE] {
        let mut sorted = self.0;
        sorted.sort_by(|a, b| b.cmp(a));
        sorted
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_cards(&self.0))
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Parse one record: card tokens separated by commas, whitespace around
    /// each token ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(&parse_cards(s)?)
    }
}

/// One parsed line of a hand file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandRecord {
    /// 1-based line number in the input.
    pub line: usize,
    /// The line as read, without the trailing newline.
    pub text: String,
    pub hand: Hand,
}

/// Read one hand per line. Blank lines are skipped; any other line must
/// hold exactly five cards. Cards repeated across records are logged but
/// accepted.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<HandRecord>, RecordError> {
    let mut records = Vec::new();
    let mut seen = HashSet::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let hand: Hand =
            line.parse().map_err(|source| RecordError::Line { line: lineno, source })?;
        debug!("line {lineno}: {hand}");

        for card in hand.cards() {
            if !seen.insert(*card) {
                warn!("card {card} on line {lineno} was already dealt");
            }
        }
        records.push(HandRecord { line: lineno, text: line, hand });
    }

    Ok(records)
}
