//! Plain-text rendering of decks, hands and the winning order.

use crate::cards::{format_cards, Card};
use crate::hand::Hand;
use crate::ranker::RankedHand;
use std::io::{self, Write};

pub const BANNER: &str = "*** P O K E R H A N D A N A L Y Z E R ***";
pub const WINNING_ORDER: &str = "--- WINNING HAND ORDER ---";

/// Cards per printed deck row.
const DECK_ROW: usize = 13;

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{BANNER}")
}

/// Print a deck under a heading, 13 cards per line.
pub fn write_deck<W: Write>(out: &mut W, heading: &str, cards: &[Card]) -> io::Result<()> {
    writeln!(out, "*** {heading}")?;
    for row in cards.chunks(DECK_ROW) {
        writeln!(out, "{}", format_cards(row))?;
    }
    Ok(())
}

/// Print hands in input order, numbered from 1.
pub fn write_hands<W: Write>(out: &mut W, hands: &[Hand]) -> io::Result<()> {
    writeln!(out, "*** Here are the {} hands...", count_word(hands.len()))?;
    for (i, hand) in hands.iter().enumerate() {
        writeln!(out, "Hand {}: {}", i + 1, hand)?;
    }
    Ok(())
}

/// Print the winning order; each line keeps the hand's original number.
pub fn write_ranking<W: Write>(out: &mut W, ranked: &[RankedHand]) -> io::Result<()> {
    writeln!(out, "{WINNING_ORDER}")?;
    for r in ranked {
        writeln!(out, "Hand {}: {} - {}", r.seat, r.hand, r.category)?;
    }
    Ok(())
}

fn count_word(n: usize) -> String {
    const WORDS: [&str; 11] =
        ["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"];
    WORDS.get(n).map_or_else(|| n.to_string(), |w| (*w).to_string())
}
