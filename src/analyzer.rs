//! End-to-end runs: get hands from a source, print them, rank them.

use crate::config::{Config, Source};
use crate::deck::{Deck, DeckError};
use crate::hand::{read_records, Hand, RecordError};
use crate::ranker::{rank_hands, RankedHand};
use crate::report;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum AnalyzerError {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
    #[error("could not open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Records(#[from] RecordError),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Run the analyzer for `config`, writing the report to `out`.
/// Returns the winning order.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Vec<RankedHand>, AnalyzerError> {
    match &config.source {
        Source::Random { hands, seed } => {
            let seed = seed.unwrap_or_else(|| rand::rng().random());
            info!("dealing {hands} hands, seed {seed}");
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            analyze_deal(*hands, &mut rng, out)
        }
        Source::File(path) => analyze_file(path, out),
    }
}

/// Shuffle a fresh deck with `rng`, deal `hands` hands and report on them.
pub fn analyze_deal<R, W>(
    hands: usize,
    rng: &mut R,
    out: &mut W,
) -> Result<Vec<RankedHand>, AnalyzerError>
where
    R: Rng + ?Sized,
    W: Write,
{
    let mut deck = Deck::standard();
    deck.shuffle_with(rng);

    report::write_banner(out)?;
    writeln!(out, "*** USING RANDOMIZED DECK OF CARDS ***")?;
    report::write_deck(out, "Shuffled 52 card deck:", deck.remaining())?;

    let dealt = deck.deal(hands)?;
    report::write_hands(out, &dealt)?;
    report::write_deck(out, "Here is what remains in the deck...", deck.remaining())?;

    finish(&dealt, out)
}

/// Read hand records from a file and report on them.
pub fn analyze_file<W: Write>(path: &Path, out: &mut W) -> Result<Vec<RankedHand>, AnalyzerError> {
    info!("reading hands from {}", path.display());
    let file =
        File::open(path).map_err(|source| AnalyzerError::Open { path: path.to_owned(), source })?;
    analyze_records(&path.display().to_string(), BufReader::new(file), out)
}

/// Read hand records from `reader` and report on them. `name` is shown as
/// the file name in the report header.
pub fn analyze_records<R, W>(
    name: &str,
    reader: R,
    out: &mut W,
) -> Result<Vec<RankedHand>, AnalyzerError>
where
    R: BufRead,
    W: Write,
{
    let records = read_records(reader)?;
    info!("read {} hands from {name}", records.len());

    report::write_banner(out)?;
    writeln!(out, "*** USING TEST DECK ***")?;
    writeln!(out, "*** File: {name}")?;
    for record in &records {
        writeln!(out, "{}", record.text)?;
    }

    let hands: Vec<Hand> = records.iter().map(|r| r.hand).collect();
    report::write_hands(out, &hands)?;

    finish(&hands, out)
}

fn finish<W: Write>(hands: &[Hand], out: &mut W) -> Result<Vec<RankedHand>, AnalyzerError> {
    let ranked = rank_hands(hands);
    report::write_ranking(out, &ranked)?;
    Ok(ranked)
}
