use anyhow::{Context, Result};
use clap::Parser;
use poker_hand_analyzer::analyzer;
use poker_hand_analyzer::config::{Config, DEFAULT_HANDS, MAX_HANDS};
use std::io::{self, Write};
use std::path::PathBuf;

/// Deal or read five-card poker hands and print them in winning order.
#[derive(Debug, Parser)]
#[clap(version)]
struct Cli {
    /// File with one hand per line, e.g. "10D, JD, QD, KD, AD".
    /// Without it a shuffled deck is dealt.
    file: Option<PathBuf>,
    /// Number of hands to deal from the shuffled deck.
    #[clap(long, default_value_t = DEFAULT_HANDS as u8, conflicts_with = "file",
        value_parser = clap::value_parser!(u8).range(1..=MAX_HANDS as i64))]
    hands: u8,
    /// Seed for a reproducible shuffle.
    #[clap(long, short, conflicts_with = "file")]
    seed: Option<u64>,
    /// More log output on stderr (-v info, -vv debug).
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::builder().filter_level(level).format_target(false).parse_default_env().init();

    let config = match cli.file {
        Some(path) => Config::file(path),
        None => Config::random(usize::from(cli.hands), cli.seed),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    analyzer::run(&config, &mut out).context("poker hand analysis failed")?;
    out.flush()?;
    Ok(())
}
