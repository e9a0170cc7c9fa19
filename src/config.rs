use std::path::PathBuf;

/// Hands dealt when no count is given.
pub const DEFAULT_HANDS: usize = 6;

/// Most hands a single 52-card deck can fill with five cards each.
pub const MAX_HANDS: usize = 10;

/// Where the hands come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Shuffle a fresh deck and deal `hands` hands. Without a seed one is
    /// picked at random (and logged so the run can be repeated).
    Random { hands: usize, seed: Option<u64> },
    /// Read one hand per line from a file.
    File(PathBuf),
}

/// Analyzer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: Source,
}

impl Config {
    pub fn random(hands: usize, seed: Option<u64>) -> Self {
        Self { source: Source::Random { hands, seed } }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self { source: Source::File(path.into()) }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::random(DEFAULT_HANDS, None)
    }
}
