use std::fs;
use std::path::Path;
use tracing::{debug, info};
use crate::config::WatchlistConfig;
use crate::error::LoadError;
use crate::symbol::{Pool, Symbol};

/// Editable list of symbols, in insertion order and without repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watchlist {
    symbols: Vec<Symbol>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `text` on the delimiter and on newlines, trimming entries and skipping blanks,
    /// comment entries and repeats.
    pub fn parse(text: &str, config: &WatchlistConfig) -> Self {
        let mut watchlist = Self::new();
        let entries = text
            .split(|c: char| c == config.delimiter || c == '\n')
            .map(str::trim)
            .filter(|entry| !entry.is_empty() && !entry.starts_with(config.comment_marker.as_str()));
        for entry in entries {
            if !watchlist.add(entry) {
                debug!(symbol = entry, "Skipping repeated symbol");
            }
        }
        watchlist
    }

    /// Appends a symbol unless it is blank or already present.
    pub fn add(&mut self, raw: &str) -> bool {
        match Symbol::new(raw) {
            Ok(symbol) if !self.symbols.contains(&symbol) => {
                self.symbols.push(symbol);
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, raw: &str) -> bool {
        let before = self.symbols.len();
        self.symbols.retain(|symbol| symbol.as_str() != raw.trim());
        self.symbols.len() != before
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.symbols.iter().any(|symbol| symbol.as_str() == raw.trim())
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Hands the symbols over as a pool, rejecting lists shorter than `min_symbols`.
    pub fn into_pool(self, min_symbols: usize) -> Result<Pool, LoadError> {
        if self.symbols.len() < min_symbols {
            return Err(LoadError::TooFewSymbols { found: self.symbols.len(), required: min_symbols });
        }
        Pool::new(self.symbols)
    }
}

pub fn load_watchlist(path: &Path, config: &WatchlistConfig) -> Result<Watchlist, LoadError> {
    let text = fs::read_to_string(path)
        .map_err(|source| LoadError::Unreadable { path: path.to_path_buf(), source })?;
    let watchlist = Watchlist::parse(&text, config);
    info!(path = %path.display(), symbols = watchlist.len(), "Watchlist loaded");
    Ok(watchlist)
}

/// Reads a watchlist file straight into a pool.
pub fn load_pool(path: &Path, config: &WatchlistConfig) -> Result<Pool, LoadError> {
    load_watchlist(path, config)?.into_pool(config.min_symbols)
}
