//! Error types for loading watchlists and driving rotation engines

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a watchlist cannot become a usable pool.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read watchlist {}: {}", .path.display(), .source)]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("watchlist holds {found} symbols, at least {required} are required")]
    TooFewSymbols { found: usize, required: usize },

    #[error("symbol is empty")]
    EmptySymbol,
}

/// Errors surfaced by a rotation engine.
#[derive(Error, Debug)]
pub enum RotationError {
    #[error("load rejected: {0}")]
    LoadRejected(#[from] LoadError),

    #[error("rotation step requested before a pool was loaded")]
    EmptyPoolAccess,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
