//! Runtime configuration, defaulting to the values in `constants.rs`

use std::fs;
use std::path::Path;
use std::time::Duration;
use serde::Deserialize;
use crate::constants::*;
use crate::error::ConfigError;
use crate::pager::queue::RefillPolicy;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub crossfade: CrossfadeConfig,
    pub pager: PagerConfig,
    pub watchlist: WatchlistConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CrossfadeConfig {
    /// How long the hidden surface renders before it is revealed
    pub pre_roll_ms: u64,
    /// Pause after a flip before the next symbol is pre-loaded
    pub settle_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    pub interval_ms: u64,
    pub refill: RefillPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WatchlistConfig {
    pub delimiter: char,
    pub comment_marker: String,
    /// Smallest watchlist that starts rotation
    pub min_symbols: usize,
}

impl Default for CrossfadeConfig {
    fn default() -> Self {
        Self {
            pre_roll_ms: PRE_ROLL_DURATION.as_millis() as u64,
            settle_ms: SETTLE_DURATION.as_millis() as u64,
        }
    }
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            interval_ms: PAGE_INTERVAL.as_millis() as u64,
            refill: RefillPolicy::default(),
        }
    }
}

impl Default for WatchlistConfig {
    fn default() -> Self {
        Self {
            delimiter: DELIMITER,
            comment_marker: COMMENT_MARKER.to_string(),
            min_symbols: MIN_POOL_LEN,
        }
    }
}

impl CrossfadeConfig {
    pub fn pre_roll(&self) -> Duration {
        Duration::from_millis(self.pre_roll_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

impl PagerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl RotationConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.crossfade.pre_roll_ms == 0 || self.crossfade.settle_ms == 0 {
            return Err(ConfigError::Invalid("crossfade delays must be greater than zero".into()));
        }
        if self.pager.interval_ms == 0 {
            return Err(ConfigError::Invalid("pager interval must be greater than zero".into()));
        }
        if self.watchlist.min_symbols == 0 {
            return Err(ConfigError::Invalid("min_symbols must be at least 1".into()));
        }
        if self.watchlist.comment_marker.trim().is_empty() {
            return Err(ConfigError::Invalid("comment_marker must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = RotationConfig::default();
        assert_eq!(config.crossfade.pre_roll(), Duration::from_secs(9));
        assert_eq!(config.crossfade.settle(), Duration::from_secs(1));
        assert_eq!(config.pager.interval(), Duration::from_secs(12));
        assert_eq!(config.pager.refill, RefillPolicy::WholePool);
        assert_eq!(config.watchlist.delimiter, ',');
        assert_eq!(config.watchlist.comment_marker, "###");
        assert_eq!(config.watchlist.min_symbols, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = RotationConfig::from_toml_str(
            r#"
            [pager]
            interval_ms = 3000
            refill = "exclude-visible"

            [watchlist]
            delimiter = ";"
            "#,
        )
        .unwrap();

        assert_eq!(config.pager.interval(), Duration::from_secs(3));
        assert_eq!(config.pager.refill, RefillPolicy::ExcludeVisible);
        assert_eq!(config.watchlist.delimiter, ';');
        assert_eq!(config.watchlist.min_symbols, 6);
        assert_eq!(config.crossfade, CrossfadeConfig::default());
    }

    #[test]
    fn demo_file_spells_out_the_defaults() {
        let config = RotationConfig::from_toml_str(include_str!("../demos/ticker-wall.toml")).unwrap();
        assert_eq!(config, RotationConfig::default());
    }

    #[test]
    fn zero_interval_is_invalid() {
        let err = RotationConfig::from_toml_str("[pager]\ninterval_ms = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = RotationConfig::from_toml_str("[crossfade\npre_roll_ms = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = RotationConfig::load(Path::new("/nonexistent/ticker-wall.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
