use std::fmt;
use crate::error::LoadError;

/// Opaque instrument identifier, e.g. `NASDAQ:AAPL`. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, LoadError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(LoadError::EmptySymbol);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordered, duplicate-free set of symbols handed to an engine at load time.
///
/// A `Pool` is never empty, so anything built on top of one (cursors, slots, queues) can
/// index into it without a separate "not loaded yet" check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    symbols: Vec<Symbol>,
}

impl Pool {
    /// Builds a pool, keeping the first occurrence of any repeated symbol.
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Result<Self, LoadError> {
        let mut unique: Vec<Symbol> = Vec::new();
        for symbol in symbols {
            if !unique.contains(&symbol) {
                unique.push(symbol);
            }
        }
        if unique.is_empty() {
            return Err(LoadError::TooFewSymbols { found: 0, required: 1 });
        }
        Ok(Self { symbols: unique })
    }

    pub fn from_strs(raw: &[&str]) -> Result<Self, LoadError> {
        let symbols = raw.iter().map(Symbol::new).collect::<Result<Vec<_>, _>>()?;
        Self::new(symbols)
    }

    /// Rejects the pool when it is too small to activate an engine.
    pub fn require(&self, min: usize) -> Result<(), LoadError> {
        if self.symbols.len() < min {
            return Err(LoadError::TooFewSymbols { found: self.symbols.len(), required: min });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn first(&self) -> &Symbol {
        &self.symbols[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl<'a> IntoIterator for &'a Pool {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_is_trimmed() {
        let symbol = Symbol::new("  NASDAQ:AAPL \r").unwrap();
        assert_eq!(symbol.as_str(), "NASDAQ:AAPL");
        assert_eq!(symbol, "NASDAQ:AAPL");
    }

    #[test]
    fn blank_symbol_is_rejected() {
        assert!(matches!(Symbol::new("   "), Err(LoadError::EmptySymbol)));
    }

    #[test]
    fn pool_keeps_first_occurrence_order() {
        let pool = Pool::from_strs(&["B", "A", "B", "C", "A"]).unwrap();
        let names: Vec<&str> = pool.iter().map(Symbol::as_str).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert!(matches!(
            Pool::new(Vec::new()),
            Err(LoadError::TooFewSymbols { found: 0, .. })
        ));
    }

    #[test]
    fn require_reports_counts() {
        let pool = Pool::from_strs(&["A", "B", "C", "D", "E"]).unwrap();
        match pool.require(6) {
            Err(LoadError::TooFewSymbols { found, required }) => {
                assert_eq!(found, 5);
                assert_eq!(required, 6);
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert!(pool.require(5).is_ok());
    }
}
