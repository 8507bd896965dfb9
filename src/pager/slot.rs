use std::mem;
use crate::symbol::Symbol;

/// Fixed-position page in the pager. Only its symbol ever changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    position: usize,
    symbol: Symbol,
}

impl Slot {
    pub fn new(position: usize, symbol: Symbol) -> Self {
        Self { position, symbol }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Replaces the symbol, returning the previous one.
    pub fn assign(&mut self, symbol: Symbol) -> Symbol {
        mem::replace(&mut self.symbol, symbol)
    }
}
