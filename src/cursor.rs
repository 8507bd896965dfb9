use crate::symbol::{Pool, Symbol};

/// Wrapping read position over a [`Pool`].
///
/// `index` always stays in `0..pool.len()`; stepping past the last symbol returns to the first.
#[derive(Debug, Clone)]
pub struct PoolCursor {
    pool: Pool,
    index: usize,
}

impl PoolCursor {
    pub fn new(pool: Pool) -> Self {
        Self { pool, index: 0 }
    }

    pub fn starting_at(pool: Pool, index: usize) -> Self {
        let index = index % pool.len();
        Self { pool, index }
    }

    /// Returns the symbol under the cursor and moves one position forward.
    pub fn next_symbol(&mut self) -> Symbol {
        let symbol = self.current().clone();
        self.index = (self.index + 1) % self.pool.len();
        symbol
    }

    /// Symbol `offset` positions ahead, without moving.
    pub fn peek(&self, offset: usize) -> &Symbol {
        let len = self.pool.len();
        &self.pool.as_slice()[(self.index + offset % len) % len]
    }

    pub fn current(&self) -> &Symbol {
        self.peek(0)
    }

    /// Moves one position forward and returns the new current symbol.
    pub fn advance(&mut self) -> &Symbol {
        self.index = (self.index + 1) % self.pool.len();
        self.current()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }
}

impl Iterator for PoolCursor {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        Some(self.next_symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(symbols: impl IntoIterator<Item = Symbol>) -> Vec<String> {
        symbols.into_iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn visits_every_symbol_once_then_repeats() {
        let pool = Pool::from_strs(&["A", "B", "C", "D"]).unwrap();
        let mut cursor = PoolCursor::new(pool);

        let first_pass = names(cursor.by_ref().take(4));
        let second_pass = names(cursor.by_ref().take(4));

        assert_eq!(first_pass, vec!["A", "B", "C", "D"]);
        assert_eq!(second_pass, first_pass);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn peek_does_not_move() {
        let pool = Pool::from_strs(&["A", "B", "C"]).unwrap();
        let cursor = PoolCursor::new(pool);

        assert_eq!(cursor.peek(1), "B");
        assert_eq!(cursor.peek(2), "C");
        assert_eq!(cursor.peek(3), "A");
        assert_eq!(cursor.peek(usize::MAX), cursor.peek(usize::MAX % 3));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn advance_wraps_to_start() {
        let pool = Pool::from_strs(&["A", "B"]).unwrap();
        let mut cursor = PoolCursor::starting_at(pool, 1);

        assert_eq!(cursor.current(), "B");
        assert_eq!(cursor.advance(), "A");
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn single_symbol_pool_always_yields_it() {
        let pool = Pool::from_strs(&["ONLY"]).unwrap();
        let mut cursor = PoolCursor::new(pool);

        assert_eq!(cursor.peek(1), "ONLY");
        assert_eq!(names(cursor.take(3)), vec!["ONLY", "ONLY", "ONLY"]);
    }

    #[test]
    fn starting_index_is_reduced_modulo_len() {
        let pool = Pool::from_strs(&["A", "B", "C"]).unwrap();
        let cursor = PoolCursor::starting_at(pool, 7);
        assert_eq!(cursor.index(), 1);
    }
}
