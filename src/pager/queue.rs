use std::collections::VecDeque;
use serde::Deserialize;
use tracing::debug;
use crate::pager::slot::Slot;
use crate::symbol::{Pool, Symbol};

/// What goes back into the queue once it runs dry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefillPolicy {
    /// Every pool symbol, including the ones currently on a slot
    #[default]
    WholePool,
    /// Pool symbols not currently on a slot; falls back to the whole pool if none are left
    ExcludeVisible,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popped {
    pub symbol: Symbol,
    pub refilled: bool,
}

/// Backlog of symbols waiting for a slot.
#[derive(Debug, Clone)]
pub struct ReplenishmentQueue {
    pending: VecDeque<Symbol>,
    source: Pool,
    policy: RefillPolicy,
    refills: usize,
}

impl ReplenishmentQueue {
    /// Queue holding everything after the first `seeded` pool entries.
    pub fn after_seed(source: Pool, seeded: usize, policy: RefillPolicy) -> Self {
        let pending = source.iter().skip(seeded).cloned().collect();
        Self { pending, source, policy, refills: 0 }
    }

    /// Pops the head, refilling first when the queue is empty.
    pub fn pop(&mut self, slots: &[Slot]) -> Popped {
        if let Some(symbol) = self.pending.pop_front() {
            return Popped { symbol, refilled: false };
        }
        self.refill(slots);
        let symbol = self
            .pending
            .pop_front()
            .unwrap_or_else(|| self.source.first().clone());
        Popped { symbol, refilled: true }
    }

    fn refill(&mut self, slots: &[Slot]) {
        self.pending = match self.policy {
            RefillPolicy::WholePool => self.source.iter().cloned().collect(),
            RefillPolicy::ExcludeVisible => self
                .source
                .iter()
                .filter(|symbol| !slots.iter().any(|slot| slot.symbol() == *symbol))
                .cloned()
                .collect(),
        };
        if self.pending.is_empty() {
            self.pending = self.source.iter().cloned().collect();
        }
        self.refills += 1;
        debug!(queued = self.pending.len(), refills = self.refills, "Refilled replenishment queue");
    }

    pub fn pending(&self) -> impl Iterator<Item = &Symbol> {
        self.pending.iter()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn refills(&self) -> usize {
        self.refills
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn slots(names: &[&str]) -> Vec<Slot> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Slot::new(i, Symbol::new(n).unwrap()))
            .collect()
    }

    fn drain(queue: &mut ReplenishmentQueue, slots: &[Slot], n: usize) -> Vec<String> {
        (0..n).map(|_| queue.pop(slots).symbol.to_string()).collect()
    }

    #[test]
    fn pops_tail_then_whole_pool_copies() {
        let pool = Pool::from_strs(&["A", "B", "C", "D", "E", "F", "G", "H"]).unwrap();
        let visible = slots(&["A", "B", "C", "D", "E", "F"]);
        let mut queue = ReplenishmentQueue::after_seed(pool, 6, RefillPolicy::WholePool);

        assert_eq!(
            drain(&mut queue, &visible, 18),
            vec![
                "G", "H", "A", "B", "C", "D", "E", "F", "G", "H", "A", "B", "C", "D", "E", "F",
                "G", "H"
            ]
        );
        assert_eq!(queue.refills(), 2);
    }

    #[test]
    fn refill_is_reported_on_the_pop_that_triggered_it() {
        let pool = Pool::from_strs(&["A", "B", "C", "D", "E", "F", "G"]).unwrap();
        let visible = slots(&["A", "B", "C", "D", "E", "F"]);
        let mut queue = ReplenishmentQueue::after_seed(pool, 6, RefillPolicy::WholePool);

        assert_eq!(queue.pop(&visible), Popped { symbol: Symbol::new("G").unwrap(), refilled: false });
        assert!(queue.is_empty());
        assert_eq!(queue.pop(&visible), Popped { symbol: Symbol::new("A").unwrap(), refilled: true });
        assert_eq!(queue.len(), 6);
    }

    #[test]
    fn exclude_visible_skips_symbols_on_slots() {
        let pool = Pool::from_strs(&["A", "B", "C", "D", "E", "F", "G", "H"]).unwrap();
        let visible = slots(&["G", "B", "C", "H", "E", "F"]);
        let mut queue = ReplenishmentQueue::after_seed(pool, 8, RefillPolicy::ExcludeVisible);

        assert_eq!(drain(&mut queue, &visible, 2), vec!["A", "D"]);
    }

    #[test]
    fn exclude_visible_falls_back_when_everything_is_shown() {
        let pool = Pool::from_strs(&["A", "B", "C", "D", "E", "F"]).unwrap();
        let visible = slots(&["A", "B", "C", "D", "E", "F"]);
        let mut queue = ReplenishmentQueue::after_seed(pool, 6, RefillPolicy::ExcludeVisible);

        let popped = queue.pop(&visible);
        assert_eq!(popped.symbol, "A");
        assert!(popped.refilled);
        assert_eq!(queue.len(), 5);
    }
}
