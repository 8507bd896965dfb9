use std::collections::VecDeque;
use std::time::Duration;
use tracing::info;
use crate::config::RotationConfig;
use crate::constants::{SLOT_COUNT, TURN_HISTORY};
use crate::cursor::PoolCursor;
use crate::engine::Engine;
use crate::error::RotationError;
use crate::pager::queue::{RefillPolicy, ReplenishmentQueue};
use crate::pager::slot::Slot;
use crate::schedule::Timer;
use crate::sink::RenderSink;
use crate::state::EngineState;
use crate::symbol::{Pool, Symbol};

/// What one page turn changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTurn {
    pub from_page: usize,
    pub to_page: usize,
    pub previous: Symbol,
    pub symbol: Symbol,
    pub refilled: bool,
}

/// Bounded record of recent page turns plus a running total.
#[derive(Debug, Default)]
struct TurnLog {
    recent: VecDeque<PageTurn>,
    total: u64,
}

impl TurnLog {
    fn push(&mut self, turn: PageTurn) {
        if self.recent.len() == TURN_HISTORY {
            self.recent.pop_front();
        }
        self.recent.push_back(turn);
        self.total += 1;
    }

    fn clear(&mut self) {
        self.recent.clear();
        self.total = 0;
    }
}

struct Pages {
    slots: [Slot; SLOT_COUNT],
    page: usize,
    queue: ReplenishmentQueue,
    timer: Timer,
}

impl Pages {
    fn seed(pool: Pool, policy: RefillPolicy, interval: Duration) -> Self {
        let mut cursor = PoolCursor::new(pool.clone());
        let slots = std::array::from_fn(|position| Slot::new(position, cursor.next_symbol()));
        Self {
            slots,
            page: 0,
            queue: ReplenishmentQueue::after_seed(pool, SLOT_COUNT, policy),
            timer: Timer::repeating(interval),
        }
    }

    /// Scrolls to the next page and restocks the slot that just left the screen.
    fn turn(&mut self, sink: &mut dyn RenderSink) -> PageTurn {
        let from_page = self.page;
        let to_page = (from_page + 1) % SLOT_COUNT;

        let popped = self.queue.pop(&self.slots);
        let previous = self.slots[from_page].assign(popped.symbol.clone());
        self.page = to_page;

        sink.set_page(to_page);
        sink.render(from_page, &popped.symbol);

        info!(
            page = to_page,
            slot = from_page,
            symbol = %popped.symbol,
            refilled = popped.refilled,
            "Swapping to next page"
        );

        PageTurn {
            from_page,
            to_page,
            previous,
            symbol: popped.symbol,
            refilled: popped.refilled,
        }
    }
}

/// Six horizontally paged slots; on every interval the pager scrolls one page forward and
/// gives the slot it scrolled away from the next queued symbol.
pub struct PagerEngine {
    interval: Duration,
    refill: RefillPolicy,
    min_symbols: usize,
    state: EngineState,
    pages: Option<Pages>,
    turns: TurnLog,
}

impl PagerEngine {
    pub fn new(config: &RotationConfig) -> Self {
        Self {
            interval: config.pager.interval(),
            refill: config.pager.refill,
            min_symbols: config.watchlist.min_symbols.max(SLOT_COUNT),
            state: EngineState::Idle,
            pages: None,
            turns: TurnLog::default(),
        }
    }

    pub fn slots(&self) -> Option<&[Slot; SLOT_COUNT]> {
        self.pages.as_ref().map(|p| &p.slots)
    }

    /// Symbols on each slot, in position order.
    pub fn slot_symbols(&self) -> Option<Vec<&Symbol>> {
        self.slots().map(|slots| slots.iter().map(Slot::symbol).collect())
    }

    pub fn page(&self) -> Option<usize> {
        self.pages.as_ref().map(|p| p.page)
    }

    pub fn queue(&self) -> Option<&ReplenishmentQueue> {
        self.pages.as_ref().map(|p| &p.queue)
    }

    pub fn time_to_next_turn(&self) -> Option<Duration> {
        self.pages.as_ref().and_then(|p| p.timer.remaining())
    }

    /// The most recent page turns since the last load, oldest first. At most
    /// `TURN_HISTORY` are kept.
    pub fn turns(&self) -> &VecDeque<PageTurn> {
        &self.turns.recent
    }

    /// Total page turns since the last load, including those no longer in `turns`.
    pub fn turn_count(&self) -> u64 {
        self.turns.total
    }
}

impl Engine for PagerEngine {
    fn name(&self) -> &'static str {
        "pager"
    }

    fn state(&self) -> EngineState {
        self.state
    }

    fn initialize(&mut self, pool: Pool, sink: &mut dyn RenderSink) -> Result<(), RotationError> {
        pool.require(self.min_symbols)?;
        if self.pages.is_some() {
            info!("Replacing loaded watchlist");
            self.teardown();
        }

        let symbols = pool.len();
        let pages = Pages::seed(pool, self.refill, self.interval);
        for slot in &pages.slots {
            sink.render(slot.position(), slot.symbol());
        }
        sink.set_page(pages.page);

        info!(symbols, queued = pages.queue.len(), "Pager rotation started");
        self.pages = Some(pages);
        self.turns.clear();
        self.state = EngineState::Running;
        Ok(())
    }

    fn update(&mut self, dt: Duration, sink: &mut dyn RenderSink) -> Result<usize, RotationError> {
        let pages = match self.state {
            EngineState::Idle => return Err(RotationError::EmptyPoolAccess),
            EngineState::TornDown => return Ok(0),
            EngineState::Running => self.pages.as_mut().ok_or(RotationError::EmptyPoolAccess)?,
        };

        let mut remaining = dt;
        let mut turned = 0;
        while let Some(overshoot) = pages.timer.advance(remaining) {
            remaining = overshoot;
            self.turns.push(pages.turn(sink));
            turned += 1;
        }
        Ok(turned)
    }

    fn teardown(&mut self) -> bool {
        let released = match self.pages.take() {
            Some(mut pages) => pages.timer.cancel(),
            None => false,
        };
        if released {
            info!(turns = self.turns.total, "Pager rotation torn down");
        }
        if released || self.state == EngineState::Running {
            self.state = EngineState::TornDown;
        }
        released
    }
}
