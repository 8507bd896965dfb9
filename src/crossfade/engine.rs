use std::time::Duration;
use tracing::{debug, info};
use crate::config::RotationConfig;
use crate::constants::SURFACE_COUNT;
use crate::crossfade::state::CrossfadePhase;
use crate::crossfade::surface::{Surface, Visibility};
use crate::cursor::PoolCursor;
use crate::engine::Engine;
use crate::error::RotationError;
use crate::schedule::Timer;
use crate::sink::RenderSink;
use crate::state::EngineState;
use crate::symbol::{Pool, Symbol};

struct Rotation {
    cursor: PoolCursor,
    surfaces: [Surface; SURFACE_COUNT],
    visible: usize,
    phase: CrossfadePhase,
    timer: Timer,
}

impl Rotation {
    fn hidden(&self) -> usize {
        (self.visible + 1) % SURFACE_COUNT
    }

    /// Loads the next symbol into the hidden surface and starts the pre-roll.
    fn preload(&mut self, pre_roll: Duration, sink: &mut dyn RenderSink) {
        let hidden = self.hidden();
        let next = self.cursor.peek(1).clone();
        debug!(surface = hidden, symbol = %next, "Pre-loading hidden surface");
        sink.render(hidden, &next);
        self.surfaces[hidden].symbol = next;
        self.phase = CrossfadePhase::PreRolling;
        self.timer.rearm(pre_roll);
    }

    /// Swaps visibility of both surfaces in one step and moves the cursor onto the new symbol.
    fn flip(&mut self, settle: Duration, sink: &mut dyn RenderSink) {
        let outgoing = self.visible;
        let incoming = self.hidden();

        self.surfaces[outgoing].visibility = Visibility::Hidden;
        self.surfaces[incoming].visibility = Visibility::Visible;
        self.visible = incoming;
        self.cursor.advance();
        debug_assert_eq!(&self.surfaces[incoming].symbol, self.cursor.current());

        sink.set_visible(outgoing, false);
        sink.set_visible(incoming, true);

        info!(
            surface = incoming,
            index = self.cursor.index(),
            symbol = %self.surfaces[incoming].symbol,
            "Crossfading to next symbol"
        );

        self.phase = CrossfadePhase::Settling;
        self.timer.rearm(settle);
    }
}

/// Cycles the whole pool through two stacked surfaces.
///
/// While one surface is on screen the other is loaded with the next symbol; after the pre-roll
/// the two swap visibility, and after a short settle the next pre-load begins.
pub struct CrossfadeEngine {
    pre_roll: Duration,
    settle: Duration,
    min_symbols: usize,
    state: EngineState,
    rotation: Option<Rotation>,
    flips: u64,
}

impl CrossfadeEngine {
    pub fn new(config: &RotationConfig) -> Self {
        Self {
            pre_roll: config.crossfade.pre_roll(),
            settle: config.crossfade.settle(),
            min_symbols: config.watchlist.min_symbols,
            state: EngineState::Idle,
            rotation: None,
            flips: 0,
        }
    }

    pub fn surfaces(&self) -> Option<&[Surface; SURFACE_COUNT]> {
        self.rotation.as_ref().map(|r| &r.surfaces)
    }

    pub fn visible_surface(&self) -> Option<usize> {
        self.rotation.as_ref().map(|r| r.visible)
    }

    /// Symbol on the visible surface.
    pub fn current_symbol(&self) -> Option<&Symbol> {
        self.rotation.as_ref().map(|r| r.cursor.current())
    }

    pub fn current_index(&self) -> Option<usize> {
        self.rotation.as_ref().map(|r| r.cursor.index())
    }

    pub fn phase(&self) -> Option<CrossfadePhase> {
        self.rotation.as_ref().map(|r| r.phase)
    }

    pub fn time_to_next_event(&self) -> Option<Duration> {
        self.rotation.as_ref().and_then(|r| r.timer.remaining())
    }

    /// Flips completed since the last load.
    pub fn flips(&self) -> u64 {
        self.flips
    }
}

impl Engine for CrossfadeEngine {
    fn name(&self) -> &'static str {
        "crossfade"
    }

    fn state(&self) -> EngineState {
        self.state
    }

    fn initialize(&mut self, pool: Pool, sink: &mut dyn RenderSink) -> Result<(), RotationError> {
        pool.require(self.min_symbols)?;
        if self.rotation.is_some() {
            info!("Replacing loaded watchlist");
            self.teardown();
        }

        let cursor = PoolCursor::new(pool);
        let first = cursor.current().clone();
        sink.render(0, &first);
        sink.set_visible(0, true);
        sink.set_visible(1, false);

        let mut rotation = Rotation {
            surfaces: [Surface::visible(first.clone()), Surface::hidden(first)],
            cursor,
            visible: 0,
            phase: CrossfadePhase::PreRolling,
            timer: Timer::once(self.pre_roll),
        };
        rotation.preload(self.pre_roll, sink);

        info!(symbols = rotation.cursor.pool().len(), "Crossfade rotation started");
        self.rotation = Some(rotation);
        self.state = EngineState::Running;
        self.flips = 0;
        Ok(())
    }

    fn update(&mut self, dt: Duration, sink: &mut dyn RenderSink) -> Result<usize, RotationError> {
        let rotation = match self.state {
            EngineState::Idle => return Err(RotationError::EmptyPoolAccess),
            EngineState::TornDown => return Ok(0),
            EngineState::Running => self.rotation.as_mut().ok_or(RotationError::EmptyPoolAccess)?,
        };

        let mut remaining = dt;
        let mut flips = 0;
        while let Some(overshoot) = rotation.timer.advance(remaining) {
            remaining = overshoot;
            match rotation.phase {
                CrossfadePhase::PreRolling => {
                    rotation.flip(self.settle, sink);
                    flips += 1;
                }
                CrossfadePhase::Settling => rotation.preload(self.pre_roll, sink),
            }
        }

        self.flips += flips as u64;
        Ok(flips)
    }

    fn teardown(&mut self) -> bool {
        let released = match self.rotation.take() {
            Some(mut rotation) => rotation.timer.cancel(),
            None => false,
        };
        if released {
            info!(flips = self.flips, "Crossfade rotation torn down");
        }
        if released || self.state == EngineState::Running {
            self.state = EngineState::TornDown;
        }
        released
    }
}
