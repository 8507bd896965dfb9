//! Rendering sink contract between the rotation engines and whatever draws the charts.
//!
//! Targets are surface indices for the crossfader and slot positions for the pager. All calls
//! made during one `Engine::update` belong to the same cycle; a sink that draws should only
//! present after the update returns.

use tracing::info;
use crate::symbol::Symbol;

pub trait RenderSink {
    /// Load `symbol` into the chart widget behind `target`.
    fn render(&mut self, target: usize, symbol: &Symbol);

    fn set_visible(&mut self, _target: usize, _visible: bool) {}

    fn set_page(&mut self, _page: usize) {}
}

/// Logs every instruction; used by the headless runner.
#[derive(Debug, Default)]
pub struct TracingSink;

impl RenderSink for TracingSink {
    fn render(&mut self, target: usize, symbol: &Symbol) {
        info!(target_index = target, symbol = %symbol, "Loading chart");
    }

    fn set_visible(&mut self, target: usize, visible: bool) {
        info!(target_index = target, visible, "Setting visibility");
    }

    fn set_page(&mut self, page: usize) {
        info!(page, "Scrolling to page");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Render { target: usize, symbol: Symbol },
    Visible { target: usize, visible: bool },
    Page(usize),
}

/// Keeps every instruction in call order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Drains the recorded events.
    pub fn take(&mut self) -> Vec<SinkEvent> {
        std::mem::take(&mut self.events)
    }

    /// Symbols loaded so far, with their targets.
    pub fn rendered(&self) -> Vec<(usize, &Symbol)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Render { target, symbol } => Some((*target, symbol)),
                _ => None,
            })
            .collect()
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, target: usize, symbol: &Symbol) {
        self.events.push(SinkEvent::Render { target, symbol: symbol.clone() });
    }

    fn set_visible(&mut self, target: usize, visible: bool) {
        self.events.push(SinkEvent::Visible { target, visible });
    }

    fn set_page(&mut self, page: usize) {
        self.events.push(SinkEvent::Page(page));
    }
}
