use std::time::Duration;
use clap::ValueEnum;
use crate::config::RotationConfig;
use crate::crossfade::engine::CrossfadeEngine;
use crate::error::RotationError;
use crate::pager::engine::PagerEngine;
use crate::sink::RenderSink;
use crate::state::EngineState;
use crate::symbol::Pool;

pub trait Engine {
    fn name(&self) -> &'static str;
    fn state(&self) -> EngineState;

    /// Seeds the surfaces or slots from `pool` and arms the engine's timer.
    ///
    /// Loading into a running engine tears the previous rotation down first.
    fn initialize(&mut self, pool: Pool, sink: &mut dyn RenderSink) -> Result<(), RotationError>;

    /// Feeds elapsed frame time and returns how many cycles completed.
    fn update(&mut self, dt: Duration, sink: &mut dyn RenderSink) -> Result<usize, RotationError>;

    /// Cancels the timer and drops the pool. Returns `false` if there was nothing to release.
    fn teardown(&mut self) -> bool;

    fn is_running(&self) -> bool {
        self.state() == EngineState::Running
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    /// Two stacked surfaces, the hidden one pre-loads the next symbol and fades in
    Crossfade,
    /// Six horizontal pages, the page scrolled away from gets a fresh symbol
    Pager,
}

impl EngineKind {
    pub fn build(self, config: &RotationConfig) -> Box<dyn Engine> {
        match self {
            EngineKind::Crossfade => Box::new(CrossfadeEngine::new(config)),
            EngineKind::Pager => Box::new(PagerEngine::new(config)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;

    #[test]
    fn kinds_build_matching_engines() {
        let config = RotationConfig::default();
        assert_eq!(EngineKind::Crossfade.build(&config).name(), "crossfade");
        assert_eq!(EngineKind::Pager.build(&config).name(), "pager");
    }

    #[test]
    fn engines_share_the_lifecycle() {
        let config = RotationConfig::default();
        let pool = Pool::from_strs(&["A", "B", "C", "D", "E", "F", "G"]).unwrap();

        for kind in [EngineKind::Crossfade, EngineKind::Pager] {
            let mut engine = kind.build(&config);
            let mut sink = RecordingSink::new();

            assert_eq!(engine.state(), EngineState::Idle);
            engine.initialize(pool.clone(), &mut sink).unwrap();
            assert!(engine.is_running());
            assert!(engine.teardown());
            assert!(!engine.teardown());
            assert_eq!(engine.state(), EngineState::TornDown);
        }
    }
}
