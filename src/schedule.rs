use std::time::Duration;

/// Shortest delay a timer will accept, so a repeating timer always makes progress.
const MIN_DELAY: Duration = Duration::from_millis(1);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TimerState {
    Armed,     // Counting towards the next fire
    Idle,      // One-shot timer that already fired
    Cancelled, // Released by its owner, never fires again
}

/// Frame-driven timer owned by a rotation engine.
///
/// The owner feeds elapsed frame time into [`Timer::advance`]; a fire reports how much of that
/// time was left over so a caller can keep feeding it into the next phase.
#[derive(Debug, Clone)]
pub struct Timer {
    delay: Duration,
    elapsed: Duration,
    repeating: bool,
    state: TimerState,
}

impl Timer {
    pub fn once(delay: Duration) -> Self {
        Self {
            delay: delay.max(MIN_DELAY),
            elapsed: Duration::ZERO,
            repeating: false,
            state: TimerState::Armed,
        }
    }

    pub fn repeating(period: Duration) -> Self {
        Self { repeating: true, ..Self::once(period) }
    }

    /// Restarts the countdown with a new delay. A cancelled timer stays cancelled.
    pub fn rearm(&mut self, delay: Duration) -> bool {
        if self.state == TimerState::Cancelled {
            return false;
        }
        self.delay = delay.max(MIN_DELAY);
        self.elapsed = Duration::ZERO;
        self.state = TimerState::Armed;
        true
    }

    /// Adds `dt` and returns `Some(overshoot)` if the timer fired.
    ///
    /// At most one fire is reported per call; feed the overshoot back in to catch up.
    pub fn advance(&mut self, dt: Duration) -> Option<Duration> {
        if self.state != TimerState::Armed {
            return None;
        }
        self.elapsed += dt;
        if self.elapsed < self.delay {
            return None;
        }
        let overshoot = self.elapsed - self.delay;
        self.elapsed = Duration::ZERO;
        if !self.repeating {
            self.state = TimerState::Idle;
        }
        Some(overshoot)
    }

    /// Returns `true` only for the call that actually released the timer.
    pub fn cancel(&mut self) -> bool {
        if self.state == TimerState::Cancelled {
            return false;
        }
        self.state = TimerState::Cancelled;
        self.elapsed = Duration::ZERO;
        true
    }

    /// Time until the next fire, if armed.
    pub fn remaining(&self) -> Option<Duration> {
        match self.state {
            TimerState::Armed => Some(self.delay - self.elapsed),
            _ => None,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn one_shot_fires_once_with_overshoot() {
        let mut timer = Timer::once(3 * SECOND);

        assert_eq!(timer.advance(2 * SECOND), None);
        assert_eq!(timer.remaining(), Some(SECOND));
        assert_eq!(timer.advance(2 * SECOND), Some(SECOND));
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.advance(10 * SECOND), None);
    }

    #[test]
    fn fires_exactly_on_deadline() {
        let mut timer = Timer::once(SECOND);
        assert_eq!(timer.advance(SECOND), Some(Duration::ZERO));
    }

    #[test]
    fn repeating_timer_stays_armed() {
        let mut timer = Timer::repeating(2 * SECOND);

        assert_eq!(timer.advance(5 * SECOND), Some(3 * SECOND));
        assert_eq!(timer.advance(3 * SECOND), Some(SECOND));
        assert_eq!(timer.advance(SECOND), None);
        assert_eq!(timer.state(), TimerState::Armed);
    }

    #[test]
    fn cancel_releases_once() {
        let mut timer = Timer::repeating(SECOND);

        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert_eq!(timer.advance(5 * SECOND), None);
        assert!(!timer.rearm(SECOND));
        assert_eq!(timer.remaining(), None);
    }

    #[test]
    fn rearm_resets_elapsed_time() {
        let mut timer = Timer::once(4 * SECOND);
        timer.advance(3 * SECOND);

        assert!(timer.rearm(2 * SECOND));
        assert_eq!(timer.advance(SECOND), None);
        assert_eq!(timer.advance(SECOND), Some(Duration::ZERO));
    }

    #[test]
    fn zero_delay_is_clamped() {
        let mut timer = Timer::repeating(Duration::ZERO);
        assert_eq!(timer.remaining(), Some(MIN_DELAY));
        assert_eq!(timer.advance(Duration::ZERO), None);
    }
}
