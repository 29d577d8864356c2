/// Fixed timestep accumulator.
/// Keeps simulation logic at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per step.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Playback state of the discrete sample cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Running,
}

/// Rate limiter decoupling table playback speed from the host refresh rate.
///
/// While `Running`, host ticks carrying elapsed wall-clock time produce one
/// cursor step per fixed interval. While `Stopped`, elapsed time is ignored
/// entirely. There are no error states.
pub struct AnimationClock {
    state: PlaybackState,
    interval_ms: f64,
    since_step_ms: f64,
}

impl AnimationClock {
    pub const DEFAULT_INTERVAL_MS: f64 = 25.0;

    pub fn new(interval_ms: f64) -> Self {
        Self {
            state: PlaybackState::Stopped,
            interval_ms,
            since_step_ms: 0.0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    /// Flip between Stopped and Running. Starting playback resets the
    /// interval accumulator so a long pause cannot cause an immediate step.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            PlaybackState::Stopped => {
                self.since_step_ms = 0.0;
                PlaybackState::Running
            }
            PlaybackState::Running => PlaybackState::Stopped,
        };
    }

    /// Feed elapsed wall-clock milliseconds. Returns true when the cursor
    /// should advance by one step.
    pub fn tick(&mut self, elapsed_ms: f64) -> bool {
        if self.state == PlaybackState::Stopped {
            return false;
        }
        self.since_step_ms += elapsed_ms;
        if self.since_step_ms >= self.interval_ms {
            self.since_step_ms -= self.interval_ms;
            // One step per host tick at most; a stall must not burst.
            self.since_step_ms = self.since_step_ms.min(self.interval_ms);
            true
        } else {
            false
        }
    }

    /// Advance a wrapping cursor by one step over `count` samples.
    pub fn step(index: usize, count: usize) -> usize {
        if count == 0 || index + 1 >= count {
            0
        } else {
            index + 1
        }
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0 / 60.0), 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0), 10);
    }

    #[test]
    fn stopped_clock_never_advances() {
        let mut clock = AnimationClock::default();
        assert!(!clock.tick(10_000.0));
        assert!(!clock.tick(10_000.0));
    }

    #[test]
    fn running_clock_advances_once_per_interval() {
        let mut clock = AnimationClock::new(25.0);
        clock.toggle();
        assert!(clock.is_running());
        assert!(!clock.tick(10.0));
        assert!(!clock.tick(10.0));
        assert!(clock.tick(10.0)); // 30 ms accumulated
        assert!(!clock.tick(10.0));
    }

    #[test]
    fn toggle_back_to_stopped_halts_advance() {
        let mut clock = AnimationClock::new(25.0);
        clock.toggle();
        clock.toggle();
        assert!(!clock.tick(1_000.0));
    }

    #[test]
    fn starting_playback_resets_the_accumulator() {
        let mut clock = AnimationClock::new(25.0);
        clock.toggle();
        clock.tick(24.0);
        clock.toggle(); // stop with 24 ms accumulated
        clock.toggle(); // restart
        assert!(!clock.tick(1.0));
    }

    #[test]
    fn cursor_wraps_at_the_end() {
        assert_eq!(AnimationClock::step(0, 100), 1);
        assert_eq!(AnimationClock::step(98, 100), 99);
        assert_eq!(AnimationClock::step(99, 100), 0);
        assert_eq!(AnimationClock::step(0, 0), 0);
    }
}
