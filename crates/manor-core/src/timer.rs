//! Countdown timer polled once per tick.
//!
//! Every time-gated behavior in the game (reload, charge leak, spawn
//! intervals, projectile trails) is one of these, advanced by the frame
//! delta from the engine's tick loop. There are no blocking waits.

/// A countdown over a fixed duration with a latched "finished" state.
///
/// `check` returns true from the first call at which the accumulated
/// elapsed time reaches the duration, and keeps returning true until
/// `reset` or a fresh `activate`.
#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    duration_secs: f64,
    elapsed_secs: f64,
    active: bool,
    finished: bool,
}

impl Timer {
    /// Create an inactive timer. A non-positive duration is a
    /// configuration error and fails fast.
    pub fn new(duration_secs: f64) -> Self {
        assert!(
            duration_secs > 0.0,
            "timer duration must be positive, got {duration_secs}"
        );
        Self {
            duration_secs,
            elapsed_secs: 0.0,
            active: false,
            finished: false,
        }
    }

    /// Start (or restart) the countdown from zero.
    pub fn activate(&mut self) {
        self.elapsed_secs = 0.0;
        self.active = true;
        self.finished = false;
    }

    /// Advance by `dt` seconds and report whether the duration has
    /// elapsed. Inactive timers do not advance and report false.
    pub fn check(&mut self, dt: f64) -> bool {
        if self.finished {
            return true;
        }
        if !self.active {
            return false;
        }

        self.elapsed_secs += dt;
        if self.elapsed_secs >= self.duration_secs {
            self.finished = true;
        }
        self.finished
    }

    /// Completion ratio in [0, 1]. Zero before the first activation,
    /// one once finished.
    pub fn ratio(&self) -> f64 {
        if self.finished {
            return 1.0;
        }
        (self.elapsed_secs / self.duration_secs).clamp(0.0, 1.0)
    }

    /// Stop the countdown and clear elapsed time and the finished latch.
    pub fn reset(&mut self) {
        self.elapsed_secs = 0.0;
        self.active = false;
        self.finished = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }
}
