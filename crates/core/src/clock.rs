//! Board clock - the mission countdown.
//!
//! The original timer fired a completion callback; here expiry surfaces as
//! an explicit [`ClockTick`] result that the controller's tick loop
//! consumes, since the core has no asynchronous execution model.
//! `JustExpired` is reported exactly once per reset.

/// Result of advancing the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTick {
    /// Time remains.
    Running,
    /// This tick drove the clock to zero. Reported once.
    JustExpired,
    /// The clock was already at zero; the tick was a no-op.
    Expired,
}

/// Countdown clock for the active mission.
#[derive(Debug, Clone, Copy)]
pub struct BoardClock {
    time_left: f32,
    expired: bool,
}

impl BoardClock {
    pub fn new(duration_secs: f32) -> Self {
        let mut clock = Self {
            time_left: 0.0,
            expired: false,
        };
        clock.reset(duration_secs);
        clock
    }

    /// Restart the countdown from a full duration (mission regeneration).
    pub fn reset(&mut self, duration_secs: f32) {
        self.time_left = sanitize(duration_secs);
        self.expired = false;
    }

    /// Advance by `dt` seconds.
    ///
    /// Negative or non-finite `dt` counts as zero elapsed time rather than
    /// corrupting the countdown. Once expired, ticking is a no-op.
    pub fn tick(&mut self, dt: f32) -> ClockTick {
        if self.expired {
            return ClockTick::Expired;
        }
        self.time_left = (self.time_left - sanitize(dt)).max(0.0);
        if self.time_left == 0.0 {
            self.expired = true;
            ClockTick::JustExpired
        } else {
            ClockTick::Running
        }
    }

    /// Seconds remaining. Never negative.
    pub fn time_left(&self) -> f32 {
        self.time_left
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }
}

fn sanitize(seconds: f32) -> f32 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}
