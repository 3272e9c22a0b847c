//! Flight time - the engine's monotonic clock
//!
//! Sequence stages and the tick loop are evaluated against a single
//! monotonic timeline measured from engine start. Tests drive the engine
//! with synthetic `FlightTime` values instead of sleeping.

use std::ops::{Add, Sub};
use std::time::{Duration, Instant};

/// Monotonic time since engine start, in milliseconds
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FlightTime(pub u64);

impl FlightTime {
    pub const ZERO: FlightTime = FlightTime(0);

    #[inline]
    pub fn from_millis(millis: u64) -> Self {
        FlightTime(millis)
    }

    #[inline]
    pub fn from_secs(secs: u64) -> Self {
        FlightTime(secs * 1000)
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    #[inline]
    pub fn saturating_add(self, duration: Duration) -> Self {
        FlightTime(self.0.saturating_add(duration.as_millis() as u64))
    }
}

impl Add<Duration> for FlightTime {
    type Output = FlightTime;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        FlightTime(self.0 + rhs.as_millis() as u64)
    }
}

impl Sub<FlightTime> for FlightTime {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: FlightTime) -> Self::Output {
        Duration::from_millis(self.0.saturating_sub(rhs.0))
    }
}

impl std::fmt::Debug for FlightTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t+{}ms", self.0)
    }
}

/// Monotonic clock backing `FlightTime` in production
/// INVARIANT: never jumps backwards, large gaps are clamped
pub struct MonotonicClock {
    /// Current flight time
    value: FlightTime,
    /// Last update instant
    last_update: Instant,
}

impl MonotonicClock {
    /// Create a new clock starting at zero
    pub fn new() -> Self {
        MonotonicClock {
            value: FlightTime::ZERO,
            last_update: Instant::now(),
        }
    }

    /// Advance the clock based on elapsed real time
    /// Returns the new flight time
    pub fn tick(&mut self) -> FlightTime {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update);

        // Clamp to prevent large jumps (e.g., after system sleep)
        let clamped = elapsed.min(Duration::from_millis(100));

        self.value = self.value.saturating_add(clamped);
        self.last_update = now;
        self.value
    }

    /// Get current flight time without advancing
    pub fn now(&self) -> FlightTime {
        self.value
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
