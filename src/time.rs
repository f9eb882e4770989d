//! Fixed-rate tick scheduling for hosts without a frame callback.
//!
//! The simulation core is synchronous: one [`advance`] call is one tick,
//! and whoever owns the field decides when ticks happen. Hosts embedded in
//! a rendering loop already have a frame callback and need nothing from
//! this module. Headless hosts (demos, soak tests, terminal renderers)
//! can use a [`Ticker`] as their external scheduler:
//!
//! ```ignore
//! let mut field = FieldConfig::ambient().generate();
//! let mut ticker = Ticker::new(60.0);
//!
//! loop {
//!     for _ in 0..ticker.poll() {
//!         field.advance();
//!     }
//!     // ...draw, sleep, handle input...
//! }
//! ```
//!
//! Uses `std::time` for timing with no external dependencies.
//!
//! [`advance`]: crate::ParticleField::advance

use std::time::{Duration, Instant};

/// Upper bound on ticks reported by a single [`Ticker::poll`]. After a
/// long stall (debugger, laptop sleep) the backlog is dropped instead of
/// replayed, so the field jumps at most this many ticks at once.
const MAX_CATCH_UP: u32 = 8;

/// A fixed-rate accumulator clock.
///
/// Call [`poll`](Ticker::poll) once per loop iteration; it reports how
/// many whole ticks have become due since the last call. Wall-clock
/// remainders carry over, so the long-run tick rate matches the requested
/// rate regardless of how often `poll` runs.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    carry: Duration,
    last: Instant,
    ticks: u64,
    paused: bool,
}

impl Ticker {
    /// Create a ticker at the given rate. A non-positive rate falls back
    /// to 60 ticks per second.
    pub fn new(ticks_per_second: f32) -> Self {
        let rate = if ticks_per_second > 0.0 {
            ticks_per_second
        } else {
            60.0
        };
        Self::from_interval(Duration::from_secs_f32(1.0 / rate))
    }

    /// Create a ticker with an explicit tick interval.
    pub fn from_interval(interval: Duration) -> Self {
        Self {
            interval,
            carry: Duration::ZERO,
            last: Instant::now(),
            ticks: 0,
            paused: false,
        }
    }

    /// Number of whole ticks due since the last poll, at most
    /// `MAX_CATCH_UP`. Returns 0 while paused.
    pub fn poll(&mut self) -> u32 {
        let now = Instant::now();

        if self.paused {
            self.last = now;
            return 0;
        }

        self.carry += now.duration_since(self.last);
        self.last = now;

        let mut due = 0;
        while self.carry >= self.interval && due < MAX_CATCH_UP {
            self.carry -= self.interval;
            due += 1;
        }

        // Hit the clamp: drop the rest of the backlog.
        if due == MAX_CATCH_UP {
            self.carry = Duration::ZERO;
        }

        self.ticks += u64::from(due);
        due
    }

    /// Total ticks reported so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The tick interval.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the ticker is paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop accruing ticks. Time passing while paused is discarded.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume accruing ticks from now.
    pub fn resume(&mut self) {
        if self.paused {
            self.last = Instant::now();
            self.carry = Duration::ZERO;
            self.paused = false;
        }
    }

    /// Toggle pause state.
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_ticker_new() {
        let ticker = Ticker::new(60.0);
        assert_eq!(ticker.ticks(), 0);
        assert!(!ticker.is_paused());
    }

    #[test]
    fn test_non_positive_rate_falls_back() {
        let ticker = Ticker::new(0.0);
        assert_eq!(ticker.interval(), Duration::from_secs_f32(1.0 / 60.0));
    }

    #[test]
    fn test_poll_reports_elapsed_ticks() {
        let mut ticker = Ticker::from_interval(Duration::from_millis(5));
        thread::sleep(Duration::from_millis(12));
        let due = ticker.poll();
        assert!(due >= 2);
        assert_eq!(ticker.ticks(), u64::from(due));
    }

    #[test]
    fn test_poll_clamps_backlog() {
        let mut ticker = Ticker::from_interval(Duration::from_millis(20));
        thread::sleep(Duration::from_millis(250));
        assert_eq!(ticker.poll(), MAX_CATCH_UP);
        // Backlog was dropped, not carried over.
        assert_eq!(ticker.poll(), 0);
    }

    #[test]
    fn test_paused_ticker_reports_zero() {
        let mut ticker = Ticker::from_interval(Duration::from_millis(10));
        ticker.pause();
        thread::sleep(Duration::from_millis(30));
        assert_eq!(ticker.poll(), 0);

        ticker.resume();
        thread::sleep(Duration::from_millis(30));
        assert!(ticker.poll() >= 1);
    }
}
