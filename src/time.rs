//! Fixed-timestep clock using an accumulator pattern.
//!
//! The presentation shell calls in at whatever frame rate it runs (a browser
//! animation frame, typically ~60fps) with a monotonic timestamp. `TickClock`
//! converts that into whole 100ms ticks, so production accrual is
//! per-real-second no matter how the host slices its frames, and tests can
//! drive the simulation with synthetic timestamps instead of wall-clock
//! waits.

/// Game ticks per real-time second (100ms cadence).
pub const TICKS_PER_SEC: u32 = 10;

/// Simulated seconds covered by `ticks` ticks.
pub fn ticks_to_secs(ticks: u32) -> f64 {
    ticks as f64 / TICKS_PER_SEC as f64
}

/// Converts variable-rate monotonic timestamps into discrete ticks.
#[derive(Debug)]
pub struct TickClock {
    /// Milliseconds per tick (100ms at 10 ticks/sec).
    ms_per_tick: f64,
    /// Milliseconds received but not yet consumed as whole ticks.
    accumulator: f64,
    /// Timestamp of the last update, None before the first frame.
    last_ms: Option<f64>,
    /// Total ticks handed out since creation.
    pub total_ticks: u64,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            ms_per_tick: 1_000.0 / TICKS_PER_SEC as f64,
            accumulator: 0.0,
            last_ms: None,
            total_ticks: 0,
        }
    }

    /// Feed the current monotonic timestamp; returns how many whole ticks
    /// elapsed since the previous call. The first call establishes the
    /// baseline and returns 0. Deltas are clamped to 500ms so a backgrounded
    /// tab doesn't replay into a burst of thousands of ticks.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_ms {
            Some(prev) => (now_ms - prev).clamp(0.0, 500.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }

    /// Last timestamp fed in; 0 before the first `advance`.
    pub fn last_ms(&self) -> f64 {
        self.last_ms.unwrap_or(0.0)
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts ticks toward a fixed period; used for the autosave cadence.
#[derive(Debug)]
pub struct IntervalTimer {
    period_ticks: u32,
    elapsed: u32,
}

impl IntervalTimer {
    pub fn new(period_ticks: u32) -> Self {
        Self {
            period_ticks,
            elapsed: 0,
        }
    }

    /// Add elapsed ticks; returns true when the period completed. The
    /// remainder carries over so the cadence stays honest across uneven
    /// frames.
    pub fn advance(&mut self, ticks: u32) -> bool {
        self.elapsed += ticks;
        if self.elapsed >= self.period_ticks {
            self.elapsed %= self.period_ticks;
            true
        } else {
            false
        }
    }

    /// Restart the countdown (e.g. after an out-of-band save).
    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}

/// Wall-clock epoch milliseconds, for the informational save timestamp.
#[cfg(target_arch = "wasm32")]
pub fn epoch_now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn epoch_now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}
