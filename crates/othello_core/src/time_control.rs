//! Per-move deadline for searches.
//!
//! Searches poll the clock at node-expansion boundaries, every
//! `check_interval` expanded nodes. The stop flag is shared between clones so
//! a driver holding a clone can abort a search from another thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default number of expanded nodes between clock reads.
pub const DEFAULT_CHECK_INTERVAL: u64 = 256;

#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Option<Instant>,
    /// None = no deadline
    time_limit: Option<Duration>,
    check_interval: u64,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: None,
            time_limit,
            check_interval: DEFAULT_CHECK_INTERVAL,
        }
    }

    /// Deadline of `millis` milliseconds, or none.
    pub fn from_millis(millis: Option<u64>) -> Self {
        Self::new(millis.map(Duration::from_millis))
    }

    pub fn with_check_interval(mut self, nodes: u64) -> Self {
        self.check_interval = nodes.max(1);
        self
    }

    /// Starts the clock and clears any previous stop.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Forces the search to stop at its next check.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Reads the clock and raises the stop flag once the deadline has passed.
    /// Returns whether the search must stop.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }
        match (self.time_limit, self.start_time) {
            (Some(limit), Some(start)) if start.elapsed() >= limit => {
                self.stop();
                true
            }
            _ => false,
        }
    }

    /// True every `check_interval` nodes.
    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes % self.check_interval == 0
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
