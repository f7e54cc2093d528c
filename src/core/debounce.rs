// src/core/debounce.rs
//! Deferred delivery of the latest value in a burst.
//!
//! The debouncer never sleeps or spawns timers. Callers poll it with the
//! current time; each `schedule` replaces the pending value and restarts
//! the delay, so only the final value of a burst is released.

use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    /// Value waiting for the delay to elapse, with the instant it was scheduled
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pending: None,
        }
    }

    /// Schedules `value`, cancelling whatever was pending.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_ready(&self, now: Instant) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|(_, scheduled)| now.saturating_duration_since(*scheduled) >= self.delay)
    }

    /// Releases the pending value once the delay has elapsed since it was scheduled.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if !self.is_ready(now) {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }

    /// Releases the pending value immediately, ignoring the delay.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Time left before the pending value becomes ready, if any is pending.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref().map(|(_, scheduled)| {
            self.delay
                .saturating_sub(now.saturating_duration_since(*scheduled))
        })
    }

    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}
