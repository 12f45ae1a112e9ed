//! One-shot deferred trigger
//!
//! Deadline-based and polled from the host's event loop, so the deferred
//! callback always runs on the same logical stream as every other mutation.
//! Contract: fires at most once per arm, against whatever state is current
//! at fire time; a late fire against moved-on state must be absorbed by the
//! callee (the session's empty-query no-op rule).

use std::time::{Duration, Instant};

/// A cancellable one-shot timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trigger {
    deadline: Option<Instant>,
}

impl Trigger {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm (or re-arm) the trigger to fire `delay` after `now`.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True exactly once per arm, as soon as `now` reaches the deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the deadline; `None` when disarmed. Lets the host
    /// pick an event-poll timeout instead of spinning.
    pub fn time_left(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod trigger_tests;
