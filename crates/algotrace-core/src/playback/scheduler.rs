//! Single-slot continuation scheduling and the clock it runs against

use std::time::Instant;

/// Source of time for driving playback
pub trait Clock {
    fn now(&self) -> Instant;

    /// Block until `deadline` has passed
    fn sleep_until(&self, deadline: Instant);
}

/// Wall clock backed by `std::thread::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep_until(&self, deadline: Instant) {
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
    }
}

/// Holds at most one pending continuation.
///
/// Scheduling while a continuation is pending replaces it; two deadlines
/// never coexist.
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Option<Instant>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: Instant) {
        self.pending = Some(at);
    }

    /// Drop the pending continuation. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending
    }

    /// Consume the pending continuation if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(at) if at <= now => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
