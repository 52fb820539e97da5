use std::time::{Duration, Instant};

/// An owned one-shot deadline. Scheduling replaces whatever was pending,
/// so at most one reset is ever outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetTimer {
    deadline: Option<Instant>,
}

impl ResetTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Returns true if a pending deadline was dropped.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Consume the deadline if it has been reached.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
