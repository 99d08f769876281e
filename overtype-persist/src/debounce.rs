//! Debounced write policy.
//!
//! Saves are coalesced over a logical clock: every layer-affecting
//! mutation restarts a fixed 2-tick window and only the last pending
//! write inside the window is flushed. The clock is supplied by the
//! host, which keeps the policy deterministic and testable.

/// Delay between the last mutation and the flush, in host clock ticks.
pub const DEBOUNCE_TICKS: u64 = 2;

/// Logical-clock debounce window for autosave writes.
#[derive(Debug, Default)]
pub struct Debounce {
    deadline: Option<u64>,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart the window: the pending flush (if any) is superseded.
    pub fn schedule(&mut self, now: u64) {
        self.deadline = Some(now + DEBOUNCE_TICKS);
    }

    /// Report whether the window has elapsed, clearing it if so.
    /// Returns `true` at most once per scheduled write.
    pub fn fire(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending flush (used when switching images).
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
