//! Single-slot cancellable deadline.

use crate::time::Seconds;

/// One pending deadline at most; scheduling again replaces the old one
/// (last-write-wins), so a superseded deadline never fires.
#[derive(Debug, Default)]
pub struct SingleSlotTimer {
    deadline: Option<Seconds>,
}

impl SingleSlotTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the slot to fire `delay` from `now`, replacing any pending
    /// deadline.
    pub fn schedule(&mut self, now: Seconds, delay: Seconds) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once per schedule, when the deadline has passed.
    pub fn poll(&mut self, now: Seconds) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
