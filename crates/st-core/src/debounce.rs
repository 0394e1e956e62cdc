//! Rapid-trigger debounce.

use crate::time::{NEVER, Seconds};

/// Drops triggers arriving within `window` of the last accepted one.
/// A plain timestamp comparison: rejected triggers are forgotten, never
/// queued, and do not push the window forward.
#[derive(Debug)]
pub struct Debounce {
    last_accepted: Seconds,
    window: Seconds,
}

impl Debounce {
    pub fn new(window: Seconds) -> Self {
        Self {
            last_accepted: NEVER,
            window,
        }
    }

    /// Accept or drop a trigger at `now`.
    pub fn accept(&mut self, now: Seconds) -> bool {
        if now - self.last_accepted < self.window {
            return false;
        }
        self.last_accepted = now;
        true
    }
}
