//! One-shot notice-cue suppression gate.
//!
//! `Idle → Armed → ActiveCall → Idle`. Arming is consumed by exactly one
//! display call: the interception prefix copies `arm_next` into
//! `active_this_call` and clears it, so a second call in the same window
//! arrives un-armed. The postfix drops the active flag unconditionally;
//! the host must route every exit path of the display call through it,
//! errors included.

#[derive(Debug, Default)]
pub struct NotificationGate {
    arm_next: bool,
    active_this_call: bool,
}

impl NotificationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Silence the next display call's cue.
    pub fn arm(&mut self) {
        self.arm_next = true;
    }

    /// Take back an arm that never reached a display call (the call failed
    /// before the host's prefix ran), so it cannot leak into an unrelated
    /// one.
    pub fn disarm(&mut self) {
        self.arm_next = false;
    }

    /// Interception prefix: consume the armed flag into the active flag.
    pub fn begin_call(&mut self) {
        self.active_this_call = self.arm_next;
        self.arm_next = false;
    }

    /// Interception postfix: unconditionally drop the active flag.
    pub fn end_call(&mut self) {
        self.active_this_call = false;
    }

    pub fn is_armed(&self) -> bool {
        self.arm_next
    }

    /// True only between the prefix and postfix of an armed display call.
    pub fn suppression_active(&self) -> bool {
        self.active_this_call
    }
}
