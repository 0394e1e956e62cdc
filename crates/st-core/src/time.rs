//! Host-timeline time units.
//!
//! The host process owns the clock. Nothing in this crate reads a system
//! clock; every time-dependent operation takes a `Seconds` timestamp from
//! the caller, so tests can drive the timeline explicitly.

/// Seconds since the host process started, as the host reports them.
pub type Seconds = f64;

/// Sentinel that compares older than any timestamp the host will produce.
/// A cache stamped with `NEVER` is always stale.
pub const NEVER: Seconds = f64::NEG_INFINITY;

/// Has more than `window` elapsed since `then`? `then = NEVER` always has.
pub fn elapsed(now: Seconds, then: Seconds, window: Seconds) -> bool {
    now - then > window
}
