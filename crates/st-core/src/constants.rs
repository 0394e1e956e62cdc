/// Directory freshness window (seconds): at most one full population scan
/// per window.
pub const DIRECTORY_WINDOW: f64 = 2.0;

/// Spatial frame rebuild window (seconds).
pub const FRAME_WINDOW: f64 = 3.0;

/// Delay before re-checking a frame that resolved with zero collider
/// volumes (the host may still be spawning geometry).
pub const FRAME_RETRY_DELAY: f64 = 1.0;

/// Margin added to each face of the unioned collider volume, to tolerate
/// entities resting exactly on the boundary.
pub const BOUNDS_PADDING: f32 = 0.5;

/// Horizontal-plane fallback radius around the frame origin (world units).
pub const NEAR_RADIUS: f32 = 30.0;

/// Maximum parent-chain depth walked by the ancestor-name heuristic.
pub const ANCESTOR_DEPTH: usize = 24;

/// Default ancestor-name needles, matched case-insensitively.
pub const ANCESTOR_NEEDLES: [&str; 2] = ["ship", "hangar"];

/// Trigger debounce interval (seconds): repeated scan events inside this
/// window are dropped, not queued.
pub const DEBOUNCE_WINDOW: f64 = 0.25;

/// Default popup visible time (seconds).
pub const POPUP_DURATION: f64 = 3.0;
