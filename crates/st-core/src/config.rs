//! Tuning configuration.
//!
//! Every constant the classifier treats as a heuristic rather than a law is
//! settable here; `constants` holds the defaults. Deserializes from the
//! host bridge's settings file, with every field optional.

use serde::Deserialize;

use crate::constants::{
    ANCESTOR_DEPTH, ANCESTOR_NEEDLES, BOUNDS_PADDING, DEBOUNCE_WINDOW, DIRECTORY_WINDOW,
    FRAME_RETRY_DELAY, FRAME_WINDOW, NEAR_RADIUS, POPUP_DURATION,
};

/// Location-classification tuning.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Ancestor-name needles, matched case-insensitively against the
    /// parent chain.
    pub ancestor_needles: Vec<String>,
    /// Parent-chain walk depth bound.
    pub ancestor_depth: usize,
    /// Horizontal-plane proximity radius (world units).
    pub near_radius: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            ancestor_needles: ANCESTOR_NEEDLES.iter().map(|s| s.to_string()).collect(),
            ancestor_depth: ANCESTOR_DEPTH,
            near_radius: NEAR_RADIUS,
        }
    }
}

/// Full engine configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TallyConfig {
    /// How long (in seconds) the popup stays visible after a scan.
    pub popup_duration: f64,
    /// Directory snapshot freshness window (seconds).
    pub directory_window: f64,
    /// Spatial frame rebuild window (seconds).
    pub frame_window: f64,
    /// Delay before retrying a frame that had no collider volumes.
    pub frame_retry_delay: f64,
    /// Margin added to each face of the frame volume.
    pub bounds_padding: f32,
    /// Trigger debounce interval (seconds).
    pub debounce_window: f64,
    pub classifier: ClassifierConfig,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            popup_duration: POPUP_DURATION,
            directory_window: DIRECTORY_WINDOW,
            frame_window: FRAME_WINDOW,
            frame_retry_delay: FRAME_RETRY_DELAY,
            bounds_padding: BOUNDS_PADDING,
            debounce_window: DEBOUNCE_WINDOW,
            classifier: ClassifierConfig::default(),
        }
    }
}
