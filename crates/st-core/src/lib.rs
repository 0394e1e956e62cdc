//! Ship scrap tally engine.
//!
//! Computes an aggregate scrap value over a volatile, host-owned entity
//! population inside the ship's reference volume, and drives the
//! silent-popup state machine around the result: time-boxed discovery
//! caches, a staged eligibility classifier, a consume-once notification
//! gate, and single-slot cancellable timers.
//!
//! Zero host I/O: discovery, display, and logging belong to the host
//! bridge. Everything here is plain state driven by caller-supplied
//! timestamps, so the host keeps ownership of the timeline.

pub mod config;
pub mod constants;
pub mod debounce;
pub mod directory;
pub mod entity;
pub mod frame;
pub mod gate;
pub mod spatial;
pub mod time;
pub mod timer;
pub mod valuation;

pub use config::{ClassifierConfig, TallyConfig};
pub use debounce::Debounce;
pub use directory::{DirectoryCache, EntityScan};
pub use entity::{EntityView, ItemPropertiesView, PlayerView};
pub use frame::{FrameCache, FrameSource, RootVolumes};
pub use gate::NotificationGate;
pub use spatial::{Bounds, SpatialFrame};
pub use time::{NEVER, Seconds};
pub use timer::SingleSlotTimer;
pub use valuation::{
    Exclusion, Placement, Verdict, classify, classify_location, extract_value, player_in_ship,
    sum_eligible,
};
