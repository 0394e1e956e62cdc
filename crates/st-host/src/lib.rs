//! Host bridge for the ship scrap tally engine.
//!
//! Wires `st-core` into a live, externally-owned simulation through a
//! narrow dynamic boundary: the embedding process implements `HostObject`
//! and `HostScene`, hands a `ScrapTally` its scene, and routes its two
//! interception sites (pre-display, pre-emission) plus lifecycle events
//! through the `HookRegistry`. Every host fault is caught at this layer
//! and degrades to a log line plus a safe default; nothing propagates up
//! into the host.

pub mod adapter;
pub mod channel;
pub mod controller;
pub mod error;
pub mod hooks;
pub mod members;
pub mod object;
pub mod settings;
pub mod singleton;
pub mod surface;
pub mod value;

#[cfg(test)]
pub(crate) mod testutil;

pub use adapter::{DynEntity, DynPlayer, SceneFrames, SceneScan, local_player, ship_root};
pub use channel::ChannelLocator;
pub use controller::ScrapTally;
pub use error::{HostError, Result};
pub use hooks::HookRegistry;
pub use members::{EntityMembers, MemberTable};
pub use object::{HostObject, HostScene, InstanceId, MethodInfo, ObjectRef, SceneRef};
pub use settings::{load_settings, parse_settings};
pub use singleton::{Refresh, SingletonCache};
pub use value::HostValue;
