//! The host boundary: traits the embedding process implements.
//!
//! Everything the engine knows about the host arrives through these two
//! traits. `HostObject` is one object in the host's graph: identity,
//! liveness, a string-keyed member bag, and the spatial intrinsics.
//! `HostScene` is the process-wide view: singleton accessors and the two
//! population scans. Both sides of the boundary live on the host's single
//! cooperative timeline, so references are plain `Rc`.

use glam::Vec3;
use st_core::Bounds;
use std::rc::Rc;
use uuid::Uuid;

use crate::error::Result;
use crate::value::HostValue;

/// Stable identity of a host object for the lifetime of that object.
pub type InstanceId = Uuid;

pub type ObjectRef = Rc<dyn HostObject>;
pub type SceneRef = Rc<dyn HostScene>;

/// A method exposed by a host object's type, as the host reports it.
#[derive(Clone, Debug)]
pub struct MethodInfo {
    pub name: String,
    /// Whether the first parameter is an integer.
    pub takes_int: bool,
}

pub trait HostObject {
    fn id(&self) -> InstanceId;
    fn name(&self) -> String;

    /// The host's own destroyed-object marker.
    fn is_dead(&self) -> bool;

    /// Read a named member. `None` means absent member, dead object, or
    /// both; callers never distinguish.
    fn get(&self, member: &str) -> Option<HostValue>;

    /// Write a named member; `false` when the member does not exist.
    fn set(&self, member: &str, value: HostValue) -> bool;

    /// Invoke a named method.
    fn invoke(&self, method: &str, args: &[HostValue]) -> Result<HostValue>;

    /// Methods of the object's type.
    fn methods(&self) -> Vec<MethodInfo> {
        Vec::new()
    }

    fn position(&self) -> Option<Vec3> {
        None
    }

    fn parent(&self) -> Option<ObjectRef> {
        None
    }

    /// Collider volumes of this object and everything beneath it.
    fn collider_bounds(&self) -> Vec<Bounds> {
        Vec::new()
    }

    /// Objects attached to or nested under this one.
    fn attached(&self) -> Vec<ObjectRef> {
        Vec::new()
    }
}

pub trait HostScene {
    /// Scene-root singleton, freshly read; may be dead or absent.
    fn scene_root(&self) -> Option<ObjectRef>;

    /// Network-manager singleton (local-player fallback).
    fn network_manager(&self) -> Option<ObjectRef>;

    /// Notice-surface singleton.
    fn notice_surface(&self) -> Option<ObjectRef>;

    /// Live objects of the collectible shape.
    fn find_entities(&self) -> Vec<ObjectRef>;

    /// Exhaustive asset-table scan; templates included.
    fn all_entity_assets(&self) -> Vec<ObjectRef>;

    /// Whether an object belongs to an active scene (not a template).
    fn in_active_scene(&self, obj: &ObjectRef) -> bool;
}
