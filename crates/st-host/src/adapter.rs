//! Views bridging host objects to the engine's capability traits.
//!
//! A `DynEntity` is one snapshot entry: the host object plus the resolved
//! member set it reads through. Reads happen live at classification time
//! (only the member *names* are frozen), so external mutation between
//! snapshot and sum is observed, and a dead object reads as all-`None`,
//! which the classifier excludes conservatively.

use std::rc::Rc;

use glam::Vec3;
use st_core::{
    EntityScan, EntityView, FrameSource, ItemPropertiesView, PlayerView, RootVolumes,
};

use crate::members::{EntityMembers, MemberTable};
use crate::object::{HostObject, HostScene, ObjectRef};
use crate::value::HostValue;

/// Ship-root candidates on the scene root, tried in order.
pub const SHIP_ROOT_FIELDS: &[&str] = &["shipRoom", "hangarShip", "shipFloor"];

/// Local-player member on the scene root and the network manager.
pub const LOCAL_PLAYER: &str = "localPlayerController";

const PLAYER_IS_LOCAL: &str = "isLocalPlayer";
const PLAYER_IS_OWNER: &str = "IsOwner";
const PLAYER_IN_HANGAR: &str = "isInHangarShipRoom";
const PLAYER_IN_SHIP: &str = "isInShipRoom";

fn read_bool(obj: &ObjectRef, member: Option<&str>) -> Option<bool> {
    obj.get(member?).and_then(|v| v.as_bool())
}

fn read_int(obj: &ObjectRef, member: Option<&str>) -> Option<i64> {
    obj.get(member?).and_then(|v| v.as_int())
}

pub struct DynItemProps {
    obj: ObjectRef,
    members: Rc<EntityMembers>,
}

impl ItemPropertiesView for DynItemProps {
    fn is_scrap(&self) -> Option<bool> {
        read_bool(&self.obj, self.members.props_is_scrap.as_deref())
    }

    fn value(&self) -> Option<i64> {
        read_int(&self.obj, self.members.props_value.as_deref())
    }
}

pub struct DynEntity {
    obj: ObjectRef,
    members: Rc<EntityMembers>,
    props: Option<DynItemProps>,
}

impl DynEntity {
    pub fn new(obj: ObjectRef, members: Rc<EntityMembers>) -> Self {
        let props = members
            .item_properties
            .as_deref()
            .and_then(|member| obj.get(member))
            .and_then(|v| v.as_obj())
            .map(|props_obj| DynItemProps {
                obj: props_obj,
                members: members.clone(),
            });
        Self { obj, members, props }
    }

    pub fn object(&self) -> &ObjectRef {
        &self.obj
    }
}

impl EntityView for DynEntity {
    fn item_properties(&self) -> Option<&dyn ItemPropertiesView> {
        self.props.as_ref().map(|p| p as &dyn ItemPropertiesView)
    }

    fn direct_value(&self) -> Option<i64> {
        read_int(&self.obj, self.members.value.as_deref())
    }

    fn is_held(&self) -> Option<bool> {
        read_bool(&self.obj, self.members.is_held.as_deref())
    }

    fn is_pocketed(&self) -> Option<bool> {
        read_bool(&self.obj, self.members.is_pocketed.as_deref())
    }

    fn has_holder(&self) -> bool {
        self.members
            .held_by
            .as_deref()
            .and_then(|member| self.obj.get(member))
            .is_some_and(|v| !v.is_nil())
    }

    fn in_ship_room(&self) -> Option<bool> {
        read_bool(&self.obj, self.members.in_ship_room.as_deref())
    }

    fn in_elevator(&self) -> Option<bool> {
        read_bool(&self.obj, self.members.in_elevator.as_deref())
    }

    fn position(&self) -> Option<Vec3> {
        self.obj.position()
    }

    fn ancestor_names(&self, max_depth: usize) -> Vec<String> {
        let mut names = Vec::new();
        let mut current = self.obj.parent();
        while let Some(ancestor) = current
            && names.len() < max_depth
        {
            names.push(ancestor.name());
            current = ancestor.parent();
        }
        names
    }
}

pub struct DynPlayer {
    obj: ObjectRef,
}

impl DynPlayer {
    pub fn new(obj: ObjectRef) -> Self {
        Self { obj }
    }
}

impl PlayerView for DynPlayer {
    fn is_local(&self) -> Option<bool> {
        read_bool(&self.obj, Some(PLAYER_IS_LOCAL))
    }

    fn is_owner(&self) -> Option<bool> {
        read_bool(&self.obj, Some(PLAYER_IS_OWNER))
    }

    fn in_hangar_room(&self) -> Option<bool> {
        read_bool(&self.obj, Some(PLAYER_IN_HANGAR))
    }

    fn in_ship_room(&self) -> Option<bool> {
        read_bool(&self.obj, Some(PLAYER_IN_SHIP))
    }

    fn position(&self) -> Option<Vec3> {
        self.obj.position()
    }
}

/// Population scan over the live scene, wrapping hits as `DynEntity`.
pub struct SceneScan<'a> {
    pub scene: &'a dyn HostScene,
    pub members: &'a mut MemberTable,
}

impl SceneScan<'_> {
    fn wrap(&mut self, objects: Vec<ObjectRef>) -> Vec<DynEntity> {
        let Some(members) = self.members.entity_members(&objects) else {
            return Vec::new();
        };
        objects
            .into_iter()
            .filter(|o| !o.is_dead())
            .map(|o| DynEntity::new(o, members.clone()))
            .collect()
    }
}

impl EntityScan for SceneScan<'_> {
    type Entity = DynEntity;

    fn scan_live(&mut self) -> Vec<DynEntity> {
        let objects = self.scene.find_entities();
        self.wrap(objects)
    }

    fn scan_assets(&mut self) -> Vec<DynEntity> {
        let objects = self.scene.all_entity_assets();
        self.wrap(objects)
    }

    fn in_active_scene(&self, entity: &DynEntity) -> bool {
        self.scene.in_active_scene(entity.object())
    }
}

/// Ship-root resolver backing the spatial frame cache.
pub struct SceneFrames<'a> {
    pub scene: &'a dyn HostScene,
}

impl FrameSource for SceneFrames<'_> {
    fn resolve_root(&mut self) -> Option<RootVolumes> {
        let root = ship_root(self.scene)?;
        let origin = root.position()?;
        Some(RootVolumes {
            origin,
            colliders: root.collider_bounds(),
        })
    }
}

/// First live ship-root candidate on the scene root.
pub fn ship_root(scene: &dyn HostScene) -> Option<ObjectRef> {
    let root = scene.scene_root().filter(|o| !o.is_dead())?;
    SHIP_ROOT_FIELDS.iter().find_map(|field| {
        root.get(field)
            .and_then(|v| v.as_obj())
            .filter(|o| !o.is_dead())
    })
}

/// The local player: scene root first, network manager as fallback.
pub fn local_player(scene: &dyn HostScene) -> Option<ObjectRef> {
    for owner in [scene.scene_root(), scene.network_manager()] {
        if let Some(player) = owner
            .filter(|o| !o.is_dead())
            .and_then(|o| o.get(LOCAL_PLAYER))
            .and_then(|v| v.as_obj())
            .filter(|o| !o.is_dead())
        {
            return Some(player);
        }
    }
    None
}
