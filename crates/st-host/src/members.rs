//! Probe-once member resolution.
//!
//! Which members the entity shape actually carries is a property of the
//! host build, not of this crate, so it is discovered from a live probe
//! object and remembered for the process lifetime. A member that fails to
//! resolve stays `None` and permanently disables only the checks that
//! depend on it; nothing fails.

use std::rc::Rc;

use regex::Regex;
use tracing::{debug, warn};

use crate::object::{HostObject, ObjectRef};

pub const ITEM_PROPERTIES: &str = "itemProperties";
pub const PROPS_IS_SCRAP: &str = "isScrap";
pub const PROPS_SCRAP_VALUE: &str = "scrapValue";
pub const SCRAP_VALUE: &str = "scrapValue";
pub const IS_HELD: &str = "isHeld";
pub const IS_POCKETED: &str = "isPocketed";
pub const PLAYER_HELD_BY: &str = "playerHeldBy";
pub const IS_IN_SHIP_ROOM: &str = "isInShipRoom";
pub const IS_IN_ELEVATOR: &str = "isInElevator";

/// Method-name pattern for the external value-sync call: anything around
/// "scrap" whose first parameter is an integer.
const SYNC_METHOD_PATTERN: &str = r"(?i)scrap";

/// Member names of the entity shape, as resolved against a live probe.
#[derive(Clone, Debug, Default)]
pub struct EntityMembers {
    pub item_properties: Option<String>,
    pub props_is_scrap: Option<String>,
    pub props_value: Option<String>,
    pub value: Option<String>,
    pub is_held: Option<String>,
    pub is_pocketed: Option<String>,
    pub held_by: Option<String>,
    pub in_ship_room: Option<String>,
    pub in_elevator: Option<String>,
}

impl EntityMembers {
    /// Resolve entity-level members from a probe, and nested members from
    /// the probe's properties object when it carries one.
    pub fn resolve(probe: &ObjectRef) -> Self {
        let present = |member: &str| probe.get(member).is_some().then(|| member.to_string());

        let mut members = Self {
            item_properties: present(ITEM_PROPERTIES),
            props_is_scrap: None,
            props_value: None,
            value: present(SCRAP_VALUE),
            is_held: present(IS_HELD),
            is_pocketed: present(IS_POCKETED),
            held_by: present(PLAYER_HELD_BY),
            in_ship_room: present(IS_IN_SHIP_ROOM),
            in_elevator: present(IS_IN_ELEVATOR),
        };

        if let Some(props) = probe.get(ITEM_PROPERTIES).and_then(|v| v.as_obj()) {
            members.resolve_nested(&props);
        }

        let missing = members.missing();
        if !missing.is_empty() {
            warn!(?missing, "entity members absent; dependent checks disabled");
        }
        members
    }

    /// Resolve the nested member names from a live properties object.
    pub fn resolve_nested(&mut self, props: &ObjectRef) {
        let present = |member: &str| props.get(member).is_some().then(|| member.to_string());
        self.props_is_scrap = present(PROPS_IS_SCRAP);
        self.props_value = present(PROPS_SCRAP_VALUE);
    }

    pub fn nested_resolved(&self) -> bool {
        self.props_is_scrap.is_some()
    }

    fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.item_properties.is_none() {
            missing.push(ITEM_PROPERTIES);
        }
        if self.value.is_none() {
            missing.push(SCRAP_VALUE);
        }
        if self.is_held.is_none() {
            missing.push(IS_HELD);
        }
        if self.is_pocketed.is_none() {
            missing.push(IS_POCKETED);
        }
        if self.held_by.is_none() {
            missing.push(PLAYER_HELD_BY);
        }
        if self.in_ship_room.is_none() {
            missing.push(IS_IN_SHIP_ROOM);
        }
        if self.in_elevator.is_none() {
            missing.push(IS_IN_ELEVATOR);
        }
        missing
    }
}

/// Process-lifetime member knowledge: the resolved entity member set plus
/// the discovered value-sync method name.
#[derive(Default)]
pub struct MemberTable {
    entity: Option<Rc<EntityMembers>>,
    sync_method: Option<String>,
    sync_scanned: bool,
}

impl MemberTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entity member set, resolved once from the first live probe in
    /// `population`. The nested names are retried on later calls until a
    /// properties object has been seen.
    pub fn entity_members(&mut self, population: &[ObjectRef]) -> Option<Rc<EntityMembers>> {
        if self.entity.is_none() {
            let probe = population.iter().find(|o| !o.is_dead())?;
            debug!(probe = %probe.name(), "resolving entity members");
            self.entity = Some(Rc::new(EntityMembers::resolve(probe)));
            self.sync_method(probe);
        } else if let Some(current) = self.entity.clone()
            && !current.nested_resolved()
            && let Some(props) = population
                .iter()
                .filter(|o| !o.is_dead())
                .find_map(|o| o.get(ITEM_PROPERTIES).and_then(|v| v.as_obj()))
        {
            let mut updated = (*current).clone();
            updated.item_properties = Some(ITEM_PROPERTIES.to_string());
            updated.resolve_nested(&props);
            self.entity = Some(Rc::new(updated));
        }
        self.entity.clone()
    }

    /// The value-sync method name, discovered by scanning the probe's
    /// methods exactly once.
    pub fn sync_method(&mut self, probe: &ObjectRef) -> Option<&str> {
        if !self.sync_scanned {
            self.sync_scanned = true;
            let Ok(pattern) = Regex::new(SYNC_METHOD_PATTERN) else {
                return None;
            };
            self.sync_method = probe
                .methods()
                .into_iter()
                .find(|m| m.takes_int && pattern.is_match(&m.name))
                .map(|m| m.name);
            match &self.sync_method {
                Some(name) => debug!(method = %name, "value-sync method discovered"),
                None => debug!("no value-sync method on the entity shape"),
            }
        }
        self.sync_method.as_deref()
    }
}
