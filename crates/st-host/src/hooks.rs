//! Host extension points.
//!
//! The host collaborator pulls this registry from the controller and
//! invokes these entry points at its two interception sites (around the
//! display call and before each emission) plus its lifecycle events. The
//! registry shares the controller's single-timeline state, so a call made
//! from inside the display invocation observes the gate the controller
//! armed a moment earlier.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::controller::TallyState;
use crate::object::{HostObject, HostScene, ObjectRef, SceneRef};
use crate::singleton::Refresh;
use crate::value::HostValue;

#[derive(Clone)]
pub struct HookRegistry {
    scene: SceneRef,
    state: Rc<RefCell<TallyState>>,
}

impl HookRegistry {
    pub(crate) fn new(scene: SceneRef, state: Rc<RefCell<TallyState>>) -> Self {
        Self { scene, state }
    }

    /// Interception prefix around the surface's display call: consume the
    /// armed flag into the active flag.
    pub fn display_prefix(&self) {
        self.state.borrow_mut().gate.begin_call();
    }

    /// Interception postfix. The host must route every exit path of the
    /// display call through this, errors included.
    pub fn display_postfix(&self) {
        self.state.borrow_mut().gate.end_call();
    }

    /// Pre-emission veto: `true` lets the emission play. Both host call
    /// shapes (with and without a volume argument) route through this one
    /// decision. Only the notice surface's own channel is ever silenced,
    /// and only while an armed display call is active.
    pub fn before_emission(&self, channel: &ObjectRef) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.gate.suppression_active() {
            return true;
        }

        if state.surface.refresh(self.scene.notice_surface()) == Refresh::Replaced {
            state.channel.reset();
        }
        let Some(surface) = state.surface.get() else {
            return true;
        };
        match state.channel.get(&surface) {
            Some(own) if own.id() == channel.id() => {
                debug!("notice cue suppressed for this display call");
                false
            }
            _ => true,
        }
    }

    /// The host announces a freshly spawned notice surface; channel state
    /// keyed on the old instance is stale immediately, not at next access.
    pub fn on_surface_spawned(&self) {
        self.state.borrow_mut().channel.reset();
    }

    /// Route an intercepted entity call. A call matching the discovered
    /// value-sync method writes the new value into the entity's direct
    /// value field and invalidates the directory, keeping the aggregate
    /// consistent with external authority.
    pub fn on_entity_call(&self, entity: &ObjectRef, method: &str, args: &[HostValue]) {
        let mut state = self.state.borrow_mut();

        let is_sync = state
            .members
            .sync_method(entity)
            .is_some_and(|name| name == method);
        if !is_sync {
            return;
        }
        let Some(value) = args.first().and_then(|v| v.as_int()) else {
            return;
        };

        let Some(members) = state.members.entity_members(&[entity.clone()]) else {
            return;
        };
        if let Some(field) = members.value.as_deref()
            && !entity.set(field, HostValue::Int(value))
        {
            warn!(entity = %entity.name(), "value-sync write rejected");
        }
        state.directory.invalidate();
        debug!(method, value, "external value sync applied");
    }
}
