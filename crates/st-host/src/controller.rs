//! The long-lived tally context.
//!
//! One `ScrapTally` owns every piece of mutable state in the system (the
//! member table, the singleton caches, the discovery caches, the gate, and
//! the popup timer) and hands the host a `HookRegistry` sharing that same
//! state. Everything runs on the host's cooperative timeline: the host
//! delivers input events and `tick`s, and nothing here blocks or spawns.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, warn};

use st_core::{
    Debounce, DirectoryCache, EntityView, FrameCache, NotificationGate, Seconds, SingleSlotTimer,
    TallyConfig, player_in_ship, sum_eligible,
};

use crate::adapter::{DynEntity, DynPlayer, SceneFrames, SceneScan, local_player};
use crate::channel::ChannelLocator;
use crate::hooks::HookRegistry;
use crate::members::MemberTable;
use crate::object::{HostObject, HostScene, InstanceId, SceneRef};
use crate::singleton::{Refresh, SingletonCache};
use crate::surface;

pub(crate) struct TallyState {
    pub config: TallyConfig,
    pub members: MemberTable,
    pub scene_root: SingletonCache,
    pub surface: SingletonCache,
    pub channel: ChannelLocator,
    pub gate: NotificationGate,
    pub directory: DirectoryCache<DynEntity>,
    pub frame: FrameCache,
    pub debounce: Debounce,
    pub hide: SingleSlotTimer,
    /// Which surface instance the pending hide belongs to; a fire against
    /// a replaced instance is stale and dropped.
    pub hide_surface: Option<InstanceId>,
}

pub struct ScrapTally {
    scene: SceneRef,
    state: Rc<RefCell<TallyState>>,
}

impl ScrapTally {
    pub fn new(scene: SceneRef, config: TallyConfig) -> Self {
        let state = TallyState {
            members: MemberTable::new(),
            scene_root: SingletonCache::new("scene-root"),
            surface: SingletonCache::new("notice-surface"),
            channel: ChannelLocator::new(),
            gate: NotificationGate::new(),
            directory: DirectoryCache::new(config.directory_window),
            frame: FrameCache::new(
                config.frame_window,
                config.bounds_padding,
                config.frame_retry_delay,
            ),
            debounce: Debounce::new(config.debounce_window),
            hide: SingleSlotTimer::new(),
            hide_surface: None,
            config,
        };
        Self {
            scene,
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// The extension points the host collaborator registers against.
    pub fn hooks(&self) -> HookRegistry {
        HookRegistry::new(self.scene.clone(), self.state.clone())
    }

    /// The one externally settable knob: popup visible time.
    pub fn set_popup_duration(&self, seconds: f64) {
        self.state.borrow_mut().config.popup_duration = seconds;
    }

    /// Scan-input event from the host's input layer. Only `performed`
    /// transitions are accepted, and rapid repeats are debounced.
    pub fn on_scan_input(&self, now: Seconds, performed: bool) {
        if !performed {
            return;
        }

        let total = {
            let mut state = self.state.borrow_mut();
            if !state.debounce.accept(now) {
                debug!("scan trigger debounced");
                return;
            }
            refresh_singletons(&self.scene, &mut state);

            let state = &mut *state;
            let frame = {
                let mut frames = SceneFrames {
                    scene: self.scene.as_ref(),
                };
                state.frame.get(&mut frames, now)
            };
            if !frame.is_resolved() {
                debug!("ship frame currently unknown");
            }

            let Some(player) = local_player(self.scene.as_ref()) else {
                debug!("no local player resolvable; scan ignored");
                return;
            };
            if !player_in_ship(&DynPlayer::new(player), &frame) {
                debug!("local player not aboard; scan ignored");
                return;
            }

            let TallyState {
                directory,
                members,
                config,
                ..
            } = state;
            let mut scan = SceneScan {
                scene: self.scene.as_ref(),
                members,
            };
            let snapshot = directory.get(&mut scan, now);
            sum_eligible(
                snapshot.iter().map(|e| e as &dyn EntityView),
                &frame,
                &config.classifier,
            )
        };

        info!(total, "scan accepted");
        self.show(now, &format!("Total in Ship: {total}"));
    }

    /// Show `text` on the notice surface, silently, and schedule the hide.
    pub fn show(&self, now: Seconds, text: &str) {
        let surface = {
            let mut state = self.state.borrow_mut();
            refresh_singletons(&self.scene, &mut state);
            let Some(surface) = state.surface.get() else {
                warn!("notice surface unavailable; popup skipped");
                return;
            };
            state.gate.arm();
            surface
        };

        surface::prepare_for_show(&surface);

        // The display call re-enters through the registry's prefix and
        // postfix, so no state borrow is held across it.
        if let Err(e) = surface::display(&surface, text) {
            warn!(error = %e, "display call failed");
            self.state.borrow_mut().gate.disarm();
            return;
        }

        let mut state = self.state.borrow_mut();
        let duration = state.config.popup_duration;
        state.hide.schedule(now, duration);
        state.hide_surface = Some(surface.id());
    }

    /// Drive the cooperative timers; the host calls this on its own
    /// cadence.
    pub fn tick(&self, now: Seconds) {
        {
            let mut state = self.state.borrow_mut();
            let state = &mut *state;
            let mut frames = SceneFrames {
                scene: self.scene.as_ref(),
            };
            state.frame.tick(&mut frames, now);
        }

        let expected = {
            let mut state = self.state.borrow_mut();
            if state.hide.poll(now) {
                state.hide_surface.take()
            } else {
                None
            }
        };
        let Some(expected) = expected else { return };

        let current = {
            let mut state = self.state.borrow_mut();
            refresh_singletons(&self.scene, &mut state);
            state.surface.get()
        };
        match current {
            Some(surface) if surface.id() == expected => surface::hide(&surface),
            Some(_) => debug!("notice surface replaced; stale hide dropped"),
            None => {}
        }
    }
}

/// Re-read both singletons and reset whatever is keyed on an instance that
/// turned out to be dead or replaced.
pub(crate) fn refresh_singletons(scene: &SceneRef, state: &mut TallyState) {
    if state.scene_root.refresh(scene.scene_root()) == Refresh::Replaced {
        // Scene reload: every scene-keyed cache restarts from scratch.
        state.directory.invalidate();
        state.frame.invalidate();
    }
    if state.surface.refresh(scene.notice_surface()) == Refresh::Replaced {
        state.channel.reset();
    }
}
