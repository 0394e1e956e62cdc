//! Emission-channel locator for the notice surface.
//!
//! Finds the audio channel the surface plays its cue through, so the
//! suppression gate can veto exactly that channel and nothing else.
//! Memoized until reset; the controller resets it whenever the surface
//! instance itself is replaced.

use tracing::debug;

use crate::object::{HostObject, ObjectRef};

/// Named channel fields tried first, in order.
const CHANNEL_FIELDS: &[&str] = &["noticeAudio", "uiAudio"];

/// A method every emission channel exposes; used for the fallback search.
const PLAY_METHOD: &str = "play";

#[derive(Default)]
pub struct ChannelLocator {
    cached: Option<ObjectRef>,
}

impl ChannelLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the cached channel; the next lookup re-resolves.
    pub fn reset(&mut self) {
        self.cached = None;
    }

    /// The surface's own emission channel, if it has one.
    pub fn get(&mut self, surface: &ObjectRef) -> Option<ObjectRef> {
        if let Some(cached) = &self.cached {
            if cached.is_dead() {
                self.cached = None;
            } else {
                return self.cached.clone();
            }
        }

        for field in CHANNEL_FIELDS {
            if let Some(channel) = surface.get(field).and_then(|v| v.as_obj())
                && !channel.is_dead()
            {
                self.cached = Some(channel);
                return self.cached.clone();
            }
        }

        // Last resort: the first attached object that can play a cue.
        let found = surface.attached().into_iter().find(|o| {
            !o.is_dead() && o.methods().iter().any(|m| m.name == PLAY_METHOD)
        });
        if found.is_none() {
            debug!("notice surface exposes no emission channel");
        }
        self.cached = found;
        self.cached.clone()
    }
}
