//! Liveness-checked singleton cache.
//!
//! The one idiom every singleton lookup in the system shares: on access,
//! the cached instance is replaced when it is dead, uninitialized, or
//! differs by identity from a freshly read live instance, and the swap is
//! reported, so dependents keyed on that identity can reset. A dead
//! instance is a cache reset, never an error.

use tracing::debug;

use crate::object::{HostObject, ObjectRef};

/// Outcome of a refresh, as seen by dependents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refresh {
    Unchanged,
    /// The cached instance was replaced (possibly by nothing); state keyed
    /// on the old instance's identity is stale.
    Replaced,
}

pub struct SingletonCache {
    label: &'static str,
    cached: Option<ObjectRef>,
}

impl SingletonCache {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            cached: None,
        }
    }

    /// Reconcile the cache against the freshly read current instance.
    pub fn refresh(&mut self, current: Option<ObjectRef>) -> Refresh {
        let cached_dead = self.cached.as_ref().is_some_and(|o| o.is_dead());
        let current_live = current.as_ref().is_some_and(|o| !o.is_dead());

        let replace = match &self.cached {
            None => current_live,
            Some(_) if cached_dead => true,
            Some(cached) => current_live && current.as_ref().is_some_and(|c| c.id() != cached.id()),
        };
        if !replace {
            return Refresh::Unchanged;
        }

        debug!(singleton = self.label, "instance replaced");
        self.cached = if current_live { current } else { None };
        Refresh::Replaced
    }

    pub fn get(&self) -> Option<ObjectRef> {
        self.cached.clone()
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
