//! Time-boxed snapshot cache over the host's live entity population.
//!
//! Full-population scans are expensive, so at most one runs per freshness
//! window; everything else sees the memoized snapshot unchanged. The cache
//! never owns entity lifetime: it holds a borrowed, time-boxed list and
//! the host remains free to mutate or destroy entities underneath it.

use crate::time::{NEVER, Seconds};

/// Source of full-population scans. Implementations swallow their own
/// failures and return an empty list; a scan never errors upward.
pub trait EntityScan {
    type Entity;

    /// Fast path: live objects of the collectible shape.
    fn scan_live(&mut self) -> Vec<Self::Entity>;

    /// Exhaustive asset-table scan; may include template objects that are
    /// not part of any active scene.
    fn scan_assets(&mut self) -> Vec<Self::Entity>;

    /// Whether an asset-scan hit belongs to an active scene.
    fn in_active_scene(&self, entity: &Self::Entity) -> bool;
}

/// Memoized directory snapshot with explicit invalidation.
#[derive(Debug)]
pub struct DirectoryCache<E> {
    snapshot: Vec<E>,
    last_built: Seconds,
    window: Seconds,
}

impl<E> DirectoryCache<E> {
    pub fn new(window: Seconds) -> Self {
        Self {
            snapshot: Vec::new(),
            last_built: NEVER,
            window,
        }
    }

    /// The current snapshot, rescanning only when the window has lapsed.
    ///
    /// A live scan that comes back empty falls through to the asset table,
    /// filtered to active-scene entries, since just-spawned objects can miss the
    /// fast path. Always returns a list; total failure is an empty one.
    pub fn get<S>(&mut self, scan: &mut S, now: Seconds) -> &[E]
    where
        S: EntityScan<Entity = E>,
    {
        if now - self.last_built <= self.window {
            return &self.snapshot;
        }

        self.last_built = now;
        let mut found = scan.scan_live();
        if found.is_empty() {
            found = scan
                .scan_assets()
                .into_iter()
                .filter(|e| scan.in_active_scene(e))
                .collect();
        }
        self.snapshot = found;
        &self.snapshot
    }

    /// Force the next `get` to rescan, regardless of the window.
    pub fn invalidate(&mut self) {
        self.last_built = NEVER;
    }
}
