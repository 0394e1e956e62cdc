//! Ship reference frame cache.
//!
//! Rebuilt on its own timer, independent of the directory window. The
//! union of the ship root's collider volumes, padded by a margin, is the
//! containment volume; a rebuild that finds a root but no colliders leaves
//! the frame unresolved and arms a one-shot delayed re-check, because the
//! host may still be spawning geometry.

use crate::spatial::{Bounds, SpatialFrame};
use crate::time::{NEVER, Seconds, elapsed};
use crate::timer::SingleSlotTimer;

/// What the host resolved for the ship root on one attempt.
#[derive(Clone, Debug)]
pub struct RootVolumes {
    pub origin: glam::Vec3,
    pub colliders: Vec<Bounds>,
}

/// Resolver for the ship root. `None` when no root candidate is alive.
pub trait FrameSource {
    fn resolve_root(&mut self) -> Option<RootVolumes>;
}

#[derive(Debug)]
pub struct FrameCache {
    frame: SpatialFrame,
    last_built: Seconds,
    window: Seconds,
    padding: f32,
    retry_delay: Seconds,
    retry: SingleSlotTimer,
}

impl FrameCache {
    pub fn new(window: Seconds, padding: f32, retry_delay: Seconds) -> Self {
        Self {
            frame: SpatialFrame::default(),
            last_built: NEVER,
            window,
            padding,
            retry_delay,
            retry: SingleSlotTimer::new(),
        }
    }

    /// The current frame, rebuilt only when stale or still unresolved.
    pub fn get<S: FrameSource>(&mut self, source: &mut S, now: Seconds) -> SpatialFrame {
        if !elapsed(now, self.last_built, self.window) && self.frame.is_resolved() {
            return self.frame;
        }
        self.rebuild(source, now)
    }

    /// Drive the delayed re-check; call once per host tick.
    pub fn tick<S: FrameSource>(&mut self, source: &mut S, now: Seconds) {
        if self.retry.poll(now) {
            self.rebuild(source, now);
        }
    }

    /// Forget the cached frame (the backing scene instance was replaced).
    pub fn invalidate(&mut self) {
        self.frame = SpatialFrame::default();
        self.last_built = NEVER;
        self.retry.cancel();
    }

    pub fn recheck_pending(&self) -> bool {
        self.retry.pending()
    }

    fn rebuild<S: FrameSource>(&mut self, source: &mut S, now: Seconds) -> SpatialFrame {
        self.last_built = now;
        self.frame = SpatialFrame::default();

        let Some(root) = source.resolve_root() else {
            return self.frame;
        };
        self.frame.origin = Some(root.origin);

        let Some((first, rest)) = root.colliders.split_first() else {
            self.retry.schedule(now, self.retry_delay);
            return self.frame;
        };

        let mut bounds = *first;
        for collider in rest {
            bounds.encapsulate(collider);
        }
        bounds.expand(self.padding);
        self.frame.bounds = bounds;
        self.retry.cancel();
        self.frame
    }
}
