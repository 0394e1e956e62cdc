//! World-space volumes for the ship reference frame.

use glam::Vec3;

/// Axis-aligned bounding volume.
///
/// A zero-size volume means "not yet resolved"; callers must treat it as
/// unknown, never as an empty region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// The unresolved volume.
    pub const ZERO: Bounds = Bounds {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
    };

    /// Volume centered at `center` extending `size / 2` along each axis.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Grow to enclose `other` as well.
    pub fn encapsulate(&mut self, other: &Bounds) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Push every face outward by `margin`.
    pub fn expand(&mut self, margin: f32) {
        self.min -= Vec3::splat(margin);
        self.max += Vec3::splat(margin);
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Zero size on every axis: the "not yet resolved" state.
    pub fn is_degenerate(&self) -> bool {
        self.size() == Vec3::ZERO
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Resolved ship reference frame: the reference origin plus the padded
/// union of the collider volumes beneath it.
///
/// `origin` can be known while `bounds` is still degenerate (root resolved,
/// geometry not yet spawned); the two are consulted independently.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpatialFrame {
    pub origin: Option<Vec3>,
    pub bounds: Bounds,
}

impl SpatialFrame {
    /// Whether the volume is usable for containment tests.
    pub fn is_resolved(&self) -> bool {
        !self.bounds.is_degenerate()
    }

    pub fn contains(&self, point: Vec3) -> bool {
        self.is_resolved() && self.bounds.contains(point)
    }

    /// Distance from the origin in the horizontal plane, ignoring the
    /// vertical offset. `None` when the origin is unknown.
    pub fn horizontal_distance(&self, point: Vec3) -> Option<f32> {
        let origin = self.origin?;
        let dx = point.x - origin.x;
        let dz = point.z - origin.z;
        Some((dx * dx + dz * dz).sqrt())
    }
}
