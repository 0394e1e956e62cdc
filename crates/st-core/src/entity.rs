//! Capability-checked views over host-owned objects.
//!
//! The host schema is externally owned and versioned, so nothing here is a
//! stable compile-time contract: every read is `Option`-typed and a missing
//! member disables only the checks that depend on it. The fallback policy
//! for each absent member lives in the valuation pipeline.

use glam::Vec3;

/// The nested item-properties member of a collectible entity.
pub trait ItemPropertiesView {
    fn is_scrap(&self) -> Option<bool>;
    /// Value source inside the properties member, independent of the
    /// entity's own value field.
    fn value(&self) -> Option<i64>;
}

/// One collectible entity, as much of it as the host exposes.
pub trait EntityView {
    /// The nested item-properties member. Absence disqualifies the entity
    /// conservatively; eligibility is never guessed.
    fn item_properties(&self) -> Option<&dyn ItemPropertiesView>;

    /// The entity-level value field, the second of the two value sources.
    fn direct_value(&self) -> Option<i64>;

    fn is_held(&self) -> Option<bool>;
    fn is_pocketed(&self) -> Option<bool>;

    /// Whether any holder reference is set. `false` covers both "no holder"
    /// and "holder member absent", since an absent member cannot disqualify.
    fn has_holder(&self) -> bool;

    fn in_ship_room(&self) -> Option<bool>;
    fn in_elevator(&self) -> Option<bool>;

    fn position(&self) -> Option<Vec3>;

    /// Parent-chain names, nearest ancestor first, at most `max_depth` deep.
    fn ancestor_names(&self, max_depth: usize) -> Vec<String>;
}

/// The local player, as much of it as the host exposes.
pub trait PlayerView {
    fn is_local(&self) -> Option<bool>;
    fn is_owner(&self) -> Option<bool>;
    fn in_hangar_room(&self) -> Option<bool>;
    fn in_ship_room(&self) -> Option<bool>;
    fn position(&self) -> Option<Vec3>;
}
