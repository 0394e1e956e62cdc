//! Scrap valuation: classify every directory entity, sum the eligible.
//!
//! The pipeline short-circuits in a fixed order (eligibility, value,
//! possession, location), so possession always overrides location and a
//! non-scrap entity is excluded no matter what else it reports. The total
//! is recomputed from the current snapshot on every call: eligibility and
//! value can both change between calls through external mutation, so
//! nothing incremental would stay correct.

use crate::config::ClassifierConfig;
use crate::entity::{EntityView, PlayerView};
use crate::spatial::SpatialFrame;

/// Where a counted entity was found, in classification priority order.
/// The first matching test wins; later tests are never consulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Explicit ship-room flag.
    ShipRoomFlag,
    /// Explicit elevator flag; the elevator counts as aboard.
    ElevatorFlag,
    /// An ancestor name matched one of the configured needles.
    AncestorName,
    /// Inside the padded frame volume.
    WithinBounds,
    /// Within the horizontal proximity radius of the frame origin.
    NearFrame,
}

/// Why an entity was excluded from the total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exclusion {
    /// Not scrap, or the item-properties member is absent.
    NotScrap,
    /// Neither value source present, or the best value is not positive.
    NoValue,
    /// Held, pocketed, or referenced by a holder.
    Possessed,
    /// Failed every location test.
    OffShip,
}

/// Outcome of classifying one entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Counted { value: i64, placement: Placement },
    Excluded(Exclusion),
}

/// Best available value: the maximum of whichever sources are present and
/// non-negative, never their sum. `None` when neither source is usable.
pub fn extract_value(entity: &dyn EntityView) -> Option<i64> {
    let nested = entity
        .item_properties()
        .and_then(|p| p.value())
        .filter(|v| *v >= 0);
    let direct = entity.direct_value().filter(|v| *v >= 0);
    match (nested, direct) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// First location test the entity passes, or `None` when it fails all five.
pub fn classify_location(
    entity: &dyn EntityView,
    frame: &SpatialFrame,
    cfg: &ClassifierConfig,
) -> Option<Placement> {
    if entity.in_ship_room() == Some(true) {
        return Some(Placement::ShipRoomFlag);
    }
    if entity.in_elevator() == Some(true) {
        return Some(Placement::ElevatorFlag);
    }

    // Flags can lag a scene transition; the parent chain often knows first.
    let names = entity.ancestor_names(cfg.ancestor_depth);
    if names.iter().any(|name| {
        let name = name.to_lowercase();
        cfg.ancestor_needles
            .iter()
            .any(|needle| name.contains(&needle.to_lowercase()))
    }) {
        return Some(Placement::AncestorName);
    }

    if let Some(pos) = entity.position() {
        if frame.contains(pos) {
            return Some(Placement::WithinBounds);
        }
        if let Some(d) = frame.horizontal_distance(pos)
            && d < cfg.near_radius
        {
            return Some(Placement::NearFrame);
        }
    }

    None
}

/// Run the full pipeline for one entity.
pub fn classify(
    entity: &dyn EntityView,
    frame: &SpatialFrame,
    cfg: &ClassifierConfig,
) -> Verdict {
    // Eligibility: an absent properties member disqualifies. Never guess.
    let Some(props) = entity.item_properties() else {
        return Verdict::Excluded(Exclusion::NotScrap);
    };
    if props.is_scrap() != Some(true) {
        return Verdict::Excluded(Exclusion::NotScrap);
    }

    let value = match extract_value(entity) {
        Some(v) if v > 0 => v,
        _ => return Verdict::Excluded(Exclusion::NoValue),
    };

    // Possession overrides location.
    if entity.is_held() == Some(true) || entity.is_pocketed() == Some(true) || entity.has_holder()
    {
        return Verdict::Excluded(Exclusion::Possessed);
    }

    match classify_location(entity, frame, cfg) {
        Some(placement) => Verdict::Counted { value, placement },
        None => Verdict::Excluded(Exclusion::OffShip),
    }
}

/// Sum the values of every eligible entity in the snapshot.
pub fn sum_eligible<'a, I>(entities: I, frame: &SpatialFrame, cfg: &ClassifierConfig) -> i64
where
    I: IntoIterator<Item = &'a dyn EntityView>,
{
    let mut total = 0;
    for entity in entities {
        if let Verdict::Counted { value, .. } = classify(entity, frame, cfg) {
            total += value;
        }
    }
    total
}

/// Is the local player aboard? Local/owner flags are enforced only when
/// the host exposes them; room flags win over the bounds fallback.
pub fn player_in_ship(player: &dyn PlayerView, frame: &SpatialFrame) -> bool {
    if player.is_local() == Some(false) {
        return false;
    }
    if player.is_owner() == Some(false) {
        return false;
    }
    if player.in_hangar_room() == Some(true) {
        return true;
    }
    if let Some(flag) = player.in_ship_room() {
        return flag;
    }
    if let Some(pos) = player.position() {
        return frame.contains(pos);
    }
    false
}
