//! Greedy one-step pursuit for enemies.
//!
//! On every arrival the enemy steps along the axis with the larger gap to the
//! player. When that cell is blocked it falls back, in order, to the other
//! axis, to the first open cardinal step, and finally to reversing its
//! current heading without checking it.
use glam::Vec3;

use crate::env::ObstructionOracle;
use crate::motion::MoveProbe;
use crate::state::{Axis, CardinalDirection, Heading};

/// Which rule produced a pursuit decision.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PursuitTier {
    /// Open step along the axis with the larger gap.
    Preferred,
    /// Open step along the other axis.
    Secondary,
    /// First open step in [`CardinalDirection::SCAN_ORDER`].
    Scan,
    /// Every step blocked; the current heading is negated unchecked.
    Reversed,
    /// Already on the reference point.
    Hold,
    /// No reference point; heading left unchanged.
    Untracked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PursuitDecision {
    pub heading: Heading,
    pub tier: PursuitTier,
}

impl PursuitDecision {
    const fn new(heading: Heading, tier: PursuitTier) -> Self {
        Self { heading, tier }
    }
}

/// Substituted when the secondary axis has no gap to close.
const SECONDARY_FALLBACK: CardinalDirection = CardinalDirection::East;

/// Picks the next heading for an enemy standing at `probe.origin()`.
///
/// Pure: the result depends only on the origin, `reference`, `current` and
/// the oracle's answers.
pub fn choose_direction<O: ObstructionOracle + ?Sized>(
    probe: &MoveProbe<'_, O>,
    reference: Option<Vec3>,
    current: Heading,
) -> PursuitDecision {
    let Some(reference) = reference else {
        return PursuitDecision::new(current, PursuitTier::Untracked);
    };
    let gap = reference - probe.origin();
    let axis = if gap.x.abs() > gap.y.abs() {
        Axis::X
    } else {
        Axis::Y
    };

    let Some(preferred) = CardinalDirection::along(axis, axis.component(gap)) else {
        return PursuitDecision::new(None, PursuitTier::Hold);
    };
    if probe.is_clear(preferred) {
        return PursuitDecision::new(Some(preferred), PursuitTier::Preferred);
    }

    let other = axis.other();
    let secondary = CardinalDirection::along(other, other.component(gap)).unwrap_or(SECONDARY_FALLBACK);
    if probe.is_clear(secondary) {
        return PursuitDecision::new(Some(secondary), PursuitTier::Secondary);
    }

    if let Some(open) = CardinalDirection::SCAN_ORDER
        .into_iter()
        .find(|&direction| probe.is_clear(direction))
    {
        return PursuitDecision::new(Some(open), PursuitTier::Scan);
    }

    PursuitDecision::new(current.map(CardinalDirection::opposite), PursuitTier::Reversed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::GridSpec;
    use crate::state::EntityId;
    use crate::state::CardinalDirection::{East, North, South, West};
    use crate::testing::{BlockedDirections, OpenField, cell, walls};

    const UNIT_GRID: GridSpec = GridSpec::new(1.0, 0.01);

    fn decide<O: ObstructionOracle>(oracle: &O, reference: Option<Vec3>, current: Heading) -> PursuitDecision {
        let probe = MoveProbe::new(oracle, EntityId(1), Vec3::splat(0.4), cell(0, 0, 1.0), &UNIT_GRID);
        choose_direction(&probe, reference, current)
    }

    const PLAYER: Option<Vec3> = Some(Vec3::new(5.0, 2.0, 0.0));

    #[test]
    fn open_field_steps_along_the_wider_gap() {
        let decision = decide(&OpenField, PLAYER, None);
        assert_eq!(decision, PursuitDecision::new(Some(East), PursuitTier::Preferred));
    }

    #[test]
    fn blocked_preferred_falls_back_to_secondary() {
        let decision = decide(&BlockedDirections(vec![East]), PLAYER, Some(East));
        assert_eq!(decision, PursuitDecision::new(Some(North), PursuitTier::Secondary));
    }

    #[test]
    fn boxed_in_reverses_without_checking() {
        let decision = decide(&BlockedDirections::all(), PLAYER, Some(East));
        assert_eq!(decision, PursuitDecision::new(Some(West), PursuitTier::Reversed));
        assert_eq!(decide(&BlockedDirections::all(), PLAYER, None).heading, None);
    }

    #[test]
    fn scan_takes_first_open_step_in_order() {
        let blocked = BlockedDirections(vec![East, North, West]);
        let decision = decide(&blocked, PLAYER, Some(East));
        assert_eq!(decision, PursuitDecision::new(Some(South), PursuitTier::Scan));
    }

    #[test]
    fn degenerate_secondary_substitutes_east() {
        let above = Some(Vec3::new(0.0, 5.0, 0.0));
        let decision = decide(&BlockedDirections(vec![North]), above, None);
        assert_eq!(decision, PursuitDecision::new(Some(East), PursuitTier::Secondary));

        // Substitute coincides with the blocked preferred step.
        let ahead = Some(Vec3::new(5.0, 0.0, 0.0));
        let decision = decide(&BlockedDirections(vec![East]), ahead, None);
        assert_eq!(decision, PursuitDecision::new(Some(West), PursuitTier::Scan));
    }

    #[test]
    fn equal_gaps_prefer_the_y_axis() {
        let diagonal = Some(Vec3::new(-3.0, -3.0, 0.0));
        assert_eq!(decide(&OpenField, diagonal, None).heading, Some(South));
    }

    #[test]
    fn missing_reference_keeps_heading() {
        let decision = decide(&OpenField, None, Some(North));
        assert_eq!(decision, PursuitDecision::new(Some(North), PursuitTier::Untracked));
    }

    #[test]
    fn standing_on_reference_holds() {
        let decision = decide(&OpenField, Some(Vec3::new(0.0, 0.0, 7.0)), Some(West));
        assert_eq!(decision, PursuitDecision::new(None, PursuitTier::Hold));
    }

    #[test]
    fn same_inputs_same_decision() {
        let geometry = walls(&[(1, 0), (0, 1)], 1.0);
        let first = decide(&geometry, PLAYER, Some(East));
        for _ in 0..16 {
            assert_eq!(decide(&geometry, PLAYER, Some(East)), first);
        }
        assert_eq!(first, PursuitDecision::new(Some(West), PursuitTier::Scan));
    }
}
