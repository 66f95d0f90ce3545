use glam::Vec3;

use crate::geometry::Aabb;
use crate::state::EntityId;

/// Swept move to validate: the agent's box travelling in a straight line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepQuery {
    /// Querying agent; never reported as its own obstruction.
    pub agent: EntityId,
    pub half_extent: Vec3,
    pub from: Vec3,
    pub to: Vec3,
}

/// Static geometry oracle answering "can this box travel from A to B?".
///
/// Implementations must be pure: the same query against the same world
/// always yields the same answer, and querying never mutates anything.
pub trait ObstructionOracle: Send + Sync {
    /// Returns true iff the swept box touches no blocking geometry.
    fn can_move_to(&self, query: &SweepQuery) -> bool;
}

/// Immutable set of blocking boxes (walls).
///
/// Walls never belong to an agent, so the querying agent needs no filtering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticGeometry {
    blockers: Vec<Aabb>,
}

impl StaticGeometry {
    pub fn new(blockers: Vec<Aabb>) -> Self {
        Self { blockers }
    }

    pub fn push(&mut self, blocker: Aabb) {
        self.blockers.push(blocker);
    }

    pub fn blockers(&self) -> &[Aabb] {
        &self.blockers
    }

    pub fn len(&self) -> usize {
        self.blockers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blockers.is_empty()
    }

    /// Earliest blocking contact along the sweep, as `(time, blocker)`.
    pub fn first_hit(&self, query: &SweepQuery) -> Option<(f32, &Aabb)> {
        self.blockers
            .iter()
            .filter_map(|blocker| {
                blocker
                    .sweep(query.half_extent, query.from, query.to)
                    .map(|t| (t, blocker))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
    }
}

impl ObstructionOracle for StaticGeometry {
    fn can_move_to(&self, query: &SweepQuery) -> bool {
        !self
            .blockers
            .iter()
            .any(|blocker| blocker.sweep(query.half_extent, query.from, query.to).is_some())
    }
}
