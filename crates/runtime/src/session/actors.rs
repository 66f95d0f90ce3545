//! Session-owned actors that are not agents.
use chase_core::{Aabb, CellPos, EntityId, Vec3};
use serde::{Deserialize, Serialize};

use crate::oracle::FlagVolume;

/// Collectible flag resting on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flag {
    pub id: EntityId,
    pub cell: CellPos,
    pub position: Vec3,
    pub radius: f32,
}

impl Flag {
    pub fn volume(&self) -> FlagVolume {
        FlagVolume {
            id: self.id,
            center: self.position,
            radius: self.radius,
        }
    }
}

/// Smoke cloud released by the player; stuns enemies entering it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Smoke {
    pub id: EntityId,
    pub bounds: Aabb,
    /// Seconds until the cloud disappears.
    pub remaining: f32,
}

impl Smoke {
    /// Ages the cloud by `dt`. Returns true once it has expired.
    ///
    /// Negative steps are treated as zero.
    pub fn age(&mut self, dt: f32) -> bool {
        self.remaining -= dt.max(0.0);
        self.remaining <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smoke(remaining: f32) -> Smoke {
        Smoke {
            id: EntityId(9),
            bounds: Aabb::cube(Vec3::ZERO, 45.0),
            remaining,
        }
    }

    #[test]
    fn expires_once_lifespan_runs_out() {
        let mut cloud = smoke(2.0);
        assert!(!cloud.age(1.5));
        assert!(cloud.age(0.5));
    }

    #[test]
    fn negative_step_does_not_extend_life() {
        let mut cloud = smoke(1.0);
        assert!(!cloud.age(-5.0));
        assert_eq!(cloud.remaining, 1.0);
        assert!(cloud.age(1.0));
    }
}
