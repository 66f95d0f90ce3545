//! Brute-force overlap broad phase.
//!
//! Rebuilt from the session state before each overlap pass. The actor counts
//! are tiny, so a linear scan per query is enough.
use chase_core::{Aabb, EntityId, OverlapKind, OverlapOracle, Vec3};

/// Sphere trigger of a collectible flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlagVolume {
    pub id: EntityId,
    pub center: Vec3,
    pub radius: f32,
}

#[derive(Clone, Debug, Default)]
pub struct ActorIndex {
    player: Option<(EntityId, Aabb)>,
    collectibles: Vec<FlagVolume>,
    hazards: Vec<(EntityId, Aabb)>,
}

impl ActorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player(mut self, id: EntityId, bounds: Aabb) -> Self {
        self.player = Some((id, bounds));
        self
    }

    pub fn push_collectible(&mut self, flag: FlagVolume) {
        self.collectibles.push(flag);
    }

    pub fn push_hazard(&mut self, id: EntityId, bounds: Aabb) {
        self.hazards.push((id, bounds));
    }
}

impl OverlapOracle for ActorIndex {
    fn overlapping(&self, kind: OverlapKind, agent: EntityId, bounds: &Aabb) -> Vec<EntityId> {
        match kind {
            OverlapKind::Player => self
                .player
                .iter()
                .filter(|(id, player)| *id != agent && bounds.intersects(player))
                .map(|(id, _)| *id)
                .collect(),
            OverlapKind::Collectible => self
                .collectibles
                .iter()
                .filter(|flag| flag.id != agent && bounds.intersects_sphere(flag.center, flag.radius))
                .map(|flag| flag.id)
                .collect(),
            OverlapKind::Hazard => self
                .hazards
                .iter()
                .filter(|(id, hazard)| *id != agent && bounds.intersects(hazard))
                .map(|(id, _)| *id)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent_box(x: f32) -> Aabb {
        Aabb::cube(Vec3::new(x, 0.0, 50.0), 40.0)
    }

    #[test]
    fn player_box_overlap_is_strict() {
        let index = ActorIndex::new().with_player(EntityId::PLAYER, agent_box(0.0));
        let touching = index.overlapping(OverlapKind::Player, EntityId(1), &agent_box(79.0));
        assert_eq!(touching, vec![EntityId::PLAYER]);
        let flush = index.overlapping(OverlapKind::Player, EntityId(1), &agent_box(80.0));
        assert!(flush.is_empty());
        let itself = index.overlapping(OverlapKind::Player, EntityId::PLAYER, &agent_box(0.0));
        assert!(itself.is_empty());
    }

    #[test]
    fn flags_use_their_sphere() {
        let mut index = ActorIndex::new();
        index.push_collectible(FlagVolume {
            id: EntityId(7),
            center: Vec3::new(100.0, 0.0, 50.0),
            radius: 30.0,
        });
        assert!(index.overlapping(OverlapKind::Collectible, EntityId::PLAYER, &agent_box(0.0)).is_empty());
        assert_eq!(
            index.overlapping(OverlapKind::Collectible, EntityId::PLAYER, &agent_box(35.0)),
            vec![EntityId(7)]
        );
    }

    #[test]
    fn hazards_are_boxes() {
        let mut index = ActorIndex::new();
        index.push_hazard(EntityId(9), Aabb::cube(Vec3::new(0.0, 0.0, 50.0), 45.0));
        assert_eq!(
            index.overlapping(OverlapKind::Hazard, EntityId(2), &agent_box(84.0)),
            vec![EntityId(9)]
        );
        assert!(index.overlapping(OverlapKind::Hazard, EntityId(2), &agent_box(85.0)).is_empty());
    }
}
