//! Post-tick overlap checks.
//!
//! After an agent's tick the caller asks which actors its box now touches.
//! The broad phase belongs to the caller ([`OverlapOracle`]); the rules for
//! which kinds matter to which agent, and the notifications they raise, live
//! here.
use crate::agent::Agent;
use crate::geometry::Aabb;
use crate::state::EntityId;

/// Actor categories an agent can overlap.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum OverlapKind {
    Player,
    Collectible,
    Hazard,
}

/// Broad phase over the actors not owned by the core.
pub trait OverlapOracle: Send + Sync {
    /// Actors of `kind` whose volume intersects `bounds`, excluding `agent`.
    fn overlapping(&self, kind: OverlapKind, agent: EntityId, bounds: &Aabb) -> Vec<EntityId>;
}

/// Receives the notifications raised by [`check_overlaps`].
pub trait OverlapSink {
    /// An active enemy touched the player.
    fn collision_with_player(&mut self, enemy: EntityId);

    fn collectible_touched(&mut self, player: EntityId, collectible: EntityId);

    fn hazard_touched(&mut self, enemy: EntityId, hazard: EntityId);
}

/// Raises the notifications for `agent`'s current box.
///
/// The player reports collectibles. Enemies report hazards, and report the
/// player only while not stunned.
pub fn check_overlaps<O, S>(agent: &Agent, oracle: &O, sink: &mut S)
where
    O: OverlapOracle + ?Sized,
    S: OverlapSink + ?Sized,
{
    let bounds = agent.bounds();
    let id = agent.id();
    if agent.is_player() {
        for collectible in oracle.overlapping(OverlapKind::Collectible, id, &bounds) {
            sink.collectible_touched(id, collectible);
        }
        return;
    }

    for hazard in oracle.overlapping(OverlapKind::Hazard, id, &bounds) {
        sink.hazard_touched(id, hazard);
    }
    if agent.is_stunned() {
        return;
    }
    if !oracle
        .overlapping(OverlapKind::Player, id, &bounds)
        .is_empty()
    {
        sink.collision_with_player(id);
    }
}
