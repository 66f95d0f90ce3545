//! Deterministic grid-chase movement and pursuit rules.
//!
//! `chase-core` defines how agents move on the grid (continuous interpolation
//! toward snapped targets), how the player's queued turns are applied, how
//! enemies pick their next step, and how stuns suspend them. It performs no
//! I/O: world geometry and the pursuit reference are injected through the
//! oracle traits in [`env`], and overlap notifications flow out through
//! [`overlap::OverlapSink`].
//!
//! Every agent is ticked through [`Agent::tick`], which runs the stun machine,
//! the motion controller and the agent-specific direction choice in one call.
pub mod agent;
pub mod config;
pub mod env;
pub mod error;
pub mod geometry;
pub mod intent;
pub mod motion;
pub mod overlap;
pub mod pursuit;
pub mod state;
pub mod stun;

#[cfg(test)]
pub(crate) mod testing;

pub use agent::{Agent, AgentError, AgentKind, Decision, EnemyExtra, PlayerExtra, TickOutcome};
pub use config::{ConfigError, GameConfig};
pub use env::{
    CellPos, Env, FixedReference, GameEnv, LayoutError, MapLayout, ObstructionOracle, OracleError,
    ReferenceProvider, StaticGeometry, SweepQuery,
};
pub use error::{ErrorSeverity, GameError};
pub use geometry::Aabb;
pub use intent::{IntentBuffer, IntentTurn};
pub use motion::{GridMotion, GridSpec, MotionPhase, MotionStep, MoveProbe};
pub use overlap::{OverlapKind, OverlapOracle, OverlapSink, check_overlaps};
pub use pursuit::{PursuitDecision, PursuitTier, choose_direction};
pub use state::{AbilityError, Axis, CardinalDirection, EntityId, FuelTank, Heading, heading_vector};
pub use stun::{StunState, StunTick};

pub use glam::Vec3;
