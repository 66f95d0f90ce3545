//! Player and enemy agents.
//!
//! Both kinds share one record: identity, grid motion and a collision box.
//! The per-kind extras carry the player's intent latch and fuel, or the
//! enemy's stun machine. [`Agent::tick`] runs one frame of whichever applies.
mod error;
mod kind;

pub use error::AgentError;
pub use kind::{AgentKind, EnemyExtra, PlayerExtra};

use glam::Vec3;

use crate::config::GameConfig;
use crate::env::{GameEnv, OracleError};
use crate::geometry::Aabb;
use crate::intent::IntentTurn;
use crate::motion::{GridMotion, GridSpec, MotionStep, MoveProbe};
use crate::pursuit::{PursuitTier, choose_direction};
use crate::state::{CardinalDirection, EntityId, FuelTank, Heading};
use crate::stun::{StunState, StunTick};

/// Rule that chose the heading committed at an arrival.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Pursuit(PursuitTier),
    Intent(IntentTurn),
}

/// What happened to an agent during one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Stunned for the whole tick.
    Stunned { remaining: f32 },
    /// Stun ran out this tick; motion resumes next tick.
    Recovered,
    Traveled { distance: f32 },
    Arrived {
        heading: Heading,
        target: Vec3,
        decision: Decision,
    },
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    id: EntityId,
    motion: GridMotion,
    half_extent: Vec3,
    kind: AgentKind,
}

impl Agent {
    /// Player standing still at `spawn`.
    pub fn player(id: EntityId, spawn: Vec3, config: &GameConfig) -> Self {
        Self {
            id,
            motion: GridMotion::new(spawn, config.player_speed, None),
            half_extent: Vec3::splat(config.agent_half_extent),
            kind: AgentKind::Player(PlayerExtra::from_config(config)),
        }
    }

    /// Enemy at `spawn`, initially heading east.
    pub fn enemy(id: EntityId, spawn: Vec3, config: &GameConfig) -> Self {
        Self {
            id,
            motion: GridMotion::new(spawn, config.enemy_speed, Some(CardinalDirection::East)),
            half_extent: Vec3::splat(config.agent_half_extent),
            kind: AgentKind::Enemy(EnemyExtra::from_config(config)),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> &AgentKind {
        &self.kind
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, AgentKind::Player(_))
    }

    pub fn motion(&self) -> &GridMotion {
        &self.motion
    }

    pub fn position(&self) -> Vec3 {
        self.motion.position()
    }

    pub fn heading(&self) -> Heading {
        self.motion.heading()
    }

    /// Last non-zero heading, for orienting a visual.
    pub fn facing(&self) -> Heading {
        self.motion.facing()
    }

    pub fn half_extent(&self) -> Vec3 {
        self.half_extent
    }

    /// Collision box at the current position.
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position(), self.half_extent)
    }

    pub fn fuel(&self) -> Option<&FuelTank> {
        match &self.kind {
            AgentKind::Player(extra) => Some(&extra.fuel),
            AgentKind::Enemy(_) => None,
        }
    }

    /// The player's latched input, if any.
    pub fn queued_direction(&self) -> Heading {
        match &self.kind {
            AgentKind::Player(extra) => extra.intent.queued(),
            AgentKind::Enemy(_) => None,
        }
    }

    pub fn stun_state(&self) -> Option<StunState> {
        match &self.kind {
            AgentKind::Enemy(extra) => Some(extra.stun),
            AgentKind::Player(_) => None,
        }
    }

    pub fn is_stunned(&self) -> bool {
        self.stun_state().is_some_and(|stun| stun.is_stunned())
    }

    /// Latches the player's next direction.
    ///
    /// # Errors
    ///
    /// [`AgentError::NotAPlayer`] for enemies.
    pub fn set_direction(&mut self, direction: CardinalDirection) -> Result<(), AgentError> {
        match &mut self.kind {
            AgentKind::Player(extra) => {
                extra.intent.latch(direction);
                Ok(())
            }
            AgentKind::Enemy(_) => Err(AgentError::NotAPlayer(self.id)),
        }
    }

    /// Stuns an enemy for its configured duration, resetting any running stun.
    ///
    /// # Errors
    ///
    /// [`AgentError::NotAnEnemy`] for the player.
    pub fn stun(&mut self) -> Result<(), AgentError> {
        match &mut self.kind {
            AgentKind::Enemy(extra) => {
                extra.stun.stun(extra.stun_duration);
                Ok(())
            }
            AgentKind::Player(_) => Err(AgentError::NotAnEnemy(self.id)),
        }
    }

    /// Pays for the player's ability and returns where to release it.
    ///
    /// # Errors
    ///
    /// [`AgentError::Ability`] when fuel is short (the tank is left as is),
    /// [`AgentError::NotAPlayer`] for enemies.
    pub fn use_ability(&mut self) -> Result<Vec3, AgentError> {
        match &mut self.kind {
            AgentKind::Player(extra) => {
                extra.fuel.try_spend(extra.ability_cost)?;
                Ok(self.motion.position())
            }
            AgentKind::Enemy(_) => Err(AgentError::NotAPlayer(self.id)),
        }
    }

    /// Runs one frame.
    ///
    /// Enemies first advance their stun countdown and skip motion while
    /// stunned. The player burns fuel after moving whenever its heading is
    /// non-zero.
    ///
    /// # Errors
    ///
    /// Fails only when an arrival needs an oracle missing from `env`.
    pub fn tick(
        &mut self,
        env: &GameEnv<'_>,
        grid: &GridSpec,
        dt: f32,
    ) -> Result<TickOutcome, OracleError> {
        let Agent {
            id,
            motion,
            half_extent,
            kind,
        } = self;

        let step = match kind {
            AgentKind::Enemy(extra) => {
                match extra.stun.tick(dt) {
                    StunTick::Stunned { remaining } => return Ok(TickOutcome::Stunned { remaining }),
                    StunTick::Recovered => return Ok(TickOutcome::Recovered),
                    StunTick::Active => {}
                }
                motion.tick(grid, dt, |motion| {
                    let probe = MoveProbe::new(
                        env.obstruction()?,
                        *id,
                        *half_extent,
                        motion.position(),
                        grid,
                    );
                    let reference = env.reference()?.player_reference_position();
                    let decision = choose_direction(&probe, reference, motion.heading());
                    Ok::<_, OracleError>((decision.heading, Decision::Pursuit(decision.tier)))
                })?
            }
            AgentKind::Player(extra) => {
                let step = motion.tick(grid, dt, |motion| {
                    let probe = MoveProbe::new(
                        env.obstruction()?,
                        *id,
                        *half_extent,
                        motion.position(),
                        grid,
                    );
                    let (heading, turn) = extra.intent.resolve(motion.heading(), &probe);
                    Ok::<_, OracleError>((heading, Decision::Intent(turn)))
                })?;
                if motion.heading().is_some() {
                    extra.fuel.burn(extra.burn_rate * dt);
                }
                step
            }
        };

        Ok(match step {
            MotionStep::Traveled { distance } => TickOutcome::Traveled { distance },
            MotionStep::Arrived {
                heading,
                target,
                decision,
            } => TickOutcome::Arrived {
                heading,
                target,
                decision,
            },
        })
    }
}
