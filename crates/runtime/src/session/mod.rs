//! One game: the player, the enemies chasing it and the actors around them.
//!
//! [`Session::tick`] advances a frame in a fixed order: the player moves, smoke
//! clouds age, each enemy moves toward the player's new position, and finally
//! the overlap pass turns contacts into stuns, collected flags and game over.
mod actors;
mod events;
mod game_mode;

pub use actors::{Flag, Smoke};
pub use events::GameEvent;
pub use game_mode::{GameMode, Outcome};

use std::collections::HashSet;
use std::sync::Arc;

use chase_core::{
    Aabb, Agent, CardinalDirection, Decision, EntityId, FixedReference, GameConfig, GridSpec,
    Heading, MapLayout, OverlapSink, PursuitTier, TickOutcome, check_overlaps,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info, trace, warn};

use crate::error::{Result, SessionError};
use crate::oracle::{ActorIndex, MapOracleImpl, OracleManager};

/// Snapshot of a session for UIs and logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub frame: u64,
    pub elapsed: f32,
    pub outcome: Outcome,
    pub score: u32,
    pub flags_collected: usize,
    pub flags_total: usize,
    pub fuel: f32,
    pub stunned_enemies: usize,
    pub digest: String,
}

pub struct Session {
    config: GameConfig,
    grid: GridSpec,
    oracles: OracleManager,
    player: Agent,
    enemies: Vec<Agent>,
    flags: Vec<Flag>,
    smokes: Vec<Smoke>,
    mode: GameMode,
    /// (enemy, smoke) pairs overlapping after the previous frame.
    in_smoke: HashSet<(EntityId, EntityId)>,
    elapsed: f32,
    frame: u64,
    next_id: u32,
}

impl Session {
    /// Spawns every actor of `layout`.
    ///
    /// # Errors
    ///
    /// Rejects an invalid `config` and layouts without a player spawn.
    pub fn new(layout: MapLayout, config: GameConfig) -> Result<Self> {
        config.validate()?;
        let player_cell = layout.player_spawn.ok_or(SessionError::MissingPlayerSpawn)?;
        let cell_size = config.cell_size;

        let player = Agent::player(
            EntityId::PLAYER,
            MapLayout::cell_center(player_cell, cell_size),
            &config,
        );
        let mut next_id = EntityId::PLAYER.0 + 1;
        let mut allocate = || {
            let id = EntityId(next_id);
            next_id += 1;
            id
        };
        let enemies = layout
            .enemy_spawns
            .iter()
            .map(|&cell| Agent::enemy(allocate(), MapLayout::cell_center(cell, cell_size), &config))
            .collect::<Vec<_>>();
        let flags = layout
            .flags
            .iter()
            .map(|&cell| Flag {
                id: allocate(),
                cell,
                position: MapLayout::cell_center(cell, cell_size),
                radius: config.flag_radius,
            })
            .collect::<Vec<_>>();

        info!(
            width = layout.width,
            height = layout.height,
            enemies = enemies.len(),
            flags = flags.len(),
            "Session started"
        );

        Ok(Self {
            grid: config.grid(),
            oracles: OracleManager::new(Arc::new(MapOracleImpl::new(layout, cell_size))),
            mode: GameMode::new(flags.len()),
            config,
            player,
            enemies,
            flags,
            smokes: Vec::new(),
            in_smoke: HashSet::new(),
            elapsed: 0.0,
            frame: 0,
            next_id,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &MapLayout {
        self.oracles.map().layout()
    }

    pub fn player(&self) -> &Agent {
        &self.player
    }

    pub fn enemies(&self) -> &[Agent] {
        &self.enemies
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn smokes(&self) -> &[Smoke] {
        &self.smokes
    }

    pub fn mode(&self) -> &GameMode {
        &self.mode
    }

    pub fn is_finished(&self) -> bool {
        self.mode.is_finished()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Latches the player's next direction.
    pub fn set_direction(&mut self, direction: CardinalDirection) -> Result<()> {
        if self.mode.is_finished() {
            return Err(SessionError::Finished);
        }
        self.player.set_direction(direction)?;
        debug!(%direction, "Direction queued");
        Ok(())
    }

    /// Releases a smoke cloud at the player's position if fuel allows.
    ///
    /// # Errors
    ///
    /// [`SessionError::Agent`] wrapping the refusal when fuel is short; the
    /// fuel level is left unchanged.
    pub fn use_ability(&mut self) -> Result<GameEvent> {
        if self.mode.is_finished() {
            return Err(SessionError::Finished);
        }
        let position = match self.player.use_ability() {
            Ok(position) => position,
            Err(err) => {
                warn!(error = %err, "Smoke refused");
                return Err(err.into());
            }
        };
        let smoke = Smoke {
            id: self.allocate_id(),
            bounds: Aabb::cube(position, self.config.smoke_half_extent),
            remaining: self.config.smoke_lifespan,
        };
        self.smokes.push(smoke);
        let fuel_left = self.fuel();
        info!(smoke = %smoke.id, fuel_left, "Smoke released");
        Ok(GameEvent::SmokeReleased {
            smoke: smoke.id,
            position,
            fuel_left,
        })
    }

    /// Advances the session by `dt` seconds and returns the events raised.
    ///
    /// A finished session ignores ticks.
    ///
    /// # Errors
    ///
    /// Only wiring failures surface here; gameplay never fails a tick.
    pub fn tick(&mut self, dt: f32) -> Result<Vec<GameEvent>> {
        let mut events = Vec::new();
        if self.mode.is_finished() {
            return Ok(events);
        }
        self.frame += 1;
        self.elapsed += dt;

        let untracked = FixedReference::none();
        let env = self.oracles.as_game_env(&untracked);
        let outcome = self.player.tick(&env, &self.grid, dt)?;
        log_outcome(self.player.id(), &outcome);

        self.age_smokes(dt, &mut events);

        let reference = FixedReference::at(self.player.position());
        let env = self.oracles.as_game_env(&reference);
        for enemy in &mut self.enemies {
            let outcome = enemy.tick(&env, &self.grid, dt)?;
            log_outcome(enemy.id(), &outcome);
            if outcome == TickOutcome::Recovered {
                events.push(GameEvent::EnemyRecovered { enemy: enemy.id() });
            }
        }

        self.resolve_overlaps(&mut events)?;
        Ok(events)
    }

    fn age_smokes(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        self.smokes.retain_mut(|smoke| {
            if smoke.age(dt) {
                debug!(smoke = %smoke.id, "Smoke expired");
                events.push(GameEvent::SmokeExpired { smoke: smoke.id });
                false
            } else {
                true
            }
        });
    }

    /// Applies contacts in order: stuns, then flags, then catches. A stun
    /// landing this frame protects the player from that enemy.
    fn resolve_overlaps(&mut self, events: &mut Vec<GameEvent>) -> Result<()> {
        let mut index = ActorIndex::new().with_player(self.player.id(), self.player.bounds());
        for flag in &self.flags {
            index.push_collectible(flag.volume());
        }
        for smoke in &self.smokes {
            index.push_hazard(smoke.id, smoke.bounds);
        }

        let mut contacts = Contacts::default();
        check_overlaps(&self.player, &index, &mut contacts);
        for enemy in &self.enemies {
            check_overlaps(enemy, &index, &mut contacts);
        }

        let touching: HashSet<_> = contacts.hazards.iter().copied().collect();
        for &(enemy_id, smoke) in &contacts.hazards {
            if self.in_smoke.contains(&(enemy_id, smoke)) {
                continue;
            }
            if let Some(enemy) = self.enemies.iter_mut().find(|enemy| enemy.id() == enemy_id) {
                enemy.stun()?;
                info!(enemy = %enemy_id, smoke = %smoke, "Enemy stunned");
                events.push(GameEvent::EnemyStunned {
                    enemy: enemy_id,
                    smoke,
                });
            }
        }
        self.in_smoke = touching;

        for flag_id in contacts.collected {
            let Some(slot) = self.flags.iter().position(|flag| flag.id == flag_id) else {
                continue;
            };
            let flag = self.flags.remove(slot);
            let won = self.mode.flag_collected(self.config.flag_score);
            info!(
                flag = %flag.id,
                score = self.mode.score(),
                remaining = self.flags.len(),
                "Flag collected"
            );
            events.push(GameEvent::FlagCollected {
                flag: flag.id,
                score: self.mode.score(),
                remaining: self.flags.len(),
            });
            if won {
                info!(score = self.mode.score(), "Victory");
                events.push(GameEvent::Victory {
                    score: self.mode.score(),
                });
                return Ok(());
            }
        }

        if contacts.caught.is_empty() {
            return Ok(());
        }
        if self.elapsed < self.config.grace_period {
            debug!(elapsed = self.elapsed, "Catch ignored during grace period");
            return Ok(());
        }
        for enemy_id in contacts.caught {
            let active = self
                .enemies
                .iter()
                .any(|enemy| enemy.id() == enemy_id && !enemy.is_stunned());
            if active && self.mode.game_over() {
                info!(enemy = %enemy_id, score = self.mode.score(), "Game over");
                events.push(GameEvent::PlayerCaught { enemy: enemy_id });
                break;
            }
        }
        Ok(())
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    fn fuel(&self) -> f32 {
        self.player.fuel().map_or(0.0, |fuel| fuel.current())
    }

    /// SHA-256 over the simulation state, hex encoded.
    ///
    /// Two sessions built from the same layout and fed the same inputs and
    /// frame times produce the same digest.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.frame.to_le_bytes());
        for agent in std::iter::once(&self.player).chain(&self.enemies) {
            hasher.update(agent.id().0.to_le_bytes());
            for v in [agent.position(), agent.motion().target()] {
                for c in v.to_array() {
                    hasher.update(c.to_bits().to_le_bytes());
                }
            }
            hasher.update([heading_code(agent.heading())]);
            let stun = agent.stun_state().map_or(0.0, |stun| stun.remaining());
            hasher.update(stun.to_bits().to_le_bytes());
        }
        hasher.update(self.fuel().to_bits().to_le_bytes());
        for flag in &self.flags {
            hasher.update(flag.id.0.to_le_bytes());
        }
        for smoke in &self.smokes {
            hasher.update(smoke.id.0.to_le_bytes());
            hasher.update(smoke.remaining.to_bits().to_le_bytes());
        }
        hasher.update(self.mode.score().to_le_bytes());
        hasher.update(self.mode.outcome().as_ref().as_bytes());
        hex::encode(hasher.finalize())
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            frame: self.frame,
            elapsed: self.elapsed,
            outcome: self.mode.outcome(),
            score: self.mode.score(),
            flags_collected: self.mode.collected_flags(),
            flags_total: self.mode.total_flags(),
            fuel: self.fuel(),
            stunned_enemies: self.enemies.iter().filter(|enemy| enemy.is_stunned()).count(),
            digest: self.digest(),
        }
    }
}

/// Overlap notifications gathered during one pass.
#[derive(Default)]
struct Contacts {
    caught: Vec<EntityId>,
    collected: Vec<EntityId>,
    hazards: Vec<(EntityId, EntityId)>,
}

impl OverlapSink for Contacts {
    fn collision_with_player(&mut self, enemy: EntityId) {
        self.caught.push(enemy);
    }

    fn collectible_touched(&mut self, _player: EntityId, collectible: EntityId) {
        self.collected.push(collectible);
    }

    fn hazard_touched(&mut self, enemy: EntityId, hazard: EntityId) {
        self.hazards.push((enemy, hazard));
    }
}

fn heading_code(heading: Heading) -> u8 {
    match heading {
        None => 0,
        Some(CardinalDirection::North) => 1,
        Some(CardinalDirection::South) => 2,
        Some(CardinalDirection::East) => 3,
        Some(CardinalDirection::West) => 4,
    }
}

fn log_outcome(agent: EntityId, outcome: &TickOutcome) {
    match outcome {
        TickOutcome::Arrived {
            heading,
            target,
            decision: Decision::Pursuit(PursuitTier::Reversed),
        } => warn!(%agent, ?heading, ?target, "Every step blocked, reversing"),
        TickOutcome::Arrived {
            decision: Decision::Pursuit(PursuitTier::Untracked),
            ..
        } => warn!(%agent, "No pursuit reference, keeping heading"),
        TickOutcome::Arrived {
            heading,
            target,
            decision,
        } => debug!(%agent, ?heading, ?target, ?decision, "Arrived"),
        TickOutcome::Traveled { distance } => trace!(%agent, distance, "Traveled"),
        TickOutcome::Stunned { remaining } => trace!(%agent, remaining, "Stunned"),
        TickOutcome::Recovered => info!(%agent, "Enemy recovered"),
    }
}
