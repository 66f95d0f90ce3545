//! Runtime wrappers around the world services the core queries.
//!
//! [`MapOracleImpl`] answers obstruction queries against the loaded layout and
//! [`ActorIndex`] is the overlap broad phase over flags, smoke and the player.
//! [`OracleManager`] bundles the immutable parts so a session can build a
//! [`chase_core::Env`] on every tick.
mod broadphase;
mod map;

use chase_core::{Env, FixedReference, GameEnv};
use std::sync::Arc;

pub use broadphase::{ActorIndex, FlagVolume};
pub use map::MapOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) map: Arc<MapOracleImpl>,
}

impl OracleManager {
    pub fn new(map: Arc<MapOracleImpl>) -> Self {
        Self { map }
    }

    /// Converts oracle manager into GameEnv for chase-core.
    ///
    /// The reference is captured by the caller once per frame.
    pub fn as_game_env<'a>(&'a self, reference: &'a FixedReference) -> GameEnv<'a> {
        Env::with_all(self.map.as_ref(), reference).into_game_env()
    }

    pub fn map(&self) -> &MapOracleImpl {
        &self.map
    }
}
