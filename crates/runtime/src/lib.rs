//! Runtime orchestration for the grid-chase simulation.
//!
//! This crate wires the pure `chase-core` rules to concrete world services
//! and drives whole games. Consumers build a [`Session`] from a map layout
//! (loaded or produced by [`MapGenerator`]) and call [`Session::tick`] once
//! per frame, feeding player input in between.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the per-frame loop, score keeping and events
//! - [`oracle`] adapts static map data and live actors to the core traits
//! - [`mapgen`] generates seeded random layouts
//! - [`config`] reads runtime settings from the environment
pub mod config;
pub mod error;
pub mod mapgen;
pub mod oracle;
pub mod session;

pub use config::RuntimeConfig;
pub use error::{MapGenError, Result, SessionError};
pub use mapgen::MapGenerator;
pub use oracle::{ActorIndex, FlagVolume, MapOracleImpl, OracleManager};
pub use session::{Flag, GameEvent, GameMode, Outcome, Session, SessionSummary, Smoke};
