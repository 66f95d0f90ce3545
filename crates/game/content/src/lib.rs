//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Map layouts (data-driven via RON, or the ASCII grid format)
//! - Game configuration (data-driven via TOML)
//! - A small set of built-in maps for demos and tests
//!
//! All loaders use chase-core types directly with serde for RON/TOML deserialization.

pub mod maps;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, MapLoader};
