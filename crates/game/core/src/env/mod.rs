//! Traits describing read-only world services.
//!
//! Oracles expose static obstruction geometry and the pursuit reference point.
//! The [`Env`] aggregate bundles them so agents can query everything they need
//! without hard coupling to concrete implementations or global state.
mod error;
mod layout;
mod obstruction;
mod reference;

pub use error::OracleError;
pub use layout::{CellPos, LayoutError, MapLayout};
pub use obstruction::{ObstructionOracle, StaticGeometry, SweepQuery};
pub use reference::{FixedReference, ReferenceProvider};

/// Aggregates read-only oracles required by the agent tick.
pub struct Env<'a, O, R>
where
    O: ObstructionOracle + ?Sized,
    R: ReferenceProvider + ?Sized,
{
    obstruction: Option<&'a O>,
    reference: Option<&'a R>,
}

impl<O, R> Clone for Env<'_, O, R>
where
    O: ObstructionOracle + ?Sized,
    R: ReferenceProvider + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, R> Copy for Env<'_, O, R>
where
    O: ObstructionOracle + ?Sized,
    R: ReferenceProvider + ?Sized,
{
}

pub type GameEnv<'a> = Env<'a, dyn ObstructionOracle + 'a, dyn ReferenceProvider + 'a>;

impl<'a, O, R> Env<'a, O, R>
where
    O: ObstructionOracle + ?Sized,
    R: ReferenceProvider + ?Sized,
{
    pub fn new(obstruction: Option<&'a O>, reference: Option<&'a R>) -> Self {
        Self {
            obstruction,
            reference,
        }
    }

    pub fn with_all(obstruction: &'a O, reference: &'a R) -> Self {
        Self::new(Some(obstruction), Some(reference))
    }

    pub fn empty() -> Self {
        Self {
            obstruction: None,
            reference: None,
        }
    }

    /// Returns the ObstructionOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ObstructionNotAvailable` if no obstruction oracle was provided.
    pub fn obstruction(&self) -> Result<&'a O, OracleError> {
        self.obstruction.ok_or(OracleError::ObstructionNotAvailable)
    }

    /// Returns the ReferenceProvider, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ReferenceNotAvailable` if no reference provider was provided.
    pub fn reference(&self) -> Result<&'a R, OracleError> {
        self.reference.ok_or(OracleError::ReferenceNotAvailable)
    }
}

impl<'a, O, R> Env<'a, O, R>
where
    O: ObstructionOracle + 'a,
    R: ReferenceProvider + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn into_game_env(self) -> GameEnv<'a> {
        let obstruction: Option<&'a dyn ObstructionOracle> = self.obstruction.map(|o| o as _);
        let reference: Option<&'a dyn ReferenceProvider> = self.reference.map(|r| r as _);
        Env::new(obstruction, reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn missing_oracles_surface_as_errors() {
        let env: GameEnv<'_> = Env::empty();
        assert_eq!(
            env.obstruction().err(),
            Some(OracleError::ObstructionNotAvailable)
        );
        assert_eq!(
            env.reference().err(),
            Some(OracleError::ReferenceNotAvailable)
        );
    }

    #[test]
    fn converts_to_game_env() {
        let geometry = StaticGeometry::default();
        let reference = FixedReference::at(Vec3::new(1.0, 2.0, 0.0));
        let env = Env::with_all(&geometry, &reference).into_game_env();
        assert_eq!(
            env.reference().map(|r| r.player_reference_position()),
            Ok(Some(Vec3::new(1.0, 2.0, 0.0)))
        );
        assert!(env.obstruction().is_ok());
    }
}
