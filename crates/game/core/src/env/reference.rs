use glam::Vec3;

/// Supplies the point enemies pursue.
pub trait ReferenceProvider: Send + Sync {
    /// Current position of the tracked player, or `None` when there is none.
    fn player_reference_position(&self) -> Option<Vec3>;
}

/// Reference captured once per frame by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedReference(pub Option<Vec3>);

impl FixedReference {
    pub fn at(position: Vec3) -> Self {
        Self(Some(position))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl ReferenceProvider for FixedReference {
    fn player_reference_position(&self) -> Option<Vec3> {
        self.0
    }
}
