use glam::Vec3;

/// Movement direction of an agent: one cardinal step or standing still.
///
/// Diagonals are unrepresentable.
pub type Heading = Option<CardinalDirection>;

/// World-space unit vector for a heading (zero when standing still).
pub fn heading_vector(heading: Heading) -> Vec3 {
    heading.map_or(Vec3::ZERO, CardinalDirection::unit)
}

/// Grid axis along which a cardinal direction moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const fn other(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Component of `v` along this axis.
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }
}

/// One of the four grid steps. North is +Y and East is +X.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    /// Order in which blocked enemies scan for any open step: +X, -X, +Y, -Y.
    pub const SCAN_ORDER: [CardinalDirection; 4] = [
        CardinalDirection::East,
        CardinalDirection::West,
        CardinalDirection::North,
        CardinalDirection::South,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, 1),
            CardinalDirection::South => (0, -1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }

    pub fn unit(self) -> Vec3 {
        let (dx, dy) = self.delta();
        Vec3::new(dx as f32, dy as f32, 0.0)
    }

    pub const fn opposite(self) -> Self {
        match self {
            CardinalDirection::North => CardinalDirection::South,
            CardinalDirection::South => CardinalDirection::North,
            CardinalDirection::East => CardinalDirection::West,
            CardinalDirection::West => CardinalDirection::East,
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            CardinalDirection::East | CardinalDirection::West => Axis::X,
            CardinalDirection::North | CardinalDirection::South => Axis::Y,
        }
    }

    /// Unit step along `axis` with the sign of `component`; `None` when the
    /// component is zero (or NaN).
    pub fn along(axis: Axis, component: f32) -> Option<Self> {
        let positive = match axis {
            Axis::X => CardinalDirection::East,
            Axis::Y => CardinalDirection::North,
        };
        if component > 0.0 {
            Some(positive)
        } else if component < 0.0 {
            Some(positive.opposite())
        } else {
            None
        }
    }
}
