//! Grid-constrained continuous motion.
//!
//! An agent always travels in a straight line toward a lattice-aligned
//! target. While the target is further than the arrival epsilon the agent
//! advances at constant speed; once inside it, the position is snapped onto
//! the target and the agent-specific decision picks the next cell.
mod probe;

pub use probe::MoveProbe;

use glam::Vec3;

use crate::state::{CardinalDirection, Heading, heading_vector};

/// Lattice parameters shared by every agent and the map.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    pub cell_size: f32,
    /// Squared distance at or below which an agent has arrived.
    pub arrival_epsilon_sq: f32,
}

impl GridSpec {
    pub const fn new(cell_size: f32, arrival_epsilon_sq: f32) -> Self {
        Self {
            cell_size,
            arrival_epsilon_sq,
        }
    }

    /// World offset of one cell step in `direction`.
    pub fn step(&self, direction: CardinalDirection) -> Vec3 {
        direction.unit() * self.cell_size
    }

    /// Whether `point` sits on the lattice anchored at `origin`.
    pub fn is_lattice_point(&self, origin: Vec3, point: Vec3) -> bool {
        let cells = (point - origin) / self.cell_size;
        cells.x.fract() == 0.0 && cells.y.fract() == 0.0 && point.z == origin.z
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionPhase {
    Traveling,
    Arrived,
}

/// Result of one controller tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionStep<T> {
    /// Moved `distance` toward the unchanged target.
    Traveled { distance: f32 },
    /// Snapped onto the old target and committed `heading`.
    Arrived { heading: Heading, target: Vec3, decision: T },
}

/// Position, target and heading of one agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMotion {
    position: Vec3,
    target: Vec3,
    heading: Heading,
    facing: Heading,
    speed: f32,
}

impl GridMotion {
    /// Agent resting at `spawn`; its first tick is an arrival.
    pub fn new(spawn: Vec3, speed: f32, heading: Heading) -> Self {
        Self {
            position: spawn,
            target: spawn,
            heading,
            facing: heading,
            speed,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Last direction a target was committed in, for orienting a mesh.
    pub fn facing(&self) -> Heading {
        self.facing
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn phase(&self, grid: &GridSpec) -> MotionPhase {
        if self.position.distance_squared(self.target) <= grid.arrival_epsilon_sq {
            MotionPhase::Arrived
        } else {
            MotionPhase::Traveling
        }
    }

    /// Moves toward the target by at most `speed * dt`, never past it.
    ///
    /// Returns the distance covered.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let max_step = self.speed * dt;
        if !(max_step > 0.0) {
            return 0.0;
        }
        let delta = self.target - self.position;
        let remaining = delta.length();
        if remaining <= max_step {
            self.position = self.target;
            remaining
        } else {
            self.position += delta / remaining * max_step;
            max_step
        }
    }

    /// Removes the residual error left inside the arrival epsilon.
    pub fn snap(&mut self) {
        self.position = self.target;
    }

    /// Sets the heading and, when moving, extends the target by one cell.
    pub fn commit(&mut self, heading: Heading, grid: &GridSpec) {
        self.heading = heading;
        if let Some(direction) = heading {
            self.target += grid.step(direction);
            self.facing = heading;
        }
    }

    /// Advances one frame.
    ///
    /// While traveling the agent moves and `decide` is not called. On arrival
    /// the position is snapped and `decide` picks the heading to commit.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `decide`; the agent is left snapped
    /// with its previous heading.
    pub fn tick<T, E>(
        &mut self,
        grid: &GridSpec,
        dt: f32,
        decide: impl FnOnce(&Self) -> Result<(Heading, T), E>,
    ) -> Result<MotionStep<T>, E> {
        match self.phase(grid) {
            MotionPhase::Traveling => Ok(MotionStep::Traveled {
                distance: self.advance(dt),
            }),
            MotionPhase::Arrived => {
                self.snap();
                let (heading, decision) = decide(self)?;
                self.commit(heading, grid);
                Ok(MotionStep::Arrived {
                    heading,
                    target: self.target,
                    decision,
                })
            }
        }
    }

    /// Current velocity implied by the heading.
    pub fn velocity(&self) -> Vec3 {
        heading_vector(self.heading) * self.speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    const GRID: GridSpec = GridSpec::new(100.0, 10.0);

    fn always(heading: Heading) -> impl FnOnce(&GridMotion) -> Result<(Heading, ()), Infallible> {
        move |_| Ok((heading, ()))
    }

    #[test]
    fn first_tick_at_spawn_is_an_arrival() {
        let mut motion = GridMotion::new(Vec3::ZERO, 300.0, None);
        let step = motion
            .tick(&GRID, 0.016, always(Some(CardinalDirection::East)))
            .unwrap();
        assert_eq!(
            step,
            MotionStep::Arrived {
                heading: Some(CardinalDirection::East),
                target: Vec3::new(100.0, 0.0, 0.0),
                decision: ()
            }
        );
        assert_eq!(motion.position(), Vec3::ZERO);
        assert_eq!(motion.facing(), Some(CardinalDirection::East));
    }

    #[test]
    fn step_is_clamped_to_the_target() {
        let mut motion = GridMotion::new(Vec3::ZERO, 300.0, None);
        motion.commit(Some(CardinalDirection::North), &GRID);

        assert_eq!(motion.advance(0.1), 30.0);
        assert_eq!(motion.position(), Vec3::new(0.0, 30.0, 0.0));
        assert_eq!(motion.advance(1.0), 70.0);
        assert_eq!(motion.position(), motion.target());
        assert_eq!(motion.advance(1.0), 0.0);
    }

    #[test]
    fn non_positive_dt_does_not_move() {
        let mut motion = GridMotion::new(Vec3::ZERO, 300.0, None);
        motion.commit(Some(CardinalDirection::West), &GRID);
        assert_eq!(motion.advance(0.0), 0.0);
        assert_eq!(motion.advance(-1.0), 0.0);
        assert_eq!(motion.position(), Vec3::ZERO);
    }

    #[test]
    fn arrival_snaps_residual_error_exactly() {
        let mut motion = GridMotion::new(Vec3::ZERO, 300.0, None);
        motion.commit(Some(CardinalDirection::East), &GRID);
        motion.position = Vec3::new(98.5, 0.25, 0.0);
        assert_eq!(motion.phase(&GRID), MotionPhase::Arrived);

        motion.tick(&GRID, 0.016, always(None)).unwrap();
        assert_eq!(motion.position(), Vec3::new(100.0, 0.0, 0.0));
        assert_eq!(motion.target(), motion.position());
        assert_eq!(motion.heading(), None);
        assert_eq!(motion.facing(), Some(CardinalDirection::East));
    }

    #[test]
    fn zero_heading_holds_position() {
        let mut motion = GridMotion::new(Vec3::new(100.0, 100.0, 50.0), 200.0, None);
        for _ in 0..10 {
            motion.tick(&GRID, 0.05, always(None)).unwrap();
        }
        assert_eq!(motion.position(), Vec3::new(100.0, 100.0, 50.0));
        assert_eq!(motion.velocity(), Vec3::ZERO);
    }

    #[test]
    fn targets_stay_on_the_lattice_over_many_arrivals() {
        let spawn = Vec3::new(100.0, 100.0, 50.0);
        let mut motion = GridMotion::new(spawn, 300.0, None);
        let pattern = [
            CardinalDirection::East,
            CardinalDirection::North,
            CardinalDirection::East,
            CardinalDirection::South,
            CardinalDirection::West,
        ];
        let mut arrivals = 0;
        let mut frame = 0usize;
        while arrivals < 200 {
            let heading = Some(pattern[arrivals % pattern.len()]);
            let before = motion.position();
            match motion.tick(&GRID, 1.0 / 60.0 + (frame % 7) as f32 * 1.0e-3, always(heading)) {
                Ok(MotionStep::Arrived { target, .. }) => {
                    arrivals += 1;
                    assert!(GRID.is_lattice_point(spawn, target), "{target} drifted");
                    assert!(GRID.is_lattice_point(spawn, motion.position()));
                }
                Ok(MotionStep::Traveled { distance }) => {
                    let moved = motion.position() - before;
                    assert!(distance <= motion.speed() * 0.023 + 1.0e-3);
                    let axes = [moved.x, moved.y, moved.z]
                        .iter()
                        .filter(|c| **c != 0.0)
                        .count();
                    assert!(axes <= 1, "diagonal step {moved}");
                }
                Err(never) => match never {},
            }
            frame += 1;
        }
    }
}
