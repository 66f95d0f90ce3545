//! Score and win/lose bookkeeping.
use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    Running,
    Victory,
    GameOver,
}

/// Score, flag counts and the session outcome.
///
/// Once the outcome leaves [`Outcome::Running`] it never changes again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMode {
    score: u32,
    total_flags: usize,
    collected_flags: usize,
    outcome: Outcome,
}

impl GameMode {
    pub fn new(total_flags: usize) -> Self {
        Self {
            score: 0,
            total_flags,
            collected_flags: 0,
            outcome: Outcome::Running,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_flags(&self) -> usize {
        self.total_flags
    }

    pub fn collected_flags(&self) -> usize {
        self.collected_flags
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome != Outcome::Running
    }

    pub fn add_score(&mut self, amount: u32) {
        self.score = self.score.saturating_add(amount);
    }

    /// Counts a collected flag worth `points`. Returns true when this flag
    /// wins the game.
    pub fn flag_collected(&mut self, points: u32) -> bool {
        self.collected_flags += 1;
        self.add_score(points);
        self.check_win_condition()
    }

    fn check_win_condition(&mut self) -> bool {
        if self.total_flags > 0 && self.collected_flags >= self.total_flags {
            self.finish(Outcome::Victory)
        } else {
            false
        }
    }

    /// Returns false when the session had already finished.
    pub fn game_over(&mut self) -> bool {
        self.finish(Outcome::GameOver)
    }

    fn finish(&mut self, outcome: Outcome) -> bool {
        if self.is_finished() {
            return false;
        }
        self.outcome = outcome;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_flag_wins() {
        let mut mode = GameMode::new(2);
        assert!(!mode.flag_collected(100));
        assert!(mode.flag_collected(100));
        assert_eq!(mode.outcome(), Outcome::Victory);
        assert_eq!(mode.score(), 200);
        assert!(!mode.game_over());
        assert_eq!(mode.outcome(), Outcome::Victory);
    }

    #[test]
    fn map_without_flags_is_never_won() {
        let mut mode = GameMode::new(0);
        mode.add_score(5);
        assert_eq!(mode.outcome(), Outcome::Running);
        assert!(mode.game_over());
        assert_eq!(mode.outcome().as_ref(), "game_over");
    }
}
