//! Scripted input for headless runs.
//!
//! A script is a string of single-character commands. Whitespace is ignored
//! so long scripts can be wrapped.
//!
//! | Char | Command                        |
//! |------|--------------------------------|
//! | `U`  | steer +X (East)                |
//! | `D`  | steer −X (West)                |
//! | `L`  | steer −Y (South)               |
//! | `R`  | steer +Y (North)               |
//! | `S`  | release smoke                  |
//! | `.`  | do nothing this slot           |
//!
//! The directional letters follow the top-down camera binding, where "up" on
//! screen runs along the world X axis.
use chase_core::CardinalDirection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Steer(CardinalDirection),
    Smoke,
    Wait,
}

impl Command {
    pub fn from_char(glyph: char) -> Option<Self> {
        let command = match glyph.to_ascii_uppercase() {
            'U' => Self::Steer(CardinalDirection::East),
            'D' => Self::Steer(CardinalDirection::West),
            'L' => Self::Steer(CardinalDirection::South),
            'R' => Self::Steer(CardinalDirection::North),
            'S' => Self::Smoke,
            '.' => Self::Wait,
            _ => return None,
        };
        Some(command)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("unknown input command {glyph:?} at position {position}")]
    UnknownCommand { glyph: char, position: usize },
}

/// Parsed command sequence, consumed one slot every `every` frames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputScript {
    commands: Vec<Command>,
    every: u32,
}

impl InputScript {
    pub fn parse(text: &str, every: u32) -> Result<Self, ScriptError> {
        let commands = text
            .chars()
            .enumerate()
            .filter(|(_, glyph)| !glyph.is_whitespace())
            .map(|(position, glyph)| {
                Command::from_char(glyph).ok_or(ScriptError::UnknownCommand { glyph, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            commands,
            every: every.max(1),
        })
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Command scheduled for `frame`, if the frame starts a slot.
    pub fn at_frame(&self, frame: u64) -> Option<Command> {
        let every = u64::from(self.every);
        if frame % every != 0 {
            return None;
        }
        usize::try_from(frame / every)
            .ok()
            .and_then(|slot| self.commands.get(slot).copied())
    }
}
