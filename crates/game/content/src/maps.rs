//! Built-in ASCII maps.
use chase_core::{LayoutError, MapLayout};

/// Small arena with a central pillar block and two pursuers.
pub const ARENA: &str = "
###########
#P....#..F#
#.##.....##
#.#F..#...#
#....###..#
#.#F......#
#...#..#.E#
#F.....#..#
#.#..E....#
###########
";

/// Straight corridor; handy for watching a single chase.
pub const CORRIDOR: &str = "
##########
#P......E#
##########
";

/// Looks up a built-in map by name.
pub fn builtin(name: &str) -> Option<&'static str> {
    match name {
        "arena" => Some(ARENA),
        "corridor" => Some(CORRIDOR),
        _ => None,
    }
}

pub fn arena() -> Result<MapLayout, LayoutError> {
    MapLayout::from_ascii(ARENA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_parse() {
        for name in ["arena", "corridor"] {
            let text = builtin(name).unwrap();
            let layout = MapLayout::from_ascii(text).unwrap();
            assert!(layout.player_spawn.is_some(), "{name} has no player");
            assert!(!layout.enemy_spawns.is_empty(), "{name} has no enemies");
        }
        let arena = arena().unwrap();
        assert_eq!((arena.width, arena.height), (11, 10));
        assert_eq!(arena.flags.len(), 4);
        assert_eq!(builtin("maze"), None);
    }
}
