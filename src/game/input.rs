//! Input Mapping
//!
//! Converts raw key symbols from the presentation layer into
//! `(player, direction)` move commands using a fixed binding table:
//! one key set per player, the two sets disjoint.

use serde::{Deserialize, Serialize};

use crate::game::state::PlayerId;

// =============================================================================
// DIRECTION
// =============================================================================

/// One of the four move directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward row 0 (the top of the drawn grid)
    Up,
    /// Toward the last row
    Down,
    /// Toward column 0
    Left,
    /// Toward the last column
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset `(dx, dy)` for this direction.
    ///
    /// `Up` decreases `y`: row 0 is the top of the drawn grid.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

// =============================================================================
// KEY BINDINGS
// =============================================================================

/// The fixed key-to-move table: WASD for player 1, IJKL for player 2.
const DEFAULT_BINDINGS: [(char, PlayerId, Direction); 8] = [
    ('w', PlayerId::One, Direction::Up),
    ('a', PlayerId::One, Direction::Left),
    ('s', PlayerId::One, Direction::Down),
    ('d', PlayerId::One, Direction::Right),
    ('i', PlayerId::Two, Direction::Up),
    ('j', PlayerId::Two, Direction::Left),
    ('k', PlayerId::Two, Direction::Down),
    ('l', PlayerId::Two, Direction::Right),
];

/// Key-symbol to move-command table.
///
/// The presentation layer feeds raw key symbols through [`resolve`];
/// unbound keys resolve to `None` and are ignored.
///
/// [`resolve`]: KeyBindings::resolve
#[derive(Clone, Debug)]
pub struct KeyBindings {
    bindings: [(char, PlayerId, Direction); 8],
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: DEFAULT_BINDINGS,
        }
    }
}

impl KeyBindings {
    /// Look up the move command bound to `key`, case-insensitively.
    pub fn resolve(&self, key: char) -> Option<(PlayerId, Direction)> {
        let key = key.to_ascii_lowercase();
        self.bindings
            .iter()
            .find(|(bound, _, _)| *bound == key)
            .map(|(_, player, direction)| (*player, *direction))
    }

    /// The keys bound to `player`, in `Up`/`Left`/`Down`/`Right` order.
    pub fn keys_for(&self, player: PlayerId) -> Vec<char> {
        self.bindings
            .iter()
            .filter(|(_, bound_player, _)| *bound_player == player)
            .map(|(key, _, _)| *key)
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deltas() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_default_bindings_resolve() {
        let bindings = KeyBindings::default();

        assert_eq!(bindings.resolve('w'), Some((PlayerId::One, Direction::Up)));
        assert_eq!(bindings.resolve('d'), Some((PlayerId::One, Direction::Right)));
        assert_eq!(bindings.resolve('i'), Some((PlayerId::Two, Direction::Up)));
        assert_eq!(bindings.resolve('l'), Some((PlayerId::Two, Direction::Right)));
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.resolve('W'), Some((PlayerId::One, Direction::Up)));
        assert_eq!(bindings.resolve('K'), Some((PlayerId::Two, Direction::Down)));
    }

    #[test]
    fn test_unbound_keys_resolve_to_none() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.resolve('q'), None);
        assert_eq!(bindings.resolve('1'), None);
        assert_eq!(bindings.resolve(' '), None);
    }

    #[test]
    fn test_player_key_sets_are_disjoint() {
        let bindings = KeyBindings::default();
        let p1 = bindings.keys_for(PlayerId::One);
        let p2 = bindings.keys_for(PlayerId::Two);

        assert_eq!(p1.len(), 4);
        assert_eq!(p2.len(), 4);
        assert!(p1.iter().all(|key| !p2.contains(key)));
    }
}
