//! Round State Definitions
//!
//! All state types for round simulation: the two contenders, the round
//! phase machine, and the per-round mutable state.

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;

// =============================================================================
// PLAYER ID
// =============================================================================

/// One of the two contenders.
///
/// A closed enum rather than an open integer id: every API that takes a
/// `PlayerId` is total over both players, and per-player state lives in
/// two-element arrays indexed by [`PlayerId::index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PlayerId {
    /// Player 1 (file value `1`)
    One = 1,
    /// Player 2 (file value `2`)
    Two = 2,
}

impl PlayerId {
    /// Both players, in order.
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Stable array index: 0 for player 1, 1 for player 2.
    #[inline]
    pub const fn index(self) -> usize {
        (self as u8 - 1) as usize
    }

    /// The other contender.
    #[inline]
    pub const fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Integer used by the map file format (`1` or `2`).
    #[inline]
    pub const fn number(self) -> i32 {
        self as u8 as i32
    }

    /// Parse a file value back into a player id.
    pub fn from_number(value: i32) -> Option<PlayerId> {
        match value {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.number())
    }
}

// =============================================================================
// PLAYER
// =============================================================================

/// A contender record.
///
/// The display name is a label only; it has no behavioral effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Which contender this is.
    pub id: PlayerId,
    /// Label shown by the presentation layer.
    pub display_name: String,
}

impl Player {
    /// Create a player record.
    pub fn new(id: PlayerId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }

    /// The default pair, named "p1" and "p2".
    pub fn default_pair() -> [Player; 2] {
        [
            Player::new(PlayerId::One, "p1"),
            Player::new(PlayerId::Two, "p2"),
        ]
    }
}

// =============================================================================
// ROUND PHASE
// =============================================================================

/// Current phase of a round.
///
/// `Ended` is terminal; only a fresh `start` re-enters `Running`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round has been started yet
    #[default]
    NotStarted,
    /// Round in progress; moves and ticks are live
    Running,
    /// Round over; moves and ticks are absorbed as no-ops
    Ended,
}

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    /// The countdown reached zero
    TimeExpired,
    /// Both players landed on the same cell
    Collision,
}

// =============================================================================
// ROUND STATE
// =============================================================================

/// Mutable state of one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Current cell of each player, indexed by [`PlayerId::index`].
    ///
    /// Invariant while `Running`: both cells are `Owned` by their player
    /// and the two coordinates are distinct.
    pub positions: [Coord; 2],

    /// Remaining whole seconds; monotonically decreasing to zero.
    pub countdown: u32,

    /// Phase machine: `NotStarted → Running → Ended`.
    pub phase: RoundPhase,

    /// Set exactly once, when `phase` becomes `Ended`.
    pub end_cause: Option<EndCause>,

    /// `None` is a draw. Computed only at round end.
    pub winner: Option<PlayerId>,
}

impl RoundState {
    /// Fresh pre-round state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cell of `player`.
    #[inline]
    pub fn position_of(&self, player: PlayerId) -> Coord {
        self.positions[player.index()]
    }

    /// Move `player` to `coord`.
    #[inline]
    pub fn set_position(&mut self, player: PlayerId, coord: Coord) {
        self.positions[player.index()] = coord;
    }

    /// Is the round live?
    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }

    /// Has the round reached its terminal phase?
    #[inline]
    pub fn is_ended(&self) -> bool {
        self.phase == RoundPhase::Ended
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_index_and_number() {
        assert_eq!(PlayerId::One.index(), 0);
        assert_eq!(PlayerId::Two.index(), 1);
        assert_eq!(PlayerId::One.number(), 1);
        assert_eq!(PlayerId::Two.number(), 2);
    }

    #[test]
    fn test_player_id_opponent() {
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
        assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
    }

    #[test]
    fn test_player_id_from_number() {
        assert_eq!(PlayerId::from_number(1), Some(PlayerId::One));
        assert_eq!(PlayerId::from_number(2), Some(PlayerId::Two));
        assert_eq!(PlayerId::from_number(0), None);
        assert_eq!(PlayerId::from_number(-1), None);
        assert_eq!(PlayerId::from_number(3), None);
    }

    #[test]
    fn test_round_state_fresh() {
        let state = RoundState::new();
        assert_eq!(state.phase, RoundPhase::NotStarted);
        assert_eq!(state.end_cause, None);
        assert_eq!(state.winner, None);
        assert!(!state.is_running());
        assert!(!state.is_ended());
    }

    #[test]
    fn test_positions_indexed_by_player() {
        let mut state = RoundState::new();
        state.set_position(PlayerId::One, Coord::new(3, 1));
        state.set_position(PlayerId::Two, Coord::new(0, 5));

        assert_eq!(state.position_of(PlayerId::One), Coord::new(3, 1));
        assert_eq!(state.position_of(PlayerId::Two), Coord::new(0, 5));
    }
}
