//! Round Events
//!
//! Events emitted by the round engine for the presentation collaborator:
//! everything a renderer needs to repaint cells, update the countdown
//! label, and announce the outcome.

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::game::state::{EndCause, PlayerId};

/// An observable change in the round.
///
/// Events come out of `start`/`tick`/`apply_move` in the order the
/// mutations happened; the single-threaded event model means they never
/// interleave across calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A round entered `Running` with freshly drawn spawn cells.
    RoundStarted {
        /// Spawn cell of each player, indexed by [`PlayerId::index`]
        positions: [Coord; 2],
    },

    /// The countdown lost a second.
    CountdownUpdated {
        /// Whole seconds remaining
        seconds_left: u32,
    },

    /// A player stepped onto a cell and now owns it.
    CellCaptured {
        /// Who captured
        player: PlayerId,
        /// The captured cell
        cell: Coord,
    },

    /// The round reached its terminal phase.
    RoundEnded {
        /// What ended it
        cause: EndCause,
        /// `None` is a draw
        winner: Option<PlayerId>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization_round_trip() {
        let events = vec![
            RoundEvent::RoundStarted {
                positions: [Coord::new(0, 0), Coord::new(2, 2)],
            },
            RoundEvent::CountdownUpdated { seconds_left: 4 },
            RoundEvent::CellCaptured {
                player: PlayerId::One,
                cell: Coord::new(1, 0),
            },
            RoundEvent::RoundEnded {
                cause: EndCause::Collision,
                winner: None,
            },
        ];

        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let back: RoundEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(back, event);
        }
    }
}
