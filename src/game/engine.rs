//! Round Engine
//!
//! The round state machine: countdown-driven lifecycle, per-move
//! validation, ownership capture, and win tallying.
//!
//! The engine owns its map and round state exclusively while a round is
//! live. It consumes two kinds of external events, strictly one at a
//! time: a 1 Hz timer tick and discrete move commands. Each call runs to
//! completion before the next, so no two state mutations ever interleave.

use crate::core::rng::DeterministicRng;
use crate::game::events::RoundEvent;
use crate::game::input::Direction;
use crate::game::map::{CellState, GridMap, MapError};
use crate::game::state::{EndCause, Player, PlayerId, RoundPhase, RoundState};
use crate::{DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DEFAULT_ROUND_SECONDS};

/// Result of processing one tick or move.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated by this step
    pub events: Vec<RoundEvent>,
    /// Whether the round is over after this step
    pub round_ended: bool,
    /// Winner, once the round is over; `None` while running or on a draw
    pub winner: Option<PlayerId>,
}

/// Configuration for a round.
#[derive(Debug, Clone)]
pub struct RoundConfig {
    /// Round length in whole seconds
    pub round_seconds: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            round_seconds: DEFAULT_ROUND_SECONDS,
        }
    }
}

/// The round state machine.
///
/// Lifecycle: `NotStarted → Running → Ended`; `Ended` is terminal until
/// the next [`start`](Self::start), which re-seeds positions and
/// ownership on a fresh map. While not `Running`, both
/// [`tick`](Self::tick) and [`apply_move`](Self::apply_move) are
/// absorbed as no-ops.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    map: GridMap,
    players: [Player; 2],
    state: RoundState,
    rng: DeterministicRng,
}

impl RoundEngine {
    /// Create an engine with a default map and players, ready for
    /// [`start`](Self::start).
    ///
    /// The seed fixes spawn placement: same seed + same map + same moves
    /// replays the identical round.
    pub fn new(seed: u64) -> Self {
        Self {
            map: GridMap::new(DEFAULT_MAP_WIDTH, DEFAULT_MAP_HEIGHT),
            players: Player::default_pair(),
            state: RoundState::new(),
            rng: DeterministicRng::new(seed),
        }
    }

    /// The map as of the last mutation. Live ownership during a round;
    /// serializable mid-round through [`GridMap::to_text`].
    pub fn map(&self) -> &GridMap {
        &self.map
    }

    /// Current round state.
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Both player records.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The record for `id`.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Start a round on `map`, taking ownership of it.
    ///
    /// Clears any ownership left on the map (walls stay), draws two
    /// distinct spawn cells, marks them owned, and enters `Running` with
    /// a full countdown. Fails with [`MapError::NoOpenCell`] when the
    /// map cannot host two players; the engine keeps its previous map
    /// and state in that case.
    pub fn start(
        &mut self,
        map: GridMap,
        players: [Player; 2],
        round_seconds: u32,
    ) -> Result<TickResult, MapError> {
        let mut map = map;
        map.clear_ownership();

        let first = map.random_open_position(&mut self.rng, &[])?;
        let second = map.random_open_position(&mut self.rng, &[first])?;
        map.set(first, CellState::Owned(PlayerId::One))?;
        map.set(second, CellState::Owned(PlayerId::Two))?;

        self.map = map;
        self.players = players;
        self.state = RoundState {
            positions: [first, second],
            countdown: round_seconds,
            phase: RoundPhase::Running,
            end_cause: None,
            winner: None,
        };

        let mut result = TickResult::default();
        result.events.push(RoundEvent::RoundStarted {
            positions: [first, second],
        });
        Ok(result)
    }

    /// Advance the round clock by one second.
    ///
    /// The only source of time-based termination: once the countdown
    /// reaches zero (on this call or a prior one) the round finishes
    /// with [`EndCause::TimeExpired`]. Idempotent after the round ends.
    pub fn tick(&mut self) -> TickResult {
        if !self.state.is_running() {
            return self.settled_result();
        }

        let mut result = TickResult::default();
        if self.state.countdown > 0 {
            self.state.countdown -= 1;
            result.events.push(RoundEvent::CountdownUpdated {
                seconds_left: self.state.countdown,
            });
        }

        if self.state.countdown == 0 {
            self.finish(EndCause::TimeExpired, &mut result);
        }

        result
    }

    /// Apply one move command for `player`.
    ///
    /// Stepping off the grid or into a wall is absorbed silently: the
    /// player simply doesn't move. A step onto the opponent's cell is a
    /// collision: the round ends immediately and the overlapping cell is
    /// **not** credited as a capture. Any other step captures the
    /// destination cell. No-op while not `Running`.
    pub fn apply_move(&mut self, player: PlayerId, direction: Direction) -> TickResult {
        if !self.state.is_running() {
            return self.settled_result();
        }

        let mut result = TickResult::default();
        let (dx, dy) = direction.delta();
        let candidate = self.state.position_of(player).offset(dx, dy);

        let destination = match self.map.get(candidate) {
            Ok(state) => state,
            // Off-grid input is absorbed, not an error
            Err(_) => return result,
        };
        if destination.is_blocked() {
            return result;
        }

        self.state.set_position(player, candidate);

        if self.state.position_of(player.opponent()) == candidate {
            // The colliding step is not credited as a capture
            self.finish(EndCause::Collision, &mut result);
            return result;
        }

        if self.map.set(candidate, CellState::Owned(player)).is_ok() {
            result.events.push(RoundEvent::CellCaptured {
                player,
                cell: candidate,
            });
        }

        result
    }

    /// Result for a call that arrived while not `Running`: no events,
    /// just the settled outcome flags.
    fn settled_result(&self) -> TickResult {
        TickResult {
            events: Vec::new(),
            round_ended: self.state.is_ended(),
            winner: self.state.winner,
        }
    }

    /// Terminal transition. Idempotent; called by exactly one of
    /// `tick`/`apply_move` per round.
    fn finish(&mut self, cause: EndCause, result: &mut TickResult) {
        if self.state.is_ended() {
            return;
        }

        self.state.phase = RoundPhase::Ended;
        self.state.end_cause = Some(cause);

        // +1 per player-1 cell, -1 per player-2 cell; the sign picks the winner
        let tally = self.map.count_owned(PlayerId::One) as i64
            - self.map.count_owned(PlayerId::Two) as i64;
        self.state.winner = match tally.cmp(&0) {
            std::cmp::Ordering::Greater => Some(PlayerId::One),
            std::cmp::Ordering::Less => Some(PlayerId::Two),
            std::cmp::Ordering::Equal => None,
        };

        result.round_ended = true;
        result.winner = self.state.winner;
        result.events.push(RoundEvent::RoundEnded {
            cause,
            winner: self.state.winner,
        });
    }
}

// =============================================================================
// TESTS
// =============================================================================
