//! Game Logic Module
//!
//! All game simulation code. 100% deterministic.
//!
//! ## Module Structure
//!
//! - `map`: Grid map, cell states, delimited text codec
//! - `state`: Players, round phase, round state
//! - `input`: Directions and the fixed key binding table
//! - `engine`: The round state machine (start/tick/move)
//! - `editor`: Wall-painting map editor
//! - `events`: Round events for the presentation layer

pub mod editor;
pub mod engine;
pub mod events;
pub mod input;
pub mod map;
pub mod state;

// Re-export key types
pub use editor::MapEditor;
pub use engine::{RoundConfig, RoundEngine, TickResult};
pub use events::RoundEvent;
pub use input::{Direction, KeyBindings};
pub use map::{CellState, GridMap, MapError};
pub use state::{EndCause, Player, PlayerId, RoundPhase, RoundState};
