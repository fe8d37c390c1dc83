//! Application Surface
//!
//! The outward-facing layer a presentation toolkit talks to. All game
//! logic runs through `game/`; this layer only routes events and gates
//! actions on the round phase.

pub mod controller;

pub use controller::{ControlError, GameController};
