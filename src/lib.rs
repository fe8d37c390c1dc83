//! # Grid Contender
//!
//! Two-player local grid-capture game core with a companion map editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     GRID CONTENDER                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── coord.rs    - Integer grid coordinates                  │
//! │  └── rng.rs      - Deterministic Xorshift128+ PRNG           │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── map.rs      - Grid map, cell states, text codec         │
//! │  ├── state.rs    - Players, round phase, round state         │
//! │  ├── input.rs    - Directions and key bindings               │
//! │  ├── engine.rs   - Round state machine (start/tick/move)     │
//! │  ├── editor.rs   - Map editor (toggle/clear/export/import)   │
//! │  └── events.rs   - Round events for the presentation layer   │
//! │                                                              │
//! │  app/            - Application surface (non-core)            │
//! │  └── controller.rs - Engine/editor pair behind the           │
//! │                      presentation capability interface       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! The `core/` and `game/` modules are **100% deterministic**:
//! - Single-threaded, event-driven; one `tick` or move runs at a time
//! - No system time dependencies (the round clock is the caller's 1 Hz tick)
//! - All randomness from seeded Xorshift128+
//!
//! Given the same map, seed, and input sequence, a round plays out
//! identically on any platform.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod app;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::coord::Coord;
pub use crate::core::rng::DeterministicRng;
pub use game::engine::{RoundConfig, RoundEngine, TickResult};
pub use game::events::RoundEvent;
pub use game::input::{Direction, KeyBindings};
pub use game::map::{CellState, GridMap, MapError};
pub use game::state::{EndCause, Player, PlayerId, RoundPhase, RoundState};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default map width in cells
pub const DEFAULT_MAP_WIDTH: u32 = 12;

/// Default map height in cells
pub const DEFAULT_MAP_HEIGHT: u32 = 12;

/// Default round length in whole seconds
pub const DEFAULT_ROUND_SECONDS: u32 = 5;
