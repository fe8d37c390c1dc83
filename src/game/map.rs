//! Grid Map
//!
//! The rectangular cell grid shared by the round engine and the map
//! editor, with the delimited text codec used for map files.
//!
//! File format: one line per row (top-to-bottom), comma-separated integers
//! per column (left-to-right). `-1` blocked, `0` open, `1`/`2` owned by
//! that player. Loading validates against the receiving map's dimensions
//! and replaces the cells atomically.

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::core::rng::DeterministicRng;
use crate::game::state::PlayerId;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors from map operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// Loaded text doesn't match the configured grid dimensions.
    #[error("dimension mismatch: expected {expected_width}x{expected_height}, found {found_width}x{found_height}")]
    DimensionMismatch {
        /// Configured column count
        expected_width: u32,
        /// Configured row count
        expected_height: u32,
        /// Column count found in the offending row
        found_width: u32,
        /// Row count found in the text
        found_height: u32,
    },

    /// A token in the loaded text is not an integer.
    #[error("parse error on line {line}: invalid token {token:?}")]
    ParseError {
        /// 1-based line number of the offending row
        line: usize,
        /// The token that failed to parse
        token: String,
    },

    /// Coordinate outside the grid. Callers that respect the map's
    /// dimensions never see this; it flags a programming error.
    #[error("coordinate {coord} outside {width}x{height} grid")]
    OutOfBounds {
        /// The rejected coordinate
        coord: Coord,
        /// Grid width
        width: u32,
        /// Grid height
        height: u32,
    },

    /// No non-blocked cell left to draw a spawn position from.
    #[error("no open cell available for spawn placement")]
    NoOpenCell,
}

// =============================================================================
// CELL STATE
// =============================================================================

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Unclaimed and walkable
    #[default]
    Open,
    /// Wall; never walkable, never owned
    Blocked,
    /// Last stepped on by this player
    Owned(PlayerId),
}

impl CellState {
    /// Integer encoding used by the map file format.
    #[inline]
    pub const fn encode(self) -> i32 {
        match self {
            CellState::Open => 0,
            CellState::Blocked => -1,
            CellState::Owned(player) => player.number(),
        }
    }

    /// Decode a file value. Anything that isn't `-1`, `1`, or `2` is an
    /// open cell.
    pub fn decode(value: i32) -> CellState {
        match value {
            -1 => CellState::Blocked,
            other => match PlayerId::from_number(other) {
                Some(player) => CellState::Owned(player),
                None => CellState::Open,
            },
        }
    }

    /// Is this a wall cell?
    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, CellState::Blocked)
    }
}

// =============================================================================
// GRID MAP
// =============================================================================

/// A rectangular grid of [`CellState`]s.
///
/// Dimensions are fixed at construction and never change; loading a map
/// file only replaces cell contents, and only when the file's dimensions
/// match exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMap {
    width: u32,
    height: u32,
    /// Row-major: index = y * width + x
    cells: Vec<CellState>,
}

impl GridMap {
    /// Create an all-open map. Dimensions must be positive.
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![CellState::Open; (width as usize) * (height as usize)],
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major cell slice, for rendering.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Is `coord` inside the grid?
    #[inline]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    fn index_of(&self, coord: Coord) -> Result<usize, MapError> {
        if !self.in_bounds(coord) {
            return Err(MapError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            });
        }
        Ok((coord.y as usize) * (self.width as usize) + coord.x as usize)
    }

    /// State of the cell at `coord`.
    pub fn get(&self, coord: Coord) -> Result<CellState, MapError> {
        self.index_of(coord).map(|i| self.cells[i])
    }

    /// Set the cell at `coord`.
    pub fn set(&mut self, coord: Coord, state: CellState) -> Result<(), MapError> {
        let index = self.index_of(coord)?;
        self.cells[index] = state;
        Ok(())
    }

    /// Every `Owned` cell back to `Open`; `Blocked` cells stay.
    pub fn clear_ownership(&mut self) {
        for cell in &mut self.cells {
            if matches!(cell, CellState::Owned(_)) {
                *cell = CellState::Open;
            }
        }
    }

    /// Number of cells currently owned by `player`.
    pub fn count_owned(&self, player: PlayerId) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == CellState::Owned(player))
            .count()
    }

    /// Replace the cells from delimited text.
    ///
    /// The replacement is atomic: on any error the receiver is untouched.
    pub fn load_from_text(&mut self, text: &str) -> Result<(), MapError> {
        self.cells = parse_rows(self.width, self.height, text)?;
        Ok(())
    }

    /// Serialize to the delimited text format. Exact inverse of
    /// [`load_from_text`](Self::load_from_text).
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for y in 0..self.height as usize {
            let row = &self.cells[y * self.width as usize..(y + 1) * self.width as usize];
            let line: Vec<String> = row.iter().map(|cell| cell.encode().to_string()).collect();
            out.push_str(&line.join(","));
            out.push('\n');
        }
        out
    }

    /// Draw a uniformly random non-`Blocked` cell not in `avoid`.
    ///
    /// Owned cells are eligible: only walls and the explicit avoid list
    /// are excluded. Errors with [`MapError::NoOpenCell`] when no such
    /// cell exists, rather than retrying forever.
    pub fn random_open_position(
        &self,
        rng: &mut DeterministicRng,
        avoid: &[Coord],
    ) -> Result<Coord, MapError> {
        let candidates: Vec<Coord> = (0..self.height as i32)
            .flat_map(|y| (0..self.width as i32).map(move |x| Coord::new(x, y)))
            .filter(|coord| {
                let index = (coord.y as usize) * (self.width as usize) + coord.x as usize;
                !self.cells[index].is_blocked() && !avoid.contains(coord)
            })
            .collect();

        rng.choose(&candidates).copied().ok_or(MapError::NoOpenCell)
    }
}

/// Parse delimited text into a cell vector, validating dimensions.
fn parse_rows(width: u32, height: u32, text: &str) -> Result<Vec<CellState>, MapError> {
    let rows: Vec<&str> = text.lines().collect();
    if rows.len() != height as usize {
        return Err(MapError::DimensionMismatch {
            expected_width: width,
            expected_height: height,
            found_width: width,
            found_height: rows.len() as u32,
        });
    }

    let mut cells = Vec::with_capacity((width as usize) * (height as usize));
    for (y, line) in rows.iter().enumerate() {
        let tokens: Vec<&str> = line.split(',').collect();
        if tokens.len() != width as usize {
            return Err(MapError::DimensionMismatch {
                expected_width: width,
                expected_height: height,
                found_width: tokens.len() as u32,
                found_height: rows.len() as u32,
            });
        }

        for token in tokens {
            let trimmed = token.trim();
            let value: i32 = trimmed.parse().map_err(|_| MapError::ParseError {
                line: y + 1,
                token: trimmed.to_string(),
            })?;
            cells.push(CellState::decode(value));
        }
    }

    Ok(cells)
}

// =============================================================================
// TESTS
// =============================================================================
