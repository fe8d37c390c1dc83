//! Map Editor
//!
//! Paints walls onto a grid map and shuttles it through the text codec.
//! The editor only ever produces open/blocked cells; ownership markings
//! belong to the round engine.

use crate::core::coord::Coord;
use crate::game::map::{CellState, GridMap, MapError};

/// Wall-painting editor around its own [`GridMap`].
///
/// The editor's map is separate from the engine's: the application hands
/// a copy over when a round starts, so edits never race a live round.
#[derive(Debug, Clone)]
pub struct MapEditor {
    map: GridMap,
}

impl MapEditor {
    /// Editor over a fresh all-open map.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            map: GridMap::new(width, height),
        }
    }

    /// Editor over an existing map.
    pub fn from_map(map: GridMap) -> Self {
        Self { map }
    }

    /// The map being edited.
    pub fn map(&self) -> &GridMap {
        &self.map
    }

    /// Consume the editor, yielding its map.
    pub fn into_map(self) -> GridMap {
        self.map
    }

    /// Flip the cell at `coord` between open and blocked.
    ///
    /// Out-of-bounds clicks are ignored. An `Owned` cell is not expected
    /// editor input; if one is present it becomes blocked, like an open
    /// cell would.
    pub fn toggle_cell(&mut self, coord: Coord) {
        let Ok(current) = self.map.get(coord) else {
            return;
        };
        let next = if current.is_blocked() {
            CellState::Open
        } else {
            CellState::Blocked
        };
        let _ = self.map.set(coord, next);
    }

    /// Reset to a fresh all-open map of the same dimensions.
    pub fn clear(&mut self) {
        self.map = GridMap::new(self.map.width(), self.map.height());
    }

    /// Serialize the map to the delimited text format.
    pub fn export_map(&self) -> String {
        self.map.to_text()
    }

    /// Replace the map from delimited text. The editor performs no
    /// parsing of its own; errors come straight from the codec and the
    /// current map is left unchanged.
    pub fn import_map(&mut self, text: &str) -> Result<(), MapError> {
        self.map.load_from_text(text)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::PlayerId;

    #[test]
    fn test_toggle_flips_open_and_blocked() {
        let mut editor = MapEditor::new(3, 3);
        let coord = Coord::new(1, 1);

        editor.toggle_cell(coord);
        assert_eq!(editor.map().get(coord).unwrap(), CellState::Blocked);

        editor.toggle_cell(coord);
        assert_eq!(editor.map().get(coord).unwrap(), CellState::Open);
    }

    #[test]
    fn test_toggle_out_of_bounds_is_a_no_op() {
        let mut editor = MapEditor::new(2, 2);
        let before = editor.map().clone();

        editor.toggle_cell(Coord::new(-1, 0));
        editor.toggle_cell(Coord::new(2, 0));
        editor.toggle_cell(Coord::new(0, 5));

        assert_eq!(editor.map(), &before);
    }

    #[test]
    fn test_toggle_owned_cell_becomes_blocked() {
        let mut map = GridMap::new(2, 1);
        map.set(Coord::new(0, 0), CellState::Owned(PlayerId::One)).unwrap();
        let mut editor = MapEditor::from_map(map);

        editor.toggle_cell(Coord::new(0, 0));
        assert_eq!(
            editor.map().get(Coord::new(0, 0)).unwrap(),
            CellState::Blocked
        );
    }

    #[test]
    fn test_clear_resets_to_open_with_same_dimensions() {
        let mut editor = MapEditor::new(4, 2);
        editor.toggle_cell(Coord::new(0, 0));
        editor.toggle_cell(Coord::new(3, 1));

        editor.clear();

        assert_eq!(editor.map().width(), 4);
        assert_eq!(editor.map().height(), 2);
        assert!(editor
            .map()
            .cells()
            .iter()
            .all(|cell| *cell == CellState::Open));
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut editor = MapEditor::new(3, 2);
        editor.toggle_cell(Coord::new(0, 0));
        editor.toggle_cell(Coord::new(2, 1));

        let text = editor.export_map();
        let mut other = MapEditor::new(3, 2);
        other.import_map(&text).unwrap();

        assert_eq!(other.map(), editor.map());
    }

    #[test]
    fn test_failed_import_keeps_current_map() {
        let mut editor = MapEditor::new(2, 2);
        editor.toggle_cell(Coord::new(1, 1));
        let before = editor.map().clone();

        assert!(editor.import_map("0,0,0\n0,0,0\n").is_err());
        assert_eq!(editor.map(), &before);
    }
}
