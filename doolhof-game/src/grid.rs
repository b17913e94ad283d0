//! Maze grid data model.
//!
//! A grid is parsed once from its character form and is immutable afterwards.
//! Validation guarantees a rectangular shape with exactly one start and one
//! exit cell, so navigation code never has to re-check those invariants.

use crate::navigator::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The original 15×15 maze. Row 0 and row 14 are solid walls.
pub const DEFAULT_MAZE: &[&str] = &[
    "###############",
    "#S...#.#......#",
    "#.##.#.###.####",
    "#.#..#.#......#",
    "#.#.##.#.###.##",
    "#.#....#.#.#..#",
    "#.####.#.#.##.#",
    "#....###.#.#..#",
    "####.#...#...##",
    "#....#.#.#.#.##",
    "#.####.#.###.##",
    "#.#....#.#....#",
    "#.#.##.####.###",
    "#....##......E#",
    "###############",
];

/// One cell of the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Wall,
    Floor,
    Start,
    Exit,
}

impl Cell {
    /// Parse a single grid character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Floor),
            'S' => Some(Self::Start),
            'E' => Some(Self::Exit),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
            Self::Start => 'S',
            Self::Exit => 'E',
        }
    }

    /// Whether the player may stand on this cell.
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Errors raised while parsing a grid from its character form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} is {len} cells wide, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },
    #[error("unknown cell character {found:?} at row {row}, column {col}")]
    UnknownCell { row: usize, col: usize, found: char },
    #[error("expected exactly one start cell, found {0}")]
    StartCount(usize),
    #[error("expected exactly one exit cell, found {0}")]
    ExitCount(usize),
}

/// A validated, immutable maze grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    cols: usize,
    start: Position,
    exit: Position,
}

impl Grid {
    /// Parse and validate a grid from fixed-length rows of `#./SE` characters.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] when the input is empty, not rectangular,
    /// contains an unknown character, or does not hold exactly one start and
    /// one exit cell.
    pub fn parse(rows: &[&str]) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::Empty);
        }

        let expected = rows[0].chars().count();
        let mut cells = Vec::with_capacity(rows.len());
        let mut starts = Vec::new();
        let mut exits = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != expected {
                return Err(GridError::RaggedRow { row, len, expected });
            }
            let mut parsed = Vec::with_capacity(expected);
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch)
                    .ok_or(GridError::UnknownCell { row, col, found: ch })?;
                match cell {
                    Cell::Start => starts.push(Position { row, col }),
                    Cell::Exit => exits.push(Position { row, col }),
                    Cell::Wall | Cell::Floor => {}
                }
                parsed.push(cell);
            }
            cells.push(parsed);
        }

        if starts.len() != 1 {
            return Err(GridError::StartCount(starts.len()));
        }
        if exits.len() != 1 {
            return Err(GridError::ExitCount(exits.len()));
        }

        Ok(Self {
            cells,
            cols: expected,
            start: starts[0],
            exit: exits[0],
        })
    }

    /// The built-in maze shipped with the game.
    ///
    /// # Panics
    ///
    /// Panics if the embedded grid data is invalid, which parsing tests rule
    /// out.
    #[must_use]
    pub fn default_maze() -> Self {
        Self::parse(DEFAULT_MAZE).expect("embedded default maze should be valid")
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    #[must_use]
    pub const fn exit(&self) -> Position {
        self.exit
    }

    /// Cell at `pos`, or `None` when the position lies outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols
    }

    /// Iterate rows of cells, top to bottom, for full-map rendering.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_maze_is_valid_and_fifteen_square() {
        let grid = Grid::default_maze();
        assert_eq!(grid.rows(), 15);
        assert_eq!(grid.cols(), 15);
        assert_eq!(grid.start(), Position { row: 1, col: 1 });
        assert_eq!(grid.exit(), Position { row: 13, col: 13 });
        assert_eq!(grid.get(grid.start()), Some(Cell::Start));
        assert_eq!(grid.get(grid.exit()), Some(Cell::Exit));
    }

    #[test]
    fn out_of_bounds_lookup_is_none() {
        let grid = Grid::default_maze();
        assert_eq!(grid.get(Position { row: 15, col: 0 }), None);
        assert_eq!(grid.get(Position { row: 0, col: 15 }), None);
        assert!(!grid.in_bounds(Position { row: 15, col: 15 }));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = Grid::parse(&["#S#", "#E"]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                len: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_characters() {
        let err = Grid::parse(&["#S#", "#E?"]).unwrap_err();
        assert_eq!(
            err,
            GridError::UnknownCell {
                row: 1,
                col: 2,
                found: '?'
            }
        );
    }

    #[test]
    fn parse_requires_exactly_one_start_and_exit() {
        assert_eq!(Grid::parse(&["...", ".E."]).unwrap_err(), GridError::StartCount(0));
        assert_eq!(Grid::parse(&["S.S", ".E."]).unwrap_err(), GridError::StartCount(2));
        assert_eq!(Grid::parse(&["S..", "..."]).unwrap_err(), GridError::ExitCount(0));
        assert_eq!(Grid::parse(&[]).unwrap_err(), GridError::Empty);
    }

    #[test]
    fn cell_characters_round_trip() {
        for cell in [Cell::Wall, Cell::Floor, Cell::Start, Cell::Exit] {
            assert_eq!(Cell::from_char(cell.as_char()), Some(cell));
        }
        assert_eq!(Cell::from_char('x'), None);
        assert!(Cell::Floor.is_walkable());
        assert!(!Cell::Wall.is_walkable());
    }
}
