//! Validated single-step movement and the 3×3 viewport.

use crate::grid::{Cell, Grid};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A (row, column) pair into the grid. Always refers to a walkable cell while
/// held by game state; raw values may be out of bounds during lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// One of the four cardinal move directions. No diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Left, Self::Right, Self::Down];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Row/column offset of a single step in this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(()),
        }
    }
}

/// Result of a requested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The target cell was in bounds and walkable; this is the new position.
    Moved(Position),
    /// The target was a wall or outside the grid; the position is unchanged.
    Blocked,
}

/// Candidate cell one step from `pos`, or `None` when the step would leave
/// the addressable space on the top or left edge.
#[must_use]
pub fn target(pos: Position, dir: Direction) -> Option<Position> {
    let (dr, dc) = dir.delta();
    let row = pos.row.checked_add_signed(dr)?;
    let col = pos.col.checked_add_signed(dc)?;
    Some(Position { row, col })
}

/// Validate a single step. Walls and out-of-bounds targets block; everything
/// else moves.
#[must_use]
pub fn try_move(grid: &Grid, pos: Position, dir: Direction) -> MoveOutcome {
    match target(pos, dir).and_then(|next| grid.get(next).map(|cell| (next, cell))) {
        Some((next, cell)) if cell.is_walkable() => MoveOutcome::Moved(next),
        _ => MoveOutcome::Blocked,
    }
}

/// Span of the local view in cells (3×3, centered on the player).
pub const VIEW_SPAN: usize = 3;

/// One tile of the rendered viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    Player,
    Wall,
    Floor,
    Start,
    Exit,
    OutOfBounds,
}

impl Tile {
    #[must_use]
    pub const fn from_cell(cell: Cell) -> Self {
        match cell {
            Cell::Wall => Self::Wall,
            Cell::Floor => Self::Floor,
            Cell::Start => Self::Start,
            Cell::Exit => Self::Exit,
        }
    }

    /// Stable identifier used for styling and test assertions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Wall => "wall",
            Self::Floor => "floor",
            Self::Start => "start",
            Self::Exit => "exit",
            Self::OutOfBounds => "out-of-bounds",
        }
    }
}

/// The 3×3 neighborhood around the player. The center tile is always the
/// player marker, whatever terrain it stands on; neighbors outside the grid
/// render as [`Tile::OutOfBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    tiles: [[Tile; VIEW_SPAN]; VIEW_SPAN],
}

impl Viewport {
    #[must_use]
    pub fn around(grid: &Grid, pos: Position) -> Self {
        let mut tiles = [[Tile::OutOfBounds; VIEW_SPAN]; VIEW_SPAN];
        for (i, dr) in (-1_isize..=1).enumerate() {
            for (j, dc) in (-1_isize..=1).enumerate() {
                if dr == 0 && dc == 0 {
                    tiles[i][j] = Tile::Player;
                    continue;
                }
                let neighbor = pos
                    .row
                    .checked_add_signed(dr)
                    .zip(pos.col.checked_add_signed(dc))
                    .map(|(row, col)| Position { row, col });
                tiles[i][j] = neighbor
                    .and_then(|p| grid.get(p))
                    .map_or(Tile::OutOfBounds, Tile::from_cell);
            }
        }
        Self { tiles }
    }

    #[must_use]
    pub const fn tile(&self, row: usize, col: usize) -> Tile {
        self.tiles[row][col]
    }

    /// Rows of tiles, top to bottom.
    #[must_use]
    pub const fn rows(&self) -> &[[Tile; VIEW_SPAN]; VIEW_SPAN] {
        &self.tiles
    }
}
