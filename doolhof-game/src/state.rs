//! Maze session state: the player position, win detection, and the bundle
//! persisted across UI re-executions.

use crate::gates::GateProgress;
use crate::grid::{Cell, Grid};
use crate::navigator::{Direction, MoveOutcome, Position, Viewport, try_move};
use serde::{Deserialize, Serialize};

/// Mutable maze state for one play-through.
///
/// The position only ever changes through [`MazeState::step`], so it always
/// references a walkable cell. `won` is terminal: once set it never reverts,
/// and further move input is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeState {
    pub position: Position,
    pub won: bool,
    #[serde(default)]
    pub moves: u32,
}

impl MazeState {
    /// Fresh state with the player on the grid's start cell.
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        Self {
            position: grid.start(),
            won: false,
            moves: 0,
        }
    }

    /// Apply one validated move, then run win detection.
    ///
    /// Returns [`MoveOutcome::Blocked`] without touching anything when the
    /// game is already won or the target cell is unreachable.
    pub fn step(&mut self, grid: &Grid, dir: Direction) -> MoveOutcome {
        if self.won {
            return MoveOutcome::Blocked;
        }
        let outcome = try_move(grid, self.position, dir);
        if let MoveOutcome::Moved(next) = outcome {
            self.position = next;
            self.moves = self.moves.saturating_add(1);
            if grid.get(next) == Some(Cell::Exit) {
                self.won = true;
            }
        }
        outcome
    }

    /// The 3×3 view around the current position.
    #[must_use]
    pub fn viewport(&self, grid: &Grid) -> Viewport {
        Viewport::around(grid, self.position)
    }

    /// Reset to the start cell. Win state resets too; this is a new
    /// play-through, not a revert of a finished one.
    pub fn restart(&mut self, grid: &Grid) {
        *self = Self::new(grid);
    }
}

/// Everything the UI persists per browser session: maze progress, gate
/// progress, and the shuffled destination options for the logbook select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub maze: MazeState,
    pub gates: GateProgress,
    #[serde(default)]
    pub destinations: Vec<String>,
}

impl Session {
    #[must_use]
    pub fn new(grid: &Grid, gate_count: usize, destinations: Vec<String>) -> Self {
        Self {
            maze: MazeState::new(grid),
            gates: GateProgress::new(gate_count),
            destinations,
        }
    }
}
