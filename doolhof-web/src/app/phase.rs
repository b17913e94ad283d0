use crate::game::{GateConfig, Session};

/// Top-level UI phase. The game phases (`Gate`, `Maze`, `Won`) are derived
/// from session state; `Logbook` is the independent data-entry surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Boot,
    Gate,
    Maze,
    Won,
    Logbook,
}

/// Derive the game phase from what the session has already unlocked: locked
/// gates come first, the terminal won state never reverts, everything else is
/// the maze itself.
#[must_use]
pub fn phase_for_session(config: &GateConfig, session: &Session) -> Phase {
    if !session.gates.all_open(config) {
        Phase::Gate
    } else if session.maze.won {
        Phase::Won
    } else {
        Phase::Maze
    }
}
