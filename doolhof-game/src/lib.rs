//! Doolhof core logic
//!
//! Platform-agnostic logic for the Doolhof web app: the 15×15 maze with its
//! 3×3 viewport, the sequential password gates in front of it, and the trip
//! logbook that appends rows to a cloud spreadsheet. No UI or browser
//! dependencies live here.

pub mod gates;
pub mod grid;
pub mod navigator;
pub mod sheets;
pub mod state;
pub mod trip;

// Re-export commonly used types
pub use gates::{GateAttempt, GateChallenge, GateConfig, GateProgress};
pub use grid::{Cell, DEFAULT_MAZE, Grid, GridError};
pub use navigator::{Direction, MoveOutcome, Position, Tile, VIEW_SPAN, Viewport, try_move};
pub use sheets::{AppendError, AppendReceipt, FolderRef, SheetsHub, SpreadsheetRef, append_trip};
pub use state::{MazeState, Session};
pub use trip::{
    DESTINATIONS, HEADERS, TripEntry, TripError, parse_date, shuffled_destinations,
};

/// Trait for abstracting per-session persistence.
/// Platform-specific implementations should provide this.
pub trait SessionStore {
    type Error: std::error::Error + 'static;

    /// Persist the session bundle.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    fn save(&self, session: &Session) -> Result<(), Self::Error>;

    /// Load the previously persisted session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if stored data exists but cannot be read.
    fn load(&self) -> Result<Option<Session>, Self::Error>;

    /// Drop the persisted session.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored data cannot be removed.
    fn clear(&self) -> Result<(), Self::Error>;
}
