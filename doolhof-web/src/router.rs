use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/doolhof")]
    Maze,
    #[at("/gevonden")]
    Won,
    #[at("/logboek")]
    Logbook,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_phase(phase: &crate::app::Phase) -> Self {
        match phase {
            crate::app::Phase::Boot | crate::app::Phase::Gate => Self::Home,
            crate::app::Phase::Maze => Self::Maze,
            crate::app::Phase::Won => Self::Won,
            crate::app::Phase::Logbook => Self::Logbook,
        }
    }

    /// Whether this route points at the game flow rather than a side page.
    /// The concrete game phase is derived from session state, never from the
    /// URL, so a locked maze URL cannot skip the gates.
    #[must_use]
    pub const fn is_game(&self) -> bool {
        matches!(self, Self::Home | Self::Maze | Self::Won)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Phase;

    #[test]
    fn phases_map_onto_routes() {
        assert_eq!(Route::from_phase(&Phase::Boot), Route::Home);
        assert_eq!(Route::from_phase(&Phase::Gate), Route::Home);
        assert_eq!(Route::from_phase(&Phase::Maze), Route::Maze);
        assert_eq!(Route::from_phase(&Phase::Won), Route::Won);
        assert_eq!(Route::from_phase(&Phase::Logbook), Route::Logbook);
    }

    #[test]
    fn game_routes_are_distinguished_from_side_pages() {
        assert!(Route::Home.is_game());
        assert!(Route::Maze.is_game());
        assert!(Route::Won.is_game());
        assert!(!Route::Logbook.is_game());
        assert!(!Route::NotFound.is_game());
    }
}
