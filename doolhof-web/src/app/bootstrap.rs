#[cfg(any(target_arch = "wasm32", test))]
use crate::app::phase::{Phase, phase_for_session};
#[cfg(any(target_arch = "wasm32", test))]
use crate::game::{GateConfig, Session, SessionStore, shuffled_destinations};
#[cfg(any(target_arch = "wasm32", test))]
use crate::sheets::LogbookConfig;

#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Everything the one-shot boot produces before it is pushed into hooks.
#[cfg(any(target_arch = "wasm32", test))]
struct BootPayload {
    phase: Phase,
    gate_config: GateConfig,
    logbook_config: LogbookConfig,
    session: Session,
}

#[cfg(any(target_arch = "wasm32", test))]
fn load_gate_config() -> GateConfig {
    GateConfig::from_json(include_str!("../../static/assets/data/gates.json"))
        .unwrap_or_default()
}

/// Load the embedded configs and the saved session. A missing or unreadable
/// save starts a fresh session with newly shuffled destination options.
#[cfg(any(target_arch = "wasm32", test))]
fn bootstrap_load<S: SessionStore>(store: &S, grid: &crate::game::Grid, seed: u64) -> BootPayload {
    let gate_config = load_gate_config();
    let logbook_config = LogbookConfig::load_from_static();

    let session = match store.load() {
        Ok(Some(saved)) => saved,
        Ok(None) => Session::new(grid, gate_config.len(), shuffled_destinations(seed)),
        Err(err) => {
            log::warn!("saved session could not be read, starting fresh: {err}");
            Session::new(grid, gate_config.len(), shuffled_destinations(seed))
        }
    };

    BootPayload {
        phase: phase_for_session(&gate_config, &session),
        gate_config,
        logbook_config,
        session,
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let phase = app_state.phase.clone();
    let gate_config = app_state.gate_config.clone();
    let logbook_config = app_state.logbook_config.clone();
    let session = app_state.session.clone();
    let grid = app_state.grid.clone();

    use_effect_with((), move |()| {
        let seed = js_sys::Date::now() as u64;
        let payload = bootstrap_load(&crate::game::WebSessionStore, &grid, seed);
        phase.set(payload.phase);
        gate_config.set(Rc::new(payload.gate_config));
        logbook_config.set(Rc::new(payload.logbook_config));
        session.set(Some(payload.session));
        || {}
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GateProgress, Grid, MazeState, WebStoreError};
    use std::cell::RefCell;

    /// Stub store so bootstrap runs without a browser.
    #[derive(Default)]
    struct StubStore {
        saved: RefCell<Option<Session>>,
        fail: bool,
    }

    impl SessionStore for StubStore {
        type Error = WebStoreError;

        fn save(&self, session: &Session) -> Result<(), Self::Error> {
            self.saved.replace(Some(session.clone()));
            Ok(())
        }

        fn load(&self) -> Result<Option<Session>, Self::Error> {
            if self.fail {
                return Err(WebStoreError::Storage("boom".into()));
            }
            Ok(self.saved.borrow().clone())
        }

        fn clear(&self) -> Result<(), Self::Error> {
            self.saved.replace(None);
            Ok(())
        }
    }

    #[test]
    fn fresh_boot_starts_at_the_first_gate_with_shuffled_destinations() {
        let grid = Grid::default_maze();
        let payload = bootstrap_load(&StubStore::default(), &grid, 7);
        assert_eq!(payload.phase, Phase::Gate);
        assert_eq!(payload.session.maze, MazeState::new(&grid));
        assert_eq!(
            payload.session.destinations.len(),
            crate::game::DESTINATIONS.len()
        );
        assert_eq!(
            payload.session.gates,
            GateProgress::new(payload.gate_config.len())
        );
    }

    #[test]
    fn unreadable_save_also_starts_fresh() {
        let grid = Grid::default_maze();
        let store = StubStore {
            fail: true,
            ..StubStore::default()
        };
        let payload = bootstrap_load(&store, &grid, 7);
        assert_eq!(payload.phase, Phase::Gate);
        assert!(!payload.session.maze.won);
    }

    #[test]
    fn a_saved_session_is_resumed_as_is() {
        let grid = Grid::default_maze();
        let store = StubStore::default();
        let config = load_gate_config();

        let mut session = Session::new(&grid, config.len(), vec!["Bos".into()]);
        for stage in 0..config.len() {
            session
                .gates
                .submit(&config, stage, &config.gates[stage].secret);
        }
        session.maze.won = true;
        store.save(&session).unwrap();

        let payload = bootstrap_load(&store, &grid, 7);
        assert_eq!(payload.phase, Phase::Won);
        assert_eq!(payload.session, session);
    }

    #[test]
    fn boot_always_resolves_to_a_real_phase() {
        // The loading view clears as soon as the payload's phase lands, so
        // the payload may never answer with Boot itself.
        let grid = Grid::default_maze();
        for store in [
            StubStore::default(),
            StubStore {
                fail: true,
                ..StubStore::default()
            },
        ] {
            let payload = bootstrap_load(&store, &grid, 7);
            assert_ne!(payload.phase, Phase::Boot);
        }
    }

    #[test]
    fn embedded_gate_config_is_valid_and_non_empty() {
        let config = load_gate_config();
        assert!(!config.is_empty());
        for gate in &config.gates {
            assert!(!gate.secret.trim().is_empty());
        }
    }

    #[test]
    fn embedded_logbook_config_names_a_folder() {
        let config = LogbookConfig::load_from_static();
        assert!(!config.folder.trim().is_empty());
    }
}
