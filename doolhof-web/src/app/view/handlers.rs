use crate::app::phase::{Phase, phase_for_session};
use crate::app::state::{AppState, AppendFailure, AppendStatus, TripDraft};
use crate::game::{AppendError, Direction, GateAttempt, Session, append_trip};
use crate::sheets::RestSheetsHub;
use yew::prelude::*;

/// All callbacks the pages receive. Every session mutation goes through
/// [`persist`] so the state survives the next UI re-execution.
#[derive(Clone)]
pub struct AppHandlers {
    pub step: Callback<Direction>,
    pub gate_submit: Callback<String>,
    pub continue_to_logbook: Callback<()>,
    pub restart: Callback<()>,
    pub go_game: Callback<()>,
    pub go_logbook: Callback<()>,
    pub draft_change: Callback<TripDraft>,
    pub submit_trip: Callback<()>,
    pub lang_change: Callback<String>,
    pub toggle_hc: Callback<bool>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            step: build_step(state),
            gate_submit: build_gate_submit(state),
            continue_to_logbook: build_go_logbook(state),
            restart: build_restart(state),
            go_game: build_go_game(state),
            go_logbook: build_go_logbook(state),
            draft_change: build_draft_change(state),
            submit_trip: build_submit_trip(state),
            lang_change: build_lang_change(state),
            toggle_hc: build_toggle_hc(state),
        }
    }
}

fn persist(session: &Session) {
    #[cfg(target_arch = "wasm32")]
    {
        use crate::game::SessionStore;
        if let Err(err) = crate::game::WebSessionStore.save(session) {
            log::warn!("session could not be persisted: {err}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = session;
}

fn build_step(state: &AppState) -> Callback<Direction> {
    let session_handle = state.session.clone();
    let phase_handle = state.phase.clone();
    let grid = state.grid.clone();
    Callback::from(move |dir: Direction| {
        let Some(mut session) = (*session_handle).clone() else {
            return;
        };
        session.maze.step(&grid, dir);
        persist(&session);
        if session.maze.won {
            phase_handle.set(Phase::Won);
        }
        session_handle.set(Some(session));
    })
}

fn build_gate_submit(state: &AppState) -> Callback<String> {
    let session_handle = state.session.clone();
    let phase_handle = state.phase.clone();
    let gate_error = state.gate_error.clone();
    let config_handle = state.gate_config.clone();
    Callback::from(move |answer: String| {
        let Some(mut session) = (*session_handle).clone() else {
            return;
        };
        let config = (*config_handle).clone();
        let Some(stage) = session.gates.next_locked(&config) else {
            return;
        };
        match session.gates.submit(&config, stage, &answer) {
            GateAttempt::Accepted => {
                gate_error.set(false);
                persist(&session);
                phase_handle.set(phase_for_session(&config, &session));
                session_handle.set(Some(session));
            }
            GateAttempt::Rejected => gate_error.set(true),
            GateAttempt::AlreadyOpen | GateAttempt::OutOfRange => {}
        }
    })
}

fn build_restart(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    let phase_handle = state.phase.clone();
    let grid = state.grid.clone();
    let config_handle = state.gate_config.clone();
    Callback::from(move |()| {
        let Some(mut session) = (*session_handle).clone() else {
            return;
        };
        session.maze.restart(&grid);
        persist(&session);
        phase_handle.set(phase_for_session(&config_handle, &session));
        session_handle.set(Some(session));
    })
}

fn build_go_game(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    let phase_handle = state.phase.clone();
    let config_handle = state.gate_config.clone();
    Callback::from(move |()| {
        if let Some(session) = (*session_handle).as_ref() {
            phase_handle.set(phase_for_session(&config_handle, session));
        }
    })
}

fn build_go_logbook(state: &AppState) -> Callback<()> {
    let phase_handle = state.phase.clone();
    Callback::from(move |()| phase_handle.set(Phase::Logbook))
}

fn build_draft_change(state: &AppState) -> Callback<TripDraft> {
    let draft_handle = state.draft.clone();
    let status_handle = state.append_status.clone();
    Callback::from(move |draft: TripDraft| {
        // Editing clears the previous submission's status line.
        if *status_handle != AppendStatus::Idle && *status_handle != AppendStatus::Busy {
            status_handle.set(AppendStatus::Idle);
        }
        draft_handle.set(draft);
    })
}

pub(crate) fn map_append_error<E: std::error::Error + 'static>(
    err: &AppendError<E>,
) -> AppendFailure {
    match err {
        AppendError::FolderNotFound(name) => AppendFailure::FolderNotFound(name.clone()),
        AppendError::NoSpreadsheet(folder) => AppendFailure::NoSpreadsheet(folder.clone()),
        AppendError::Hub(_) => AppendFailure::Backend,
    }
}

fn build_submit_trip(state: &AppState) -> Callback<()> {
    let draft_handle = state.draft.clone();
    let status_handle = state.append_status.clone();
    let config_handle = state.logbook_config.clone();
    Callback::from(move |()| {
        if *status_handle == AppendStatus::Busy {
            return;
        }
        let entry = match draft_handle.to_entry() {
            Ok(entry) => entry,
            Err(err) => {
                status_handle.set(AppendStatus::Failed(AppendFailure::Validation(err)));
                return;
            }
        };
        let config = (*config_handle).clone();
        let status = status_handle.clone();
        status.set(AppendStatus::Busy);
        wasm_bindgen_futures::spawn_local(async move {
            let hub = RestSheetsHub::new(config.api_token.clone());
            let outcome = match append_trip(&hub, &config.folder, &entry).await {
                Ok(receipt) => AppendStatus::Saved(receipt.to_string()),
                Err(err) => {
                    log::warn!("logbook append failed: {err}");
                    AppendStatus::Failed(map_append_error(&err))
                }
            };
            status.set(outcome);
        });
    })
}

fn build_lang_change(state: &AppState) -> Callback<String> {
    let lang_handle = state.current_language.clone();
    Callback::from(move |lang: String| {
        crate::i18n::set_lang(&lang);
        lang_handle.set(lang);
    })
}

fn build_toggle_hc(state: &AppState) -> Callback<bool> {
    let hc_handle = state.high_contrast.clone();
    Callback::from(move |enabled: bool| {
        crate::a11y::set_high_contrast(enabled);
        hc_handle.set(enabled);
    })
}
