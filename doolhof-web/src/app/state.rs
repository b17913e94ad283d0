use crate::app::phase::Phase;
use crate::game::{GateConfig, Grid, Session, TripEntry, TripError, parse_date};
use crate::sheets::LogbookConfig;
use std::rc::Rc;
use yew::prelude::*;

/// Raw text of the logbook form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripDraft {
    pub person: String,
    pub date: String,
    pub distance: String,
    pub destination: String,
    pub reason: String,
}

impl TripDraft {
    /// Parse and validate the draft into a submittable entry.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`TripError`].
    pub fn to_entry(&self) -> Result<TripEntry, TripError> {
        let distance_km: f64 = self
            .distance
            .trim()
            .parse()
            .map_err(|_| TripError::NonPositiveDistance)?;
        let entry = TripEntry {
            person: self.person.clone(),
            date: parse_date(&self.date)?,
            distance_km,
            destination: self.destination.clone(),
            reason: self.reason.clone(),
        };
        entry.validate()?;
        Ok(entry)
    }
}

/// Where the last logbook submission stands; rendered as one inline line.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AppendStatus {
    #[default]
    Idle,
    Busy,
    /// Saved; carries the spreadsheet/worksheet label of the receipt.
    Saved(String),
    Failed(AppendFailure),
}

/// Structured failure so the message can be localized at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum AppendFailure {
    Validation(TripError),
    FolderNotFound(String),
    NoSpreadsheet(String),
    Backend,
}

#[derive(Clone)]
pub struct AppState {
    pub phase: UseStateHandle<Phase>,
    pub grid: UseStateHandle<Rc<Grid>>,
    pub gate_config: UseStateHandle<Rc<GateConfig>>,
    pub logbook_config: UseStateHandle<Rc<LogbookConfig>>,
    pub session: UseStateHandle<Option<Session>>,
    pub gate_error: UseStateHandle<bool>,
    pub draft: UseStateHandle<TripDraft>,
    pub append_status: UseStateHandle<AppendStatus>,
    pub high_contrast: UseStateHandle<bool>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        phase: use_state(|| Phase::Boot),
        grid: use_state(|| Rc::new(Grid::default_maze())),
        gate_config: use_state(|| Rc::new(GateConfig::default())),
        logbook_config: use_state(|| Rc::new(LogbookConfig::default())),
        session: use_state(|| None::<Session>),
        gate_error: use_state(|| false),
        draft: use_state(TripDraft::default),
        append_status: use_state(AppendStatus::default),
        high_contrast: use_state(crate::a11y::high_contrast_enabled),
        current_language: use_state(crate::i18n::current_lang),
    }
}
