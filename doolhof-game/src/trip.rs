//! Logbook entry model: one appended spreadsheet row per recorded trip.

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Fixed header row written when a worksheet is created.
pub const HEADERS: [&str; 4] = ["Date", "Distance (km)", "Destination", "Reason"];

/// Preset destination options for the logbook select box.
pub const DESTINATIONS: &[&str] = &[
    "Bos",
    "Strand",
    "Park",
    "Dorp",
    "Heide",
    "Duinen",
    "Anders",
];

/// Validation failures for a logbook entry, surfaced inline in the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TripError {
    #[error("person name is empty")]
    EmptyPerson,
    #[error("destination is empty")]
    EmptyDestination,
    #[error("distance must be greater than zero")]
    NonPositiveDistance,
    #[error("date is not a valid calendar date")]
    BadDate,
}

/// One data-entry form submission. Rows are append-only; there is no update
/// or delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripEntry {
    pub person: String,
    pub date: NaiveDate,
    pub distance_km: f64,
    pub destination: String,
    pub reason: String,
}

impl TripEntry {
    /// Check the entry before it is sent anywhere.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`TripError`].
    pub fn validate(&self) -> Result<(), TripError> {
        if self.person.trim().is_empty() {
            return Err(TripError::EmptyPerson);
        }
        if self.destination.trim().is_empty() {
            return Err(TripError::EmptyDestination);
        }
        if self.distance_km.is_nan() || self.distance_km <= 0.0 {
            return Err(TripError::NonPositiveDistance);
        }
        Ok(())
    }

    /// Worksheet title this entry belongs to: one sheet per person.
    #[must_use]
    pub fn worksheet_title(&self) -> String {
        self.person.trim().to_string()
    }

    /// The spreadsheet row, in [`HEADERS`] order.
    #[must_use]
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date.format("%Y-%m-%d").to_string(),
            format_distance(self.distance_km),
            self.destination.trim().to_string(),
            self.reason.trim().to_string(),
        ]
    }
}

/// Parse the `YYYY-MM-DD` value of an HTML date input.
///
/// # Errors
///
/// Returns [`TripError::BadDate`] when the text is not a calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate, TripError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| TripError::BadDate)
}

fn format_distance(km: f64) -> String {
    if (km.fract()).abs() < f64::EPSILON {
        format!("{km:.0}")
    } else {
        format!("{km:.1}")
    }
}

/// Destination options in a per-session shuffled order. The same seed always
/// yields the same order, so the list survives UI re-executions unchanged.
#[must_use]
pub fn shuffled_destinations(seed: u64) -> Vec<String> {
    let mut options: Vec<String> = DESTINATIONS.iter().map(ToString::to_string).collect();
    let mut rng = SmallRng::seed_from_u64(seed);
    options.shuffle(&mut rng);
    options
}
