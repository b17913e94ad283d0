//! Spreadsheet row appender.
//!
//! The cloud side is abstracted behind [`SheetsHub`] so the orchestration —
//! find the folder, pick the newest spreadsheet, open or create the person's
//! worksheet, append one row — can be exercised without a network. The web
//! crate provides the REST-backed implementation.

use crate::trip::{HEADERS, TripEntry};
use std::fmt;
use std::future::Future;

/// A resolved cloud folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRef {
    pub id: String,
    pub name: String,
}

/// A resolved spreadsheet file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetRef {
    pub id: String,
    pub name: String,
}

/// Platform access to the cloud drive and spreadsheet API.
///
/// All calls are made once per user interaction, with no retry or backoff;
/// failures bubble up as user-facing messages.
pub trait SheetsHub {
    type Error: std::error::Error + 'static;

    /// Find a folder by exact name, anywhere in the drive.
    fn find_folder(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<FolderRef>, Self::Error>>;

    /// The most recently created spreadsheet-typed file in the folder.
    fn latest_spreadsheet(
        &self,
        folder: &FolderRef,
    ) -> impl Future<Output = Result<Option<SpreadsheetRef>, Self::Error>>;

    /// Titles of the worksheets inside a spreadsheet.
    fn worksheet_titles(
        &self,
        spreadsheet: &SpreadsheetRef,
    ) -> impl Future<Output = Result<Vec<String>, Self::Error>>;

    /// Create a worksheet and write its header row.
    fn add_worksheet(
        &self,
        spreadsheet: &SpreadsheetRef,
        title: &str,
        header: &[&str],
    ) -> impl Future<Output = Result<(), Self::Error>>;

    /// Append one row to an existing worksheet.
    fn append_row(
        &self,
        spreadsheet: &SpreadsheetRef,
        title: &str,
        row: Vec<String>,
    ) -> impl Future<Output = Result<(), Self::Error>>;
}

/// Where an append attempt stopped. Every variant maps to one inline message
/// in the form; nothing here is fatal to the session.
#[derive(Debug, thiserror::Error)]
pub enum AppendError<E: std::error::Error + 'static> {
    #[error("folder '{0}' not found")]
    FolderNotFound(String),
    #[error("no spreadsheets found in folder '{0}'")]
    NoSpreadsheet(String),
    #[error("spreadsheet backend failed")]
    Hub(#[source] E),
}

/// What a successful append touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendReceipt {
    pub spreadsheet: String,
    pub worksheet: String,
    /// True when the worksheet did not exist and was created with the header
    /// row first.
    pub created_worksheet: bool,
}

impl fmt::Display for AppendReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.spreadsheet, self.worksheet)
    }
}

/// Append one logbook entry to the newest spreadsheet in `folder_name`.
///
/// The worksheet is selected by the entry's person name and created with the
/// fixed header row when missing. No transactional guarantee: a failure after
/// worksheet creation leaves the worksheet in place.
///
/// # Errors
///
/// Returns [`AppendError`] when the folder or a spreadsheet cannot be found,
/// or when any backend call fails.
pub async fn append_trip<H: SheetsHub>(
    hub: &H,
    folder_name: &str,
    entry: &TripEntry,
) -> Result<AppendReceipt, AppendError<H::Error>> {
    let folder = hub
        .find_folder(folder_name)
        .await
        .map_err(AppendError::Hub)?
        .ok_or_else(|| AppendError::FolderNotFound(folder_name.to_string()))?;

    let spreadsheet = hub
        .latest_spreadsheet(&folder)
        .await
        .map_err(AppendError::Hub)?
        .ok_or_else(|| AppendError::NoSpreadsheet(folder.name.clone()))?;

    let title = entry.worksheet_title();
    let titles = hub
        .worksheet_titles(&spreadsheet)
        .await
        .map_err(AppendError::Hub)?;
    let created = if titles.iter().any(|t| t == &title) {
        false
    } else {
        hub.add_worksheet(&spreadsheet, &title, &HEADERS)
            .await
            .map_err(AppendError::Hub)?;
        true
    };

    hub.append_row(&spreadsheet, &title, entry.to_row())
        .await
        .map_err(AppendError::Hub)?;

    Ok(AppendReceipt {
        spreadsheet: spreadsheet.name,
        worksheet: title,
        created_worksheet: created,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::parse_date;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    #[derive(Debug, thiserror::Error)]
    #[error("injected hub failure: {0}")]
    struct HubFailure(&'static str);

    /// In-memory drive: one optional folder holding spreadsheets in
    /// creation order, each with named worksheets of rows.
    #[derive(Default)]
    struct MemoryHub {
        folder: Option<String>,
        spreadsheets: Vec<String>,
        worksheets: RefCell<BTreeMap<String, Vec<Vec<String>>>>,
        fail_on_append: bool,
    }

    impl SheetsHub for MemoryHub {
        type Error = HubFailure;

        async fn find_folder(&self, name: &str) -> Result<Option<FolderRef>, Self::Error> {
            Ok(self
                .folder
                .as_ref()
                .filter(|f| f.as_str() == name)
                .map(|f| FolderRef {
                    id: format!("folder-{f}"),
                    name: f.clone(),
                }))
        }

        async fn latest_spreadsheet(
            &self,
            _folder: &FolderRef,
        ) -> Result<Option<SpreadsheetRef>, Self::Error> {
            Ok(self.spreadsheets.last().map(|name| SpreadsheetRef {
                id: format!("sheet-{name}"),
                name: name.clone(),
            }))
        }

        async fn worksheet_titles(
            &self,
            _spreadsheet: &SpreadsheetRef,
        ) -> Result<Vec<String>, Self::Error> {
            Ok(self.worksheets.borrow().keys().cloned().collect())
        }

        async fn add_worksheet(
            &self,
            _spreadsheet: &SpreadsheetRef,
            title: &str,
            header: &[&str],
        ) -> Result<(), Self::Error> {
            let header_row = header.iter().map(ToString::to_string).collect();
            self.worksheets
                .borrow_mut()
                .insert(title.to_string(), vec![header_row]);
            Ok(())
        }

        async fn append_row(
            &self,
            _spreadsheet: &SpreadsheetRef,
            title: &str,
            row: Vec<String>,
        ) -> Result<(), Self::Error> {
            if self.fail_on_append {
                return Err(HubFailure("append"));
            }
            self.worksheets
                .borrow_mut()
                .get_mut(title)
                .ok_or(HubFailure("missing worksheet"))?
                .push(row);
            Ok(())
        }
    }

    fn entry() -> TripEntry {
        TripEntry {
            person: "Femke".into(),
            date: parse_date("2026-03-14").unwrap(),
            distance_km: 5.5,
            destination: "Bos".into(),
            reason: "frisse neus".into(),
        }
    }

    #[test]
    fn creates_the_worksheet_with_header_then_appends() {
        let hub = MemoryHub {
            folder: Some("Wandellogboek".into()),
            spreadsheets: vec!["2025".into(), "2026".into()],
            ..MemoryHub::default()
        };

        let receipt = block_on(append_trip(&hub, "Wandellogboek", &entry())).unwrap();
        assert_eq!(receipt.spreadsheet, "2026"); // newest wins
        assert_eq!(receipt.worksheet, "Femke");
        assert!(receipt.created_worksheet);

        let sheets = hub.worksheets.borrow();
        let rows = &sheets["Femke"];
        assert_eq!(rows[0], HEADERS.map(String::from).to_vec());
        assert_eq!(rows[1], vec!["2026-03-14", "5.5", "Bos", "frisse neus"]);
    }

    #[test]
    fn reuses_an_existing_worksheet_without_rewriting_the_header() {
        let hub = MemoryHub {
            folder: Some("Wandellogboek".into()),
            spreadsheets: vec!["2026".into()],
            ..MemoryHub::default()
        };
        block_on(append_trip(&hub, "Wandellogboek", &entry())).unwrap();
        let receipt = block_on(append_trip(&hub, "Wandellogboek", &entry())).unwrap();
        assert!(!receipt.created_worksheet);

        let sheets = hub.worksheets.borrow();
        assert_eq!(sheets["Femke"].len(), 3); // header + two rows
    }

    #[test]
    fn missing_folder_is_reported_by_name() {
        let hub = MemoryHub::default();
        let err = block_on(append_trip(&hub, "Wandellogboek", &entry())).unwrap_err();
        assert!(matches!(err, AppendError::FolderNotFound(ref name) if name == "Wandellogboek"));
        assert_eq!(err.to_string(), "folder 'Wandellogboek' not found");
    }

    #[test]
    fn empty_folder_is_reported_as_missing_spreadsheet() {
        let hub = MemoryHub {
            folder: Some("Wandellogboek".into()),
            ..MemoryHub::default()
        };
        let err = block_on(append_trip(&hub, "Wandellogboek", &entry())).unwrap_err();
        assert!(matches!(err, AppendError::NoSpreadsheet(ref name) if name == "Wandellogboek"));
    }

    #[test]
    fn backend_failures_surface_with_their_source() {
        let hub = MemoryHub {
            folder: Some("Wandellogboek".into()),
            spreadsheets: vec!["2026".into()],
            fail_on_append: true,
            ..MemoryHub::default()
        };
        let err = block_on(append_trip(&hub, "Wandellogboek", &entry())).unwrap_err();
        assert!(matches!(err, AppendError::Hub(_)));
    }
}
