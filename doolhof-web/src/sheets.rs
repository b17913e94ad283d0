//! REST implementation of the spreadsheet hub.
//!
//! Talks to the Drive v3 files API to resolve the logbook folder and its
//! newest spreadsheet, and to the Sheets v4 API to create worksheets and
//! append rows. Calls are made directly in the interaction path; there is no
//! retry or backoff.

use crate::game::{FolderRef, SheetsHub, SpreadsheetRef};
use gloo::net::http::Request;
use serde::Deserialize;
use serde_json::json;

const DRIVE_FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
const SHEETS_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

const FOLDER_MIME: &str = "application/vnd.google-apps.folder";
const SPREADSHEET_MIMES: [&str; 3] = [
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
    "application/vnd.google-apps.spreadsheet",
];

/// Deployment configuration for the logbook, shipped as an embedded asset.
/// The token and folder name are opaque to the rest of the app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LogbookConfig {
    pub folder: String,
    #[serde(default)]
    pub api_token: String,
}

impl LogbookConfig {
    /// Parse the embedded logbook configuration.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error when the asset is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(include_str!("../static/assets/data/logbook.json")).unwrap_or_default()
    }
}

/// Errors from the REST backend, shown to the user as one generic append
/// failure message and logged with detail.
#[derive(Debug, thiserror::Error)]
pub enum SheetsApiError {
    #[error("request failed: {0}")]
    Net(#[from] gloo::net::Error),
    #[error("API answered with status {0}")]
    Status(u16),
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct DriveFileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

/// Drive query for a folder by exact name, anywhere in the drive.
fn folder_query(name: &str) -> String {
    format!(
        "name='{}' and mimeType='{FOLDER_MIME}' and trashed = false",
        escape_query_value(name)
    )
}

/// Drive query for spreadsheet-typed files inside a folder.
fn spreadsheet_query(folder_id: &str) -> String {
    let mime_clause = SPREADSHEET_MIMES
        .map(|mime| format!("mimeType='{mime}'"))
        .join(" or ");
    format!(
        "'{}' in parents and ({mime_clause}) and trashed = false",
        escape_query_value(folder_id)
    )
}

/// Drive queries quote values with single quotes; escape them in user input.
fn escape_query_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn encode_path_segment(segment: &str) -> String {
    js_sys::encode_uri_component(segment).into()
}

/// [`SheetsHub`] over the Google Drive/Sheets REST APIs.
#[derive(Debug, Clone)]
pub struct RestSheetsHub {
    token: String,
}

impl RestSheetsHub {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    async fn drive_list(&self, query: &[(&str, &str)]) -> Result<DriveFileList, SheetsApiError> {
        let response = Request::get(DRIVE_FILES_URL)
            .header("Authorization", &self.bearer())
            .query(query.iter().copied())
            .send()
            .await?;
        if !response.ok() {
            return Err(SheetsApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

impl SheetsHub for RestSheetsHub {
    type Error = SheetsApiError;

    async fn find_folder(&self, name: &str) -> Result<Option<FolderRef>, Self::Error> {
        let q = folder_query(name);
        let list = self
            .drive_list(&[("q", &q), ("fields", "files(id, name)"), ("pageSize", "1")])
            .await?;
        Ok(list
            .files
            .into_iter()
            .next()
            .map(|f| FolderRef { id: f.id, name: f.name }))
    }

    async fn latest_spreadsheet(
        &self,
        folder: &FolderRef,
    ) -> Result<Option<SpreadsheetRef>, Self::Error> {
        let q = spreadsheet_query(&folder.id);
        let list = self
            .drive_list(&[
                ("q", &q),
                ("orderBy", "createdTime desc"),
                ("fields", "files(id, name, createdTime)"),
                ("pageSize", "1"),
            ])
            .await?;
        Ok(list
            .files
            .into_iter()
            .next()
            .map(|f| SpreadsheetRef { id: f.id, name: f.name }))
    }

    async fn worksheet_titles(
        &self,
        spreadsheet: &SpreadsheetRef,
    ) -> Result<Vec<String>, Self::Error> {
        let url = format!("{SHEETS_URL}/{}", encode_path_segment(&spreadsheet.id));
        let response = Request::get(&url)
            .header("Authorization", &self.bearer())
            .query([("fields", "sheets.properties.title")])
            .send()
            .await?;
        if !response.ok() {
            return Err(SheetsApiError::Status(response.status()));
        }
        let meta: SpreadsheetMeta = response.json().await?;
        Ok(meta
            .sheets
            .into_iter()
            .map(|sheet| sheet.properties.title)
            .collect())
    }

    async fn add_worksheet(
        &self,
        spreadsheet: &SpreadsheetRef,
        title: &str,
        header: &[&str],
    ) -> Result<(), Self::Error> {
        let url = format!(
            "{SHEETS_URL}/{}:batchUpdate",
            encode_path_segment(&spreadsheet.id)
        );
        let body = json!({
            "requests": [{ "addSheet": { "properties": { "title": title } } }]
        });
        let response = Request::post(&url)
            .header("Authorization", &self.bearer())
            .json(&body)?
            .send()
            .await?;
        if !response.ok() {
            return Err(SheetsApiError::Status(response.status()));
        }

        let header_row = header.iter().map(ToString::to_string).collect();
        self.append_row(spreadsheet, title, header_row).await
    }

    async fn append_row(
        &self,
        spreadsheet: &SpreadsheetRef,
        title: &str,
        row: Vec<String>,
    ) -> Result<(), Self::Error> {
        let url = format!(
            "{SHEETS_URL}/{}/values/{}:append",
            encode_path_segment(&spreadsheet.id),
            encode_path_segment(title)
        );
        let body = json!({ "values": [row] });
        let response = Request::post(&url)
            .header("Authorization", &self.bearer())
            .query([("valueInputOption", "USER_ENTERED")])
            .json(&body)?
            .send()
            .await?;
        if response.ok() {
            Ok(())
        } else {
            Err(SheetsApiError::Status(response.status()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_query_matches_by_exact_name_anywhere() {
        let q = folder_query("Wandellogboek");
        assert_eq!(
            q,
            "name='Wandellogboek' and mimeType='application/vnd.google-apps.folder' and trashed = false"
        );
    }

    #[test]
    fn query_values_escape_single_quotes() {
        let q = folder_query("Tessa's map");
        assert!(q.starts_with("name='Tessa\\'s map'"));
    }

    #[test]
    fn spreadsheet_query_covers_all_mime_types_in_the_folder() {
        let q = spreadsheet_query("folder-123");
        assert!(q.starts_with("'folder-123' in parents and ("));
        for mime in SPREADSHEET_MIMES {
            assert!(q.contains(&format!("mimeType='{mime}'")), "missing {mime}");
        }
        assert!(q.ends_with(") and trashed = false"));
    }

    #[test]
    fn drive_list_payloads_deserialize() {
        let list: DriveFileList = serde_json::from_str(
            r#"{ "files": [ { "id": "abc", "name": "2026", "createdTime": "2026-01-02T03:04:05Z" } ] }"#,
        )
        .unwrap();
        assert_eq!(list.files.len(), 1);
        assert_eq!(list.files[0].id, "abc");

        let empty: DriveFileList = serde_json::from_str("{}").unwrap();
        assert!(empty.files.is_empty());
    }

    #[test]
    fn spreadsheet_meta_yields_worksheet_titles() {
        let meta: SpreadsheetMeta = serde_json::from_str(
            r#"{ "sheets": [ { "properties": { "title": "Femke" } }, { "properties": { "title": "Daan" } } ] }"#,
        )
        .unwrap();
        let titles: Vec<_> = meta
            .sheets
            .into_iter()
            .map(|sheet| sheet.properties.title)
            .collect();
        assert_eq!(titles, vec!["Femke", "Daan"]);
    }

    #[test]
    fn logbook_config_parses_and_defaults() {
        let config =
            LogbookConfig::from_json(r#"{ "folder": "Wandellogboek" }"#).unwrap();
        assert_eq!(config.folder, "Wandellogboek");
        assert!(config.api_token.is_empty());
        assert!(LogbookConfig::from_json("nope").is_err());
    }
}
