//! Web-specific bindings for the core crate.
//!
//! Re-exports the platform-agnostic types and provides the `localStorage`
//! backed session store the browser uses across UI re-executions.

use gloo::storage::{LocalStorage, Storage};

// Re-export all types from doolhof-game
pub use doolhof_game::*;

const SESSION_KEY: &str = "doolhof.session";

/// Errors raised by the browser session store.
#[derive(Debug, thiserror::Error)]
pub enum WebStoreError {
    #[error("localStorage unavailable or rejected the write: {0}")]
    Storage(String),
    #[error("stored session could not be decoded")]
    Decode(#[source] serde_json::Error),
}

/// [`SessionStore`] over the browser's `localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebSessionStore;

impl SessionStore for WebSessionStore {
    type Error = WebStoreError;

    fn save(&self, session: &Session) -> Result<(), Self::Error> {
        LocalStorage::set(SESSION_KEY, session)
            .map_err(|err| WebStoreError::Storage(err.to_string()))
    }

    fn load(&self) -> Result<Option<Session>, Self::Error> {
        match LocalStorage::raw().get_item(SESSION_KEY) {
            Ok(Some(text)) => serde_json::from_str(&text)
                .map(Some)
                .map_err(WebStoreError::Decode),
            Ok(None) => Ok(None),
            Err(err) => Err(WebStoreError::Storage(crate::dom::js_error_message(&err))),
        }
    }

    fn clear(&self) -> Result<(), Self::Error> {
        LocalStorage::delete(SESSION_KEY);
        Ok(())
    }
}
