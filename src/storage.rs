/// Persistence of the group list in extension storage

use crate::config::STORAGE_KEY;
use crate::model::Group;
use crate::state::BookmarkState;
use log::{debug, error, info};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("storage API not available")]
    Unavailable,

    #[error("storage operation failed: {0}")]
    Operation(String),

    #[error("failed to decode stored bookmark groups: {0}")]
    Decode(String),

    #[error("failed to encode bookmark groups: {0}")]
    Encode(String),
}

/// Asynchronous single-key store supplied by the host environment
///
/// Futures are awaited on the UI thread and need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    fn is_available(&self) -> bool;

    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError>;

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StorageError>;
}

/// Result of reading the stored group list at startup
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded {
    Stored(Vec<Group>),
    Empty,
    Unavailable,
    Failed(StorageError),
}

pub async fn load_groups<S: KeyValueStore>(store: &S) -> Loaded {
    if !store.is_available() {
        info!("Storage API not available. Initializing with default bookmarks.");
        return Loaded::Unavailable;
    }

    let value = match store.get(STORAGE_KEY).await {
        Ok(Some(value)) => value,
        Ok(None) => return Loaded::Empty,
        Err(e) => {
            error!("Error loading bookmarks: {}", e);
            return Loaded::Failed(e);
        }
    };

    match serde_json::from_value::<Vec<Group>>(value) {
        Ok(groups) if groups.is_empty() => Loaded::Empty,
        Ok(groups) => Loaded::Stored(groups),
        Err(e) => {
            let e = StorageError::Decode(e.to_string());
            error!("Error loading bookmarks: {}", e);
            Loaded::Failed(e)
        }
    }
}

/// Write the full group list under the storage key
///
/// Failures are logged and returned; the caller's in-memory state stays as it is.
pub async fn save_groups<S: KeyValueStore>(store: &S, groups: &[Group]) -> Result<(), StorageError> {
    if !store.is_available() {
        info!("Storage API not available. Bookmarks not saved.");
        return Err(StorageError::Unavailable);
    }

    let value = serde_json::to_value(groups).map_err(|e| StorageError::Encode(e.to_string()))?;

    match store.set(STORAGE_KEY, value).await {
        Ok(()) => {
            info!("Bookmarks saved");
            Ok(())
        }
        Err(e) => {
            error!("Error saving bookmarks: {}", e);
            Err(e)
        }
    }
}

/// Build the startup state, seeding and persisting defaults when nothing usable is stored
pub async fn initialize<S: KeyValueStore>(store: &S) -> BookmarkState {
    let loaded = load_groups(store).await;
    debug!("Startup load outcome: {:?}", loaded);

    if let Loaded::Stored(groups) = loaded {
        if let Some(state) = BookmarkState::from_groups(groups) {
            return state;
        }
    }

    let state = BookmarkState::default();
    // Failure is already logged; the defaults still work in memory.
    let _ = save_groups(store, state.groups()).await;
    state
}
