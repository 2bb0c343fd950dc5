//! Durable account records on top of a [`KeyValueStore`].

use crate::profile::Profile;
use crate::storage::{KeyValueStore, StorageError};
use tracing::{debug, warn};

/// Key holding the JSON-encoded profile.
pub const PROFILE_KEY: &str = "profile";
/// Key holding the literal `"true"` while a session is active.
pub const SESSION_KEY: &str = "isLoggedIn";

const SESSION_ACTIVE: &str = "true";

/// Owns the two durable records: the single profile and the login flag.
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored profile, or `None` if none was saved. A value that does not
    /// decode also reads as `None`.
    pub async fn load_profile(&self) -> Result<Option<Profile>, StorageError> {
        let Some(raw) = self.store.get_item(PROFILE_KEY).await? else {
            return Ok(None);
        };
        match serde_json::from_str::<Profile>(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                warn!(error = %e, "stored profile is malformed, treating as absent");
                Ok(None)
            }
        }
    }

    /// Overwrite the stored profile. Last write wins.
    pub async fn save_profile(&self, profile: &Profile) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(profile)?;
        self.store.set_item(PROFILE_KEY, &encoded).await?;
        debug!("profile saved");
        Ok(())
    }

    /// Persist the login flag. Callers store the profile before setting it.
    pub async fn set_session_active(&self, active: bool) -> Result<(), StorageError> {
        if active {
            self.store.set_item(SESSION_KEY, SESSION_ACTIVE).await?;
        } else {
            self.store.remove_item(SESSION_KEY).await?;
        }
        debug!(active, "session flag updated");
        Ok(())
    }

    pub async fn is_session_active(&self) -> Result<bool, StorageError> {
        let value = self.store.get_item(SESSION_KEY).await?;
        Ok(value.as_deref() == Some(SESSION_ACTIVE))
    }

    /// Remove the login flag, then the profile.
    ///
    /// The two removals are separate writes. If the profile removal fails the
    /// session is already inactive but the account is still stored; the error
    /// is returned and calling this again finishes the job.
    pub async fn clear_session(&self) -> Result<(), StorageError> {
        self.store.remove_item(SESSION_KEY).await?;
        self.store.remove_item(PROFILE_KEY).await?;
        debug!("session and profile cleared");
        Ok(())
    }
}
