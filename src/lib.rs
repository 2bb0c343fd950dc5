//! Single-user local account manager.
//!
//! One person registers a profile, logs in against it, views and edits it,
//! and logs out. Everything is persisted on-device through a pluggable
//! [`KeyValueStore`](storage::KeyValueStore); the presentation layer drives
//! an [`AccountManager`] and renders the [`AccountState`] it returns.

pub mod app;
pub mod config;
pub mod logging;
pub mod profile;
pub mod storage;

pub use app::{AccountError, AccountEvent, AccountManager, AccountState, AuthMode, Outcome, Phase};
pub use config::AppConfig;
pub use profile::{Profile, ProfileFields};

use anyhow::{Context, Result};
use storage::FileStore;

/// Open the configured file store and restore any persisted session.
pub async fn start(config: &AppConfig) -> Result<AccountManager<FileStore>> {
    let store = FileStore::from_config(&config.storage);
    let path = store.path().to_path_buf();
    let mut manager = AccountManager::new(store);
    manager
        .check_session()
        .await
        .with_context(|| format!("Failed to restore session from {}", path.display()))?;
    Ok(manager)
}
