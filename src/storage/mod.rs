//! On-device persistence.
//!
//! The storage medium is an opaque async string-keyed store behind
//! [`KeyValueStore`]. [`SessionStore`] sits on top of it and owns the two
//! durable records of the account system: the profile and the login flag.

pub mod file;
pub mod memory;
pub mod session;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use session::SessionStore;

/// Failure of the underlying storage medium.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("storage file {} is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous string-keyed persistence, modelled on the on-device
/// key-value stores mobile clients ship with.
///
/// Each call is atomic with respect to itself. Removing a key that does not
/// exist succeeds.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
