//! Account logic: state, transitions, and change notification.

pub mod error;
pub mod event;
pub mod manager;
pub mod state;

pub use error::{AccountError, FieldGroup};
pub use event::{AccountEvent, Transition};
pub use manager::{AccountManager, Outcome};
pub use state::{AccountState, AuthMode, Phase};
