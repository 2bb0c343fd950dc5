use crate::app::state::AccountState;

/// Which transition produced an [`AccountEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Startup found an active session and restored it.
    SessionRestored,
    AuthModeChanged,
    Registered,
    LoggedIn,
    /// The caller should also clear any username/password input it holds.
    LoggedOut,
    EditStarted,
    ProfileSaved,
    EditCancelled,
}

/// Emitted after every successful transition, carrying the new snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountEvent {
    pub transition: Transition,
    pub state: AccountState,
}
