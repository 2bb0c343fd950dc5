use crate::profile::{Profile, ProfileFields};
use std::fmt;

/// Which form a logged-out user is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

/// Coarse state-machine position, derived from [`AccountState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    LoggedOut(AuthMode),
    Viewing,
    Editing,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::LoggedOut(AuthMode::Login) => write!(f, "logged out (login)"),
            Phase::LoggedOut(AuthMode::Register) => write!(f, "logged out (register)"),
            Phase::Viewing => write!(f, "logged in (viewing)"),
            Phase::Editing => write!(f, "logged in (editing)"),
        }
    }
}

/// In-memory view of the account, rebuilt from storage at startup and never
/// persisted itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountState {
    pub authenticated: bool,
    pub current_profile: Option<Profile>,
    pub editing: bool,
    pub auth_mode: AuthMode,
    /// Edit draft, present only while editing.
    pub draft: Option<ProfileFields>,
}

impl AccountState {
    pub fn phase(&self) -> Phase {
        match (self.authenticated, self.editing) {
            (false, _) => Phase::LoggedOut(self.auth_mode),
            (true, false) => Phase::Viewing,
            (true, true) => Phase::Editing,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.authenticated
    }

    pub(crate) fn logged_in(profile: Profile) -> Self {
        Self {
            authenticated: true,
            current_profile: Some(profile),
            ..Self::default()
        }
    }

    /// Active session whose stored profile is missing or unreadable.
    pub(crate) fn restored_without_profile() -> Self {
        Self {
            authenticated: true,
            ..Self::default()
        }
    }

    /// The draft starts empty when there is no current profile.
    pub(crate) fn start_edit(&mut self) {
        self.draft = Some(
            self.current_profile
                .as_ref()
                .map(|p| p.fields.clone())
                .unwrap_or_default(),
        );
        self.editing = true;
    }

    pub(crate) fn finish_edit(&mut self, profile: Option<Profile>) {
        if let Some(profile) = profile {
            self.current_profile = Some(profile);
        }
        self.draft = None;
        self.editing = false;
    }
}
