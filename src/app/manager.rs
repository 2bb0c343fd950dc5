//! Account state machine.
//!
//! [`AccountManager`] owns the in-memory [`AccountState`] and is the only
//! writer of durable account data. Every operation takes `&mut self`, so one
//! operation runs at a time; state is mutated only after all storage calls of
//! that operation succeeded, so a storage failure leaves it untouched.

use crate::app::error::{AccountError, FieldGroup};
use crate::app::event::{AccountEvent, Transition};
use crate::app::state::{AccountState, AuthMode, Phase};
use crate::profile::{Profile, ProfileFields};
use crate::storage::{KeyValueStore, SessionStore};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Result of a successful operation: a user-facing message plus the snapshot
/// to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub message: &'static str,
    pub state: AccountState,
}

pub struct AccountManager<S> {
    store: SessionStore<S>,
    state: AccountState,
    subscribers: Vec<mpsc::UnboundedSender<AccountEvent>>,
}

impl<S: KeyValueStore> AccountManager<S> {
    /// Create a manager in the logged-out state. Call
    /// [`check_session`](Self::check_session) to restore a persisted login.
    pub fn new(store: S) -> Self {
        Self {
            store: SessionStore::new(store),
            state: AccountState::default(),
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &AccountState {
        &self.state
    }

    pub fn session_store(&self) -> &SessionStore<S> {
        &self.store
    }

    /// Receive an [`AccountEvent`] after every successful transition.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<AccountEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Rebuild the in-memory state from storage. Runs at startup.
    pub async fn check_session(&mut self) -> Result<Outcome, AccountError> {
        if !self.store.is_session_active().await? {
            debug!("no active session");
            self.state = AccountState {
                auth_mode: self.state.auth_mode,
                ..AccountState::default()
            };
            return Ok(self.outcome("No active session"));
        }

        match self.store.load_profile().await? {
            Some(profile) => {
                self.state = AccountState::logged_in(profile);
                info!("session restored");
                self.emit(Transition::SessionRestored);
                Ok(self.outcome("Session restored"))
            }
            None => {
                warn!("session flag set but no profile is stored");
                self.state = AccountState::restored_without_profile();
                self.emit(Transition::SessionRestored);
                Ok(self.outcome("Session restored"))
            }
        }
    }

    pub fn set_auth_mode(&mut self, mode: AuthMode) -> Result<Outcome, AccountError> {
        self.require_logged_out("switch forms")?;
        if self.state.auth_mode != mode {
            self.state.auth_mode = mode;
            self.emit(Transition::AuthModeChanged);
        }
        Ok(self.outcome(match mode {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }))
    }

    /// Flip between the login and register forms.
    pub fn toggle_auth_mode(&mut self) -> Result<Outcome, AccountError> {
        let mode = self.state.auth_mode.toggled();
        self.set_auth_mode(mode)
    }

    /// Store a new account, replacing any existing one. Does not log in.
    pub async fn register(
        &mut self,
        fields: ProfileFields,
        username: &str,
        password: &str,
    ) -> Result<Outcome, AccountError> {
        self.require_logged_out("register")?;
        require_credentials(username, password)?;
        require_complete(&fields)?;

        let profile = Profile::new(fields, username, password);
        self.store.save_profile(&profile).await?;

        self.state.auth_mode = AuthMode::Login;
        info!("account registered");
        self.emit(Transition::Registered);
        Ok(self.outcome("Registration successful"))
    }

    /// Verify credentials against the stored profile and start a session.
    /// When already viewing the credentials are checked again; a mismatch
    /// leaves the current session as it is. Not available while editing, so an
    /// unsaved draft is never dropped.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<Outcome, AccountError> {
        if self.state.phase() == Phase::Editing {
            return Err(self.invalid_state("log in"));
        }
        require_credentials(username, password)?;

        let profile = match self.store.load_profile().await? {
            Some(profile) if profile.matches_credentials(username, password) => profile,
            _ => {
                warn!("login rejected");
                return Err(AccountError::Authentication);
            }
        };

        self.store.set_session_active(true).await?;
        self.state = AccountState::logged_in(profile);
        info!("logged in");
        self.emit(Transition::LoggedIn);
        Ok(self.outcome("Logged in successfully"))
    }

    /// End the session. This also deletes the stored account, so logging in
    /// again requires registering first. Safe to call in any state.
    pub async fn logout(&mut self) -> Result<Outcome, AccountError> {
        self.store.clear_session().await?;
        self.state = AccountState::default();
        info!("logged out, account data cleared");
        self.emit(Transition::LoggedOut);
        Ok(self.outcome("Logged out"))
    }

    pub fn begin_edit(&mut self) -> Result<Outcome, AccountError> {
        self.require_phase(Phase::Viewing, "edit the profile")?;
        self.state.start_edit();
        self.emit(Transition::EditStarted);
        Ok(self.outcome("Edit Profile"))
    }

    /// Validate and persist edited fields. Username and password never change
    /// here.
    pub async fn save_edit(&mut self, fields: ProfileFields) -> Result<Outcome, AccountError> {
        self.require_phase(Phase::Editing, "save the profile")?;
        require_complete(&fields)?;

        let Some(current) = self.state.current_profile.as_ref() else {
            return Err(self.invalid_state("save the profile"));
        };
        let merged = current.with_fields(fields);
        self.store.save_profile(&merged).await?;

        self.state.finish_edit(Some(merged));
        info!("profile updated");
        self.emit(Transition::ProfileSaved);
        Ok(self.outcome("Profile updated successfully"))
    }

    pub fn cancel_edit(&mut self) -> Result<Outcome, AccountError> {
        self.require_phase(Phase::Editing, "cancel editing")?;
        self.state.finish_edit(None);
        self.emit(Transition::EditCancelled);
        Ok(self.outcome("Edit cancelled"))
    }

    fn outcome(&self, message: &'static str) -> Outcome {
        Outcome {
            message,
            state: self.state.clone(),
        }
    }

    fn emit(&mut self, transition: Transition) {
        let event = AccountEvent {
            transition,
            state: self.state.clone(),
        };
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    fn invalid_state(&self, operation: &'static str) -> AccountError {
        let phase = self.state.phase();
        warn!(operation, %phase, "operation not available");
        AccountError::InvalidState { operation, phase }
    }

    fn require_logged_out(&self, operation: &'static str) -> Result<(), AccountError> {
        if self.state.is_logged_in() {
            return Err(self.invalid_state(operation));
        }
        Ok(())
    }

    fn require_phase(&self, phase: Phase, operation: &'static str) -> Result<(), AccountError> {
        if self.state.phase() != phase {
            return Err(self.invalid_state(operation));
        }
        Ok(())
    }
}

fn require_credentials(username: &str, password: &str) -> Result<(), AccountError> {
    let mut empty = Vec::new();
    if username.is_empty() {
        empty.push("username");
    }
    if password.is_empty() {
        empty.push("password");
    }
    if empty.is_empty() {
        Ok(())
    } else {
        Err(AccountError::validation(FieldGroup::Credentials, empty))
    }
}

fn require_complete(fields: &ProfileFields) -> Result<(), AccountError> {
    let empty = fields.empty_fields();
    if empty.is_empty() {
        Ok(())
    } else {
        Err(AccountError::validation(FieldGroup::Profile, empty))
    }
}
