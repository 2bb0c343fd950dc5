use crate::app::state::Phase;
use crate::storage::StorageError;
use thiserror::Error;

/// Which form a validation failure came from; picks the user-facing wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    Credentials,
    Profile,
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("{}", validation_message(.group))]
    Validation {
        group: FieldGroup,
        fields: Vec<&'static str>,
    },

    /// Deliberately the same for a missing account and a wrong password.
    #[error("Invalid credentials")]
    Authentication,

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("cannot {operation} while {phase}")]
    InvalidState {
        operation: &'static str,
        phase: Phase,
    },
}

fn validation_message(group: &FieldGroup) -> &'static str {
    match group {
        FieldGroup::Credentials => "Please fill in all fields",
        FieldGroup::Profile => "Please fill in all profile fields",
    }
}

impl AccountError {
    pub(crate) fn validation(group: FieldGroup, fields: Vec<&'static str>) -> Self {
        AccountError::Validation { group, fields }
    }

    /// True for the failures a user can fix by changing their input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AccountError::Validation { .. } | AccountError::Authentication
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AccountError::validation(FieldGroup::Credentials, vec!["password"]);
        assert_eq!(err.to_string(), "Please fill in all fields");
        let err = AccountError::validation(FieldGroup::Profile, vec!["email"]);
        assert_eq!(err.to_string(), "Please fill in all profile fields");
        assert_eq!(AccountError::Authentication.to_string(), "Invalid credentials");

        let err = AccountError::InvalidState {
            operation: "log in",
            phase: Phase::Viewing,
        };
        assert_eq!(err.to_string(), "cannot log in while logged in (viewing)");
    }

    #[test]
    fn test_storage_error_is_transparent() {
        let err: AccountError = StorageError::Unavailable("disk full".into()).into();
        assert_eq!(err.to_string(), "storage unavailable: disk full");
        assert!(!err.is_recoverable());
        assert!(AccountError::Authentication.is_recoverable());
    }
}
