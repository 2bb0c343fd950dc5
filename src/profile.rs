//! The account record and its editable subset.
//!
//! A [`Profile`] is stored as a single JSON object under the `profile` key:
//!
//! ```json
//! {"firstName": "...", "lastName": "...", "email": "...", "contactNumber": "...",
//!  "address": "...", "profilePicture": "...", "username": "...", "password": "..."}
//! ```
//!
//! Credentials are kept and compared in plaintext. This is a known weakness
//! of the storage format, not something this module tries to hide.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown in place of the profile picture when none is set.
pub const PLACEHOLDER_AVATAR_URL: &str = "https://via.placeholder.com/120";

/// Personal fields of a profile: everything except the credentials.
///
/// Used as registration input and as the edit draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub address: String,
    #[serde(rename = "profilePicture")]
    pub profile_picture_url: String,
}

impl ProfileFields {
    /// Names of the fields that are empty, in form order.
    pub fn empty_fields(&self) -> Vec<&'static str> {
        [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("contactNumber", &self.contact_number),
            ("address", &self.address),
            ("profilePicture", &self.profile_picture_url),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.empty_fields().is_empty()
    }
}

/// The single durable account record.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(flatten)]
    pub fields: ProfileFields,
    pub username: String,
    pub password: String,
}

impl Profile {
    pub fn new(fields: ProfileFields, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            fields,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive comparison. No trimming or normalization.
    pub fn matches_credentials(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// Replace the personal fields, keeping the credentials.
    pub fn with_fields(&self, fields: ProfileFields) -> Self {
        Self {
            fields,
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }

    /// "First Last", as shown on the profile screen.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.fields.first_name, self.fields.last_name)
    }

    pub fn avatar_url(&self) -> &str {
        if self.fields.profile_picture_url.is_empty() {
            PLACEHOLDER_AVATAR_URL
        } else {
            &self.fields.profile_picture_url
        }
    }

    /// Names of all empty fields, credentials included.
    pub fn empty_fields(&self) -> Vec<&'static str> {
        let mut empty = self.fields.empty_fields();
        if self.username.is_empty() {
            empty.push("username");
        }
        if self.password.is_empty() {
            empty.push("password");
        }
        empty
    }

    pub fn is_complete(&self) -> bool {
        self.empty_fields().is_empty()
    }
}

// Keep the password out of logs and panic messages.
impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("fields", &self.fields)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> ProfileFields {
        ProfileFields {
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@b.com".into(),
            contact_number: "123".into(),
            address: "X".into(),
            profile_picture_url: "http://i".into(),
        }
    }

    #[test]
    fn test_wire_format_uses_original_keys() {
        let profile = Profile::new(sample_fields(), "u1", "p1");
        let json: serde_json::Value = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "A",
                "lastName": "B",
                "email": "a@b.com",
                "contactNumber": "123",
                "address": "X",
                "profilePicture": "http://i",
                "username": "u1",
                "password": "p1",
            })
        );
    }

    #[test]
    fn test_empty_fields() {
        assert!(sample_fields().is_complete());

        let mut fields = sample_fields();
        fields.email.clear();
        fields.address.clear();
        assert_eq!(fields.empty_fields(), vec!["email", "address"]);

        let profile = Profile::new(sample_fields(), "", "pw");
        assert_eq!(profile.empty_fields(), vec!["username"]);
        assert!(!profile.is_complete());
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let mut fields = sample_fields();
        fields.first_name = " ".into();
        assert!(fields.is_complete());
    }

    #[test]
    fn test_credentials_are_exact() {
        let profile = Profile::new(sample_fields(), "Alice", "pw1");
        assert!(profile.matches_credentials("Alice", "pw1"));
        assert!(!profile.matches_credentials("alice", "pw1"));
        assert!(!profile.matches_credentials("Alice ", "pw1"));
        assert!(!profile.matches_credentials("Alice", "PW1"));
    }

    #[test]
    fn test_with_fields_keeps_credentials() {
        let profile = Profile::new(sample_fields(), "u1", "p1");
        let mut fields = sample_fields();
        fields.first_name = "Z".into();
        let merged = profile.with_fields(fields.clone());
        assert_eq!(merged.fields, fields);
        assert_eq!(merged.username, "u1");
        assert_eq!(merged.password, "p1");
    }

    #[test]
    fn test_display_helpers() {
        let mut profile = Profile::new(sample_fields(), "u1", "p1");
        assert_eq!(profile.display_name(), "A B");
        assert_eq!(profile.avatar_url(), "http://i");
        profile.fields.profile_picture_url.clear();
        assert_eq!(profile.avatar_url(), PLACEHOLDER_AVATAR_URL);
    }

    #[test]
    fn test_debug_redacts_password() {
        let profile = Profile::new(sample_fields(), "u1", "secret-pw");
        let rendered = format!("{:?}", profile);
        assert!(rendered.contains("u1"));
        assert!(!rendered.contains("secret-pw"));
    }
}
