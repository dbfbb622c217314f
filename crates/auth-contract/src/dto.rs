//! Data Transfer Objects - entities and payload bodies carried by the auth API.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// An authenticated principal, as returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier.
    pub id: i64,
    pub username: String,
}

impl User {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }

    /// Check the invariants the wire shape cannot express.
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.username.trim().is_empty() {
            return Err(ContractError::InvalidUser("username is empty".to_string()));
        }
        Ok(())
    }
}

/// `data` body shared by register, logout and change-password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageData {
    pub message: String,
}

impl MessageData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `data` body of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    pub message: String,
    pub token: String,
    pub user: User,
}

/// Request half of the change-password payload.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

impl ChangePasswordRequest {
    pub fn new(old_password: impl Into<String>, new_password: impl Into<String>) -> Self {
        Self {
            old_password: old_password.into(),
            new_password: new_password.into(),
        }
    }
}

// Passwords never reach logs.
impl fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordRequest")
            .field("old_password", &"<redacted>")
            .field("new_password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_round_trip() {
        let user = User::new(42, "alice");

        let encoded = serde_json::to_string(&user).unwrap();
        let decoded: User = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, user);
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({ "id": 42, "username": "alice" })
        );
    }

    #[test]
    fn test_user_rejects_empty_username() {
        assert!(User::new(1, "bob").validate().is_ok());

        let result = User::new(1, "   ").validate();
        assert!(matches!(result, Err(ContractError::InvalidUser(_))));
    }

    #[test]
    fn test_user_rejects_non_integer_id() {
        let result = serde_json::from_value::<User>(json!({ "id": "42", "username": "alice" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_change_password_request_uses_camel_case() {
        let request = ChangePasswordRequest::new("old-secret", "new-secret");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "oldPassword": "old-secret", "newPassword": "new-secret" })
        );
    }

    #[test]
    fn test_change_password_request_debug_is_redacted() {
        let request = ChangePasswordRequest::new("old-secret", "new-secret");
        let debug = format!("{:?}", request);

        assert!(!debug.contains("old-secret"));
        assert!(!debug.contains("new-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
