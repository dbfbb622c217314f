//! Result shapes returned by the auth API.
//!
//! These mirror the JSON bodies field for field. `None` fields are omitted
//! on encode, and absent or `null` fields decode to `None`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dto::{ChangePasswordRequest, LoginData, MessageData};
use crate::error::ContractError;
use crate::outcome::{ContractPolicy, Outcome, resolve};

/// Standard `{ success, data?, error? }` result envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    pub fn into_outcome(self, policy: ContractPolicy) -> Result<Outcome<T>, ContractError> {
        resolve(self.success, self.data, self.error, policy)
    }
}

impl<T> From<Outcome<T>> for ApiResult<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(data) => Self::ok(data),
            Outcome::Failure(error) => Self::failure(error),
        }
    }
}

/// Result of `register`.
pub type RegisterResult = ApiResult<MessageData>;

/// Result of `logout`. Same shape as [`RegisterResult`].
pub type LogoutResult = RegisterResult;

/// Response half of `changePassword`.
pub type ChangePasswordResult = ApiResult<MessageData>;

/// Result of `login`.
///
/// The session token is sent twice on success: at the top level and inside
/// `data`. Both are kept on the wire; [`LoginResult::token`] reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<LoginData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoginResult {
    /// Successful login; the top-level token is copied from `data.token`.
    pub fn ok(data: LoginData) -> Self {
        Self {
            success: true,
            token: Some(data.token.clone()),
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            token: None,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Session token, preferring `data.token` over the top-level copy.
    pub fn token(&self) -> Option<&str> {
        self.data
            .as_ref()
            .map(|data| data.token.as_str())
            .or(self.token.as_deref())
    }

    pub fn into_outcome(self, policy: ContractPolicy) -> Result<Outcome<LoginData>, ContractError> {
        let LoginResult {
            success,
            token,
            data,
            error,
        } = self;

        if !success && token.is_some() {
            policy.tolerate(ContractError::Conflicting("token present on failure"))?;
        }

        let outcome = resolve(success, data, error, policy)?;

        if let Outcome::Success(data) = &outcome {
            if token.as_deref().is_some_and(|top| top != data.token) {
                policy.tolerate(ContractError::TokenMismatch)?;
            }
            if let Err(err) = data.user.validate() {
                policy.tolerate(err)?;
            }
        }

        Ok(outcome)
    }
}

impl From<Outcome<LoginData>> for LoginResult {
    fn from(outcome: Outcome<LoginData>) -> Self {
        match outcome {
            Outcome::Success(data) => Self::ok(data),
            Outcome::Failure(error) => Self::failure(error),
        }
    }
}

/// Combined change-password body: the request fields travel alongside the
/// result fields in one object.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordPayload {
    pub old_password: String,
    pub new_password: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MessageData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChangePasswordPayload {
    pub fn from_parts(request: ChangePasswordRequest, result: ChangePasswordResult) -> Self {
        Self {
            old_password: request.old_password,
            new_password: request.new_password,
            success: result.success,
            data: result.data,
            error: result.error,
        }
    }

    /// Separate the request fields from the result fields.
    pub fn split(self) -> (ChangePasswordRequest, ChangePasswordResult) {
        let request = ChangePasswordRequest {
            old_password: self.old_password,
            new_password: self.new_password,
        };
        let result = ApiResult {
            success: self.success,
            data: self.data,
            error: self.error,
        };
        (request, result)
    }

    pub fn into_outcome(
        self,
        policy: ContractPolicy,
    ) -> Result<(ChangePasswordRequest, Outcome<MessageData>), ContractError> {
        let (request, result) = self.split();
        Ok((request, result.into_outcome(policy)?))
    }
}

impl fmt::Debug for ChangePasswordPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordPayload")
            .field("old_password", &"<redacted>")
            .field("new_password", &"<redacted>")
            .field("success", &self.success)
            .field("data", &self.data)
            .field("error", &self.error)
            .finish()
    }
}
