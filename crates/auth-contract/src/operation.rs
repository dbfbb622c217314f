//! The four auth operations and their payload shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::decode;
use crate::error::ContractError;
use crate::outcome::{ContractPolicy, Outcome};
use crate::response::{ChangePasswordPayload, LoginResult, LogoutResult, RegisterResult};

/// An authentication operation exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Register,
    Logout,
    Login,
    ChangePassword,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Register,
        Operation::Logout,
        Operation::Login,
        Operation::ChangePassword,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Register => "register",
            Operation::Logout => "logout",
            Operation::Login => "login",
            Operation::ChangePassword => "change-password",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "register" => Ok(Operation::Register),
            "logout" => Ok(Operation::Logout),
            "login" => Ok(Operation::Login),
            "change-password" | "change_password" | "changePassword" => {
                Ok(Operation::ChangePassword)
            }
            other => Err(ContractError::UnknownOperation(other.to_string())),
        }
    }
}

/// Summary of a body that conforms to the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub operation: Operation,
    pub success: bool,
    /// `data.message` on success, the backend error on failure.
    pub message: String,
}

impl Verdict {
    fn new(operation: Operation, outcome: Outcome<String>) -> Self {
        let success = outcome.is_success();
        let message = match outcome {
            Outcome::Success(message) | Outcome::Failure(message) => message,
        };
        Self {
            operation,
            success,
            message,
        }
    }
}

/// Decode `body` as the result of `operation` and check it under `policy`.
pub fn check_body(
    operation: Operation,
    body: &str,
    policy: ContractPolicy,
) -> Result<Verdict, ContractError> {
    let outcome = match operation {
        Operation::Register => decode::<RegisterResult>(body)?
            .into_outcome(policy)?
            .map(|data| data.message),
        Operation::Logout => decode::<LogoutResult>(body)?
            .into_outcome(policy)?
            .map(|data| data.message),
        Operation::Login => decode::<LoginResult>(body)?
            .into_outcome(policy)?
            .map(|data| data.message),
        Operation::ChangePassword => {
            let (_request, outcome) = decode::<ChangePasswordPayload>(body)?.into_outcome(policy)?;
            outcome.map(|data| data.message)
        }
    };

    tracing::debug!(
        operation = %operation,
        policy = %policy,
        success = outcome.is_success(),
        "Body conforms to contract"
    );

    Ok(Verdict::new(operation, outcome))
}
