//! Contract-level error types.

use thiserror::Error;

/// Errors raised while decoding or checking a payload against the contract.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("Malformed payload: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Successful result carries no data")]
    MissingData,

    #[error("Failed result carries no error message")]
    MissingError,

    #[error("Inconsistent result: {0}")]
    Conflicting(&'static str),

    #[error("Top-level token does not match data.token")]
    TokenMismatch,

    #[error("Invalid user: {0}")]
    InvalidUser(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Unknown contract policy: {0}")]
    UnknownPolicy(String),
}

impl ContractError {
    /// Whether the payload was well-formed JSON of the right shape but
    /// violated a consistency rule.
    pub fn is_violation(&self) -> bool {
        matches!(
            self,
            ContractError::MissingData
                | ContractError::MissingError
                | ContractError::Conflicting(_)
                | ContractError::TokenMismatch
                | ContractError::InvalidUser(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_classification() {
        assert!(ContractError::MissingData.is_violation());
        assert!(ContractError::Conflicting("error on success").is_violation());
        assert!(!ContractError::UnknownOperation("signup".to_string()).is_violation());

        let decode_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!ContractError::Decode(decode_err).is_violation());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ContractError::InvalidUser("username is empty".to_string()).to_string(),
            "Invalid user: username is empty"
        );
        assert_eq!(
            ContractError::TokenMismatch.to_string(),
            "Top-level token does not match data.token"
        );
    }
}
