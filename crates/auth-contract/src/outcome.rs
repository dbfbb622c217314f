//! Tagged success/failure view of a result shape.
//!
//! The wire shapes keep `data` and `error` as independent optional fields, so
//! nothing stops a backend from sending `success: true` together with an
//! `error`. [`Outcome`] cannot represent that state; converting into it goes
//! through a [`ContractPolicy`] that decides whether such payloads are
//! rejected or tolerated.

use std::fmt;
use std::str::FromStr;

use crate::error::ContractError;

/// Failure text used when a lenient check accepts a failure without a message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Result of one authentication operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Failure(String),
}

impl<T> Outcome<T> {
    pub fn failure(error: impl Into<String>) -> Self {
        Outcome::Failure(error.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(data) => Outcome::Success(f(data)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Convert into a plain `Result`, with the backend message as the error.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Outcome::Success(data) => Ok(data),
            Outcome::Failure(error) => Err(error),
        }
    }
}

/// How inconsistent wire values are handled when building an [`Outcome`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContractPolicy {
    /// Reject any payload whose fields contradict its `success` flag.
    #[default]
    Strict,
    /// Trust the `success` flag, drop contradicting fields with a warning.
    Lenient,
}

impl ContractPolicy {
    pub fn is_strict(self) -> bool {
        self == ContractPolicy::Strict
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContractPolicy::Strict => "strict",
            ContractPolicy::Lenient => "lenient",
        }
    }

    /// Fail with `err` under the strict policy, otherwise log and carry on.
    pub(crate) fn tolerate(self, err: ContractError) -> Result<(), ContractError> {
        if self.is_strict() {
            return Err(err);
        }
        tracing::warn!(policy = self.as_str(), "Accepting inconsistent payload: {}", err);
        Ok(())
    }
}

impl fmt::Display for ContractPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractPolicy {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(ContractPolicy::Strict),
            "lenient" => Ok(ContractPolicy::Lenient),
            _ => Err(ContractError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Resolve the `{ success, data?, error? }` triple into an outcome.
pub(crate) fn resolve<T>(
    success: bool,
    data: Option<T>,
    error: Option<String>,
    policy: ContractPolicy,
) -> Result<Outcome<T>, ContractError> {
    if success {
        let data = data.ok_or(ContractError::MissingData)?;
        if error.is_some() {
            policy.tolerate(ContractError::Conflicting("error present on success"))?;
        }
        return Ok(Outcome::Success(data));
    }

    if data.is_some() {
        policy.tolerate(ContractError::Conflicting("data present on failure"))?;
    }
    match error {
        Some(error) => Ok(Outcome::Failure(error)),
        None => {
            policy.tolerate(ContractError::MissingError)?;
            Ok(Outcome::Failure(UNKNOWN_ERROR.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parsing() {
        assert_eq!("strict".parse::<ContractPolicy>().unwrap(), ContractPolicy::Strict);
        assert_eq!(" Lenient ".parse::<ContractPolicy>().unwrap(), ContractPolicy::Lenient);
        assert!(matches!(
            "loose".parse::<ContractPolicy>(),
            Err(ContractError::UnknownPolicy(_))
        ));
        assert_eq!(ContractPolicy::default(), ContractPolicy::Strict);
    }

    #[test]
    fn test_resolve_success() {
        let outcome = resolve(true, Some(1), None, ContractPolicy::Strict).unwrap();
        assert_eq!(outcome, Outcome::Success(1));
    }

    #[test]
    fn test_resolve_failure() {
        let outcome =
            resolve::<i32>(false, None, Some("nope".to_string()), ContractPolicy::Strict).unwrap();
        assert_eq!(outcome.error(), Some("nope"));
    }

    #[test]
    fn test_resolve_missing_data_fails_under_both_policies() {
        for policy in [ContractPolicy::Strict, ContractPolicy::Lenient] {
            let result = resolve::<i32>(true, None, None, policy);
            assert!(matches!(result, Err(ContractError::MissingData)));
        }
    }

    #[test]
    fn test_resolve_error_on_success() {
        let strict = resolve(true, Some(1), Some("boom".to_string()), ContractPolicy::Strict);
        assert!(matches!(strict, Err(ContractError::Conflicting(_))));

        let lenient =
            resolve(true, Some(1), Some("boom".to_string()), ContractPolicy::Lenient).unwrap();
        assert_eq!(lenient, Outcome::Success(1));
    }

    #[test]
    fn test_resolve_data_on_failure() {
        let strict = resolve(false, Some(1), Some("boom".to_string()), ContractPolicy::Strict);
        assert!(matches!(strict, Err(ContractError::Conflicting(_))));

        let lenient =
            resolve(false, Some(1), Some("boom".to_string()), ContractPolicy::Lenient).unwrap();
        assert_eq!(lenient, Outcome::Failure("boom".to_string()));
    }

    #[test]
    fn test_resolve_missing_error() {
        let strict = resolve::<i32>(false, None, None, ContractPolicy::Strict);
        assert!(matches!(strict, Err(ContractError::MissingError)));

        let lenient = resolve::<i32>(false, None, None, ContractPolicy::Lenient).unwrap();
        assert_eq!(lenient.error(), Some(UNKNOWN_ERROR));
    }

    #[test]
    fn test_outcome_helpers() {
        let ok: Outcome<i32> = Outcome::Success(2);
        assert!(ok.is_success());
        assert_eq!(ok.clone().map(|n| n * 2), Outcome::Success(4));
        assert_eq!(ok.into_result(), Ok(2));

        let failed: Outcome<i32> = Outcome::failure("bad");
        assert!(!failed.is_success());
        assert_eq!(failed.data(), None);
        assert_eq!(failed.into_result(), Err("bad".to_string()));
    }
}
