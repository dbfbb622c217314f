//! Checker configuration loaded from environment variables.

use std::env;

use auth_contract::{ContractError, ContractPolicy};

/// Checker configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    /// How inconsistent bodies are treated.
    pub policy: ContractPolicy,
    /// Enable JSON logging.
    pub json_logs: bool,
}

impl CheckConfig {
    /// Load configuration from environment variables.
    ///
    /// `CONTRACT_POLICY` is only read when no `policy_override` is given.
    pub fn from_env(policy_override: Option<ContractPolicy>) -> Result<Self, ContractError> {
        Self::from_lookup(policy_override, |key| env::var(key).ok())
    }

    fn from_lookup(
        policy_override: Option<ContractPolicy>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ContractError> {
        let policy = match (policy_override, lookup("CONTRACT_POLICY")) {
            (Some(policy), _) => policy,
            (None, Some(value)) => value.parse()?,
            (None, None) => ContractPolicy::default(),
        };

        Ok(Self {
            policy,
            json_logs: lookup("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        })
    }
}
