//! JSON encoding helpers with contract-level errors.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ContractError;

/// Decode a JSON body into one of the contract shapes.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ContractError> {
    serde_json::from_str(body).map_err(ContractError::Decode)
}

/// Encode a contract shape as a JSON body.
pub fn encode<T: Serialize>(value: &T) -> Result<String, ContractError> {
    serde_json::to_string(value).map_err(ContractError::Encode)
}
