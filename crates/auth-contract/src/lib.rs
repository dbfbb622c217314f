//! # Auth Contract
//!
//! Request/response shapes for the authentication API (register, login,
//! logout, change-password), shared between the backend and its clients.
//!
//! The wire shapes in [`response`] mirror the JSON bodies exactly, optional
//! fields included. [`outcome`] provides the tagged view of the same data and
//! the checked conversion into it.

pub mod codec;
pub mod dto;
pub mod error;
pub mod operation;
pub mod outcome;
pub mod response;

pub use dto::{ChangePasswordRequest, LoginData, MessageData, User};
pub use error::ContractError;
pub use operation::{Operation, Verdict, check_body};
pub use outcome::{ContractPolicy, Outcome};
pub use response::{
    ApiResult, ChangePasswordPayload, ChangePasswordResult, LoginResult, LogoutResult,
    RegisterResult,
};
