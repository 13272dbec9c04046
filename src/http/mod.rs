//! HTTP client module for Core Banking API communication.
//!
//! The module is organized into:
//!
//! - [`BankingApiClient`] - the client exposing one method per banking
//!   operation, each returning the raw response body as text
//! - [`BankingError`] - error types for transport and server failures
//! - [`endpoints`] - endpoint paths, claim scopes, and demo constants

mod banking_client;
pub mod endpoints;
mod error;

pub use banking_client::BankingApiClient;
pub use endpoints::{
    ClaimScope, Operation, DEFAULT_BASE_URL, INVALID_ACCOUNT, NON_EXISTENT_ACCOUNT,
    TRANSFER_DESTINATION, VALID_ACCOUNT,
};
pub use error::BankingError;
