//! Endpoint paths and fixed demo constants for the Core Banking API.
//!
//! Pure data: URL path fragments for each operation, the recognized auth
//! claim scopes, and the sample account identifiers the demo exercises.

use std::fmt;

/// Default Core Banking API address when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8123";

pub const AUTH_TOKEN: &str = "/authToken";
pub const ACCOUNTS: &str = "/accounts";
pub const ACCOUNT_VALIDATE: &str = "/accounts/validate";
pub const ACCOUNT_BALANCE: &str = "/accounts/balance";
pub const TRANSFER: &str = "/transfer";

/// Sample account known to the demo server as valid.
pub const VALID_ACCOUNT: &str = "ACC1000";
/// Sample account the demo server reports as invalid.
pub const INVALID_ACCOUNT: &str = "ACC2000";
/// Sample account that does not exist on the demo server.
pub const NON_EXISTENT_ACCOUNT: &str = "ACC9999";
/// Destination account used by the transfer demos.
pub const TRANSFER_DESTINATION: &str = "ACC1001";

/// Authorization level requested for an auth token.
///
/// `Enquiry` is read-only; `Transfer` also permits moving funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimScope {
    Enquiry,
    Transfer,
}

impl ClaimScope {
    pub const fn as_str(self) -> &'static str {
        match self {
            ClaimScope::Enquiry => "enquiry",
            ClaimScope::Transfer => "transfer",
        }
    }
}

impl fmt::Display for ClaimScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five logical banking operations the client exposes.
///
/// Each operation carries its URL path and its failure-classification
/// policy, so the raising vs pass-through split stays visible in one
/// place instead of being hard-coded per client method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AuthToken,
    ListAccounts,
    ValidateAccount,
    AccountBalance,
    TransferFunds,
}

impl Operation {
    pub const fn path(self) -> &'static str {
        match self {
            Operation::AuthToken => AUTH_TOKEN,
            Operation::ListAccounts => ACCOUNTS,
            Operation::ValidateAccount => ACCOUNT_VALIDATE,
            Operation::AccountBalance => ACCOUNT_BALANCE,
            Operation::TransferFunds => TRANSFER,
        }
    }

    /// Whether a non-2xx response is a failure of the operation itself.
    ///
    /// The server encodes negative business outcomes for validation and
    /// transfer as non-2xx responses, so those bodies pass through to the
    /// caller unclassified. For the remaining operations any non-success
    /// status is unambiguously an error.
    pub const fn classifies_non_success_as_error(self) -> bool {
        match self {
            Operation::AuthToken | Operation::ListAccounts | Operation::AccountBalance => true,
            Operation::ValidateAccount | Operation::TransferFunds => false,
        }
    }

    /// Short label used in error messages and logs.
    pub const fn label(self) -> &'static str {
        match self {
            Operation::AuthToken => "Auth",
            Operation::ListAccounts => "Account listing",
            Operation::ValidateAccount => "Account validation",
            Operation::AccountBalance => "Balance enquiry",
            Operation::TransferFunds => "Funds transfer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_scopes_serialize_to_query_values() {
        assert_eq!(ClaimScope::Enquiry.as_str(), "enquiry");
        assert_eq!(ClaimScope::Transfer.as_str(), "transfer");
        assert_eq!(ClaimScope::Transfer.to_string(), "transfer");
    }

    #[test]
    fn operation_paths_match_api_surface() {
        assert_eq!(Operation::AuthToken.path(), "/authToken");
        assert_eq!(Operation::ListAccounts.path(), "/accounts");
        assert_eq!(Operation::ValidateAccount.path(), "/accounts/validate");
        assert_eq!(Operation::AccountBalance.path(), "/accounts/balance");
        assert_eq!(Operation::TransferFunds.path(), "/transfer");
    }

    #[test]
    fn only_validate_and_transfer_pass_non_success_through() {
        assert!(Operation::AuthToken.classifies_non_success_as_error());
        assert!(Operation::ListAccounts.classifies_non_success_as_error());
        assert!(Operation::AccountBalance.classifies_non_success_as_error());
        assert!(!Operation::ValidateAccount.classifies_non_success_as_error());
        assert!(!Operation::TransferFunds.classifies_non_success_as_error());
    }
}
