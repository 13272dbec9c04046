//! Error types for Core Banking API client operations.
//!
//! Transport failures are re-classified in exactly one place (the client's
//! request primitive) into [`BankingError::Network`]; status-code
//! interpretation is layered on top per operation.

use thiserror::Error;

/// Errors returned by [`BankingApiClient`](super::BankingApiClient) methods.
#[derive(Debug, Error)]
pub enum BankingError {
    /// The HTTP transport could not complete the exchange (connection
    /// refused, DNS failure, timeout). Carries the original transport
    /// message.
    #[error("Network error: {0}")]
    Network(String),

    /// The server responded with a status the operation classifies as a
    /// failure. Carries the status code, status text, and raw body for
    /// diagnostic display.
    ///
    /// Validation and transfer never produce this variant; their non-2xx
    /// responses are valid negative business outcomes and pass through
    /// as the operation's result.
    #[error("{operation} failed: {status} {status_text} - {body}")]
    OperationFailed {
        operation: &'static str,
        status: u16,
        status_text: String,
        body: String,
    },

    /// The composed request URL was invalid.
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// The configured base URL cannot carry appended path segments.
    #[error("Base URL cannot carry path segments: {0}")]
    NotABaseUrl(String),
}

impl BankingError {
    /// Builds a [`BankingError::Network`] from a transport failure.
    ///
    /// `reqwest::Error`'s display alone stops at "error sending request";
    /// the actual cause (connection refused, DNS failure) lives further
    /// down the source chain, so the chain is folded into the message.
    pub(crate) fn network(e: reqwest::Error) -> Self {
        use std::error::Error;

        let mut message = e.to_string();
        let mut source = e.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        BankingError::Network(message)
    }
}
