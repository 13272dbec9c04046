//! HTTP client for the Core Banking API.
//!
//! [`BankingApiClient`] translates the five logical banking operations into
//! HTTP calls against a configured base URL and returns raw response bodies
//! as text. Responses are never deserialized here; the demo prints them and
//! callers interpret them.
//!
//! # Failure policy
//!
//! Each operation's [`Operation::classifies_non_success_as_error`] flag
//! decides whether a non-2xx response is reported as a
//! [`BankingError::OperationFailed`] or returned as the operation's result.
//! Transport failures are always [`BankingError::Network`], raised from the
//! single internal request primitive.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde_json::json;
use url::Url;

use super::endpoints::{ClaimScope, Operation, DEFAULT_BASE_URL};
use super::error::BankingError;

/// Async client for the Core Banking HTTP API.
///
/// Holds only the normalized base URL and one `reqwest::Client` for the
/// process lifetime. Safe to share across tasks; no state is mutated
/// between calls.
#[derive(Debug, Clone)]
pub struct BankingApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl Default for BankingApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl BankingApiClient {
    /// Creates a client for the API at `base_url`.
    ///
    /// Any trailing slash is stripped so concatenation with endpoint paths
    /// never produces a double slash.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests an auth token for the given claim scope.
    ///
    /// POST `/authToken?claim=<scope>` with a JSON `{username, password}`
    /// body. Any non-success status is an [`BankingError::OperationFailed`].
    pub async fn get_auth_token(
        &self,
        claim: ClaimScope,
        username: &str,
        password: &str,
    ) -> Result<String, BankingError> {
        let mut url = self.endpoint(Operation::AuthToken.path())?;
        url.query_pairs_mut().append_pair("claim", claim.as_str());

        let body = json!({ "username": username, "password": password });
        debug!(claim:% = claim; "Requesting auth token");

        let response = self
            .request(Method::POST, url, HeaderMap::new(), Some(body))
            .await?;
        self.read_response(Operation::AuthToken, response).await
    }

    /// Lists all accounts. GET `/accounts`; non-success is an error.
    pub async fn list_accounts(&self) -> Result<String, BankingError> {
        let url = self.endpoint(Operation::ListAccounts.path())?;
        let response = self.request(Method::GET, url, HeaderMap::new(), None).await?;
        self.read_response(Operation::ListAccounts, response).await
    }

    /// Validates an account identifier.
    ///
    /// GET `/accounts/validate/<accountId>` with the identifier
    /// percent-encoded as a path segment. The body is returned for any
    /// status: the server signals "invalid account" with non-2xx responses,
    /// so interpretation is left to the caller.
    pub async fn validate_account(&self, account_id: &str) -> Result<String, BankingError> {
        let url = self.endpoint_with_segment(Operation::ValidateAccount.path(), account_id)?;
        let response = self.request(Method::GET, url, HeaderMap::new(), None).await?;
        self.read_response(Operation::ValidateAccount, response).await
    }

    /// Fetches an account's balance.
    ///
    /// GET `/accounts/balance/<accountId>`; non-success is an error.
    pub async fn account_balance(&self, account_id: &str) -> Result<String, BankingError> {
        let url = self.endpoint_with_segment(Operation::AccountBalance.path(), account_id)?;
        let response = self.request(Method::GET, url, HeaderMap::new(), None).await?;
        self.read_response(Operation::AccountBalance, response).await
    }

    /// Transfers funds between two accounts.
    ///
    /// POST `/transfer` with a JSON `{fromAccount, toAccount, amount}` body.
    /// Like validation, the body is returned for any status; a rejected
    /// transfer is a business outcome, not a client error.
    pub async fn transfer_funds(
        &self,
        from_account: &str,
        to_account: &str,
        amount: f64,
    ) -> Result<String, BankingError> {
        let url = self.endpoint(Operation::TransferFunds.path())?;
        let body = json!({
            "fromAccount": from_account,
            "toAccount": to_account,
            "amount": amount,
        });
        debug!(from_account:% = from_account, to_account:% = to_account; "Requesting transfer");

        let response = self
            .request(Method::POST, url, HeaderMap::new(), Some(body))
            .await?;
        self.read_response(Operation::TransferFunds, response).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, BankingError> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Appends `segment` as a percent-encoded path segment, so identifiers
    /// containing reserved characters round-trip intact.
    fn endpoint_with_segment(&self, path: &str, segment: &str) -> Result<Url, BankingError> {
        let mut url = self.endpoint(path)?;
        url.path_segments_mut()
            .map_err(|_| BankingError::NotABaseUrl(self.base_url.clone()))?
            .push(segment);
        Ok(url)
    }

    /// The single wrapper around the HTTP transport.
    ///
    /// Merges caller-supplied headers over a default
    /// `Content-Type: application/json`, serializes the optional JSON body,
    /// and re-classifies every transport failure as
    /// [`BankingError::Network`]. This is the only place transport errors
    /// are caught.
    async fn request(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<serde_json::Value>,
    ) -> Result<reqwest::Response, BankingError> {
        let mut merged = HeaderMap::new();
        merged.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        merged.extend(headers);

        let mut request = self.client.request(method, url).headers(merged);
        if let Some(body) = body {
            request = request.json(&body);
        }

        request.send().await.map_err(BankingError::network)
    }

    /// Reads the body and applies the operation's failure-classification
    /// policy to the response status.
    async fn read_response(
        &self,
        operation: Operation,
        response: reqwest::Response,
    ) -> Result<String, BankingError> {
        let status = response.status();
        let body = response.text().await.map_err(BankingError::network)?;

        if operation.classifies_non_success_as_error() && !status.is_success() {
            return Err(BankingError::OperationFailed {
                operation: operation.label(),
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
                body,
            });
        }

        Ok(body)
    }
}
