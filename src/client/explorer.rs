//! Block explorer API client.
//!
//! Transactions are served at `GET {base_url}/transactions/{txid}`.

use std::future::Future;

use reqwest::{StatusCode, Url};

use super::http::{HttpClient, HttpConfig};
use crate::domain::{ExplorerError, Transaction};

// ============================================================================
// Transaction Source
// ============================================================================

/// Anything that can look up a transaction by id.
///
/// The details view only depends on this trait so it can be driven by a
/// fake in tests.
pub trait TransactionSource: Clone + Send + Sync + 'static {
    /// Fetch a transaction.
    fn get(&self, txid: &str) -> impl Future<Output = Result<Transaction, ExplorerError>> + Send;
}

// ============================================================================
// Explorer Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct ExplorerClient {
    http: HttpClient,
    base_url: String,
    base: Url,
}

impl ExplorerClient {
    /// Creates a client for the explorer at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::InvalidInput` if `base_url` is not an
    /// absolute URL with a path, or `ExplorerError::ClientInit` if the HTTP
    /// client fails to initialize.
    pub fn new(base_url: impl Into<String>, config: HttpConfig) -> Result<Self, ExplorerError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let base = Url::parse(&base_url)
            .map_err(|e| ExplorerError::invalid_input(format!("Invalid API URL '{base_url}': {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ExplorerError::invalid_input(format!(
                "Invalid API URL '{base_url}': not a base URL"
            )));
        }

        Ok(Self {
            http: HttpClient::with_config(config)?,
            base_url,
            base,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the lookup URL for `txid`, percent-encoded as one path segment.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::InvalidInput` for ids that cannot be a single
    /// path segment (empty, `.` or `..`).
    pub fn transaction_url(&self, txid: &str) -> Result<Url, ExplorerError> {
        if matches!(txid, "" | "." | "..") {
            return Err(ExplorerError::invalid_input(format!(
                "'{txid}' is not a transaction ID"
            )));
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ExplorerError::invalid_input("API URL cannot take a path"))?
            .pop_if_empty()
            .push("transactions")
            .push(txid);
        Ok(url)
    }

    /// Fetch a single transaction by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, the request fails, the server
    /// answers with a non-success status or the body is not a transaction.
    pub async fn get_transaction(&self, txid: &str) -> Result<Transaction, ExplorerError> {
        let txid = txid.trim();
        if txid.is_empty() {
            return Err(ExplorerError::invalid_input(
                "Transaction ID cannot be empty",
            ));
        }

        let url = self.transaction_url(txid)?;
        tracing::debug!("GET {url} (timeout {:?})", self.http.config().timeout);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        decode_transaction_response(status, &body, txid)
    }
}

impl TransactionSource for ExplorerClient {
    fn get(&self, txid: &str) -> impl Future<Output = Result<Transaction, ExplorerError>> + Send {
        self.get_transaction(txid)
    }
}

/// Maps a response status and body to a transaction or an error.
pub(crate) fn decode_transaction_response(
    status: StatusCode,
    body: &str,
    txid: &str,
) -> Result<Transaction, ExplorerError> {
    if status == StatusCode::NOT_FOUND {
        return Err(ExplorerError::not_found(txid));
    }

    if !status.is_success() {
        return Err(ExplorerError::server(status.as_u16(), body));
    }

    serde_json::from_str(body)
        .map_err(|e| ExplorerError::parse(format!("Failed to parse transaction JSON: {e}")))
}

// ============================================================================
// Tests
// ============================================================================
