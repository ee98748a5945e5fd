mod types;

pub use types::*;

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

/// Errors raised at the HTTP boundary
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid request URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not JSON of the expected shape
    #[error("unexpected response body from {url}")]
    Schema {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The three read-only backend endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Balance,
    Transactions,
    InternalTransactions,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Transactions => "transactions",
            Self::InternalTransactions => "internal-transactions",
        }
    }
}

/// Build `{base}/{endpoint}/{address}[?offset=N]`.
///
/// The address goes into the path as typed; no checksum or format checks.
/// The query is appended to the text before parsing, so a `#` in the
/// address swallows it the same way a browser `fetch` would.
pub fn endpoint_url(
    base_url: &str,
    endpoint: Endpoint,
    address: &str,
    offset: Option<u32>,
) -> Result<Url, ApiError> {
    let mut raw = format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.path(),
        address
    );
    if let Some(offset) = offset {
        raw.push_str(&format!("?offset={offset}"));
    }
    Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
        reason: e.to_string(),
        url: raw,
    })
}

/// Read access to the explorer backend
#[async_trait]
pub trait ExplorerApi: Send + Sync {
    async fn get_balance(&self, address: &str) -> Result<BalanceResult, ApiError>;

    async fn get_transactions(
        &self,
        address: &str,
        offset: u32,
    ) -> Result<Vec<Transaction>, ApiError>;

    async fn get_internal_transactions(
        &self,
        address: &str,
        offset: u32,
    ) -> Result<Vec<InternalTransaction>, ApiError>;
}

/// reqwest-backed client for the explorer backend
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET a URL and decode the body. The HTTP status is not inspected:
    /// any body matching the schema counts as success.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "GET");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        trace!(%url, %status, bytes = body.len(), "response received");

        serde_json::from_slice(&body).map_err(|source| ApiError::Schema {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl ExplorerApi for HttpApiClient {
    async fn get_balance(&self, address: &str) -> Result<BalanceResult, ApiError> {
        let url = endpoint_url(&self.base_url, Endpoint::Balance, address, None)?;
        self.get_json(url).await
    }

    async fn get_transactions(
        &self,
        address: &str,
        offset: u32,
    ) -> Result<Vec<Transaction>, ApiError> {
        let url = endpoint_url(&self.base_url, Endpoint::Transactions, address, Some(offset))?;
        self.get_json(url).await
    }

    async fn get_internal_transactions(
        &self,
        address: &str,
        offset: u32,
    ) -> Result<Vec<InternalTransaction>, ApiError> {
        let url = endpoint_url(
            &self.base_url,
            Endpoint::InternalTransactions,
            address,
            Some(offset),
        )?;
        self.get_json(url).await
    }
}
