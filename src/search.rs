//! Submission of an address search: input validation, the three concurrent
//! fetches and the events they report back to the event loop.

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::api::{ApiError, BalanceResult, ExplorerApi, InternalTransaction, Transaction};

/// Rejected search input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please enter an address")]
    Empty,
}

/// Check the raw input field. Only emptiness is validated; the address
/// itself is passed to the backend untouched.
pub fn validate_address_input(input: &str) -> Result<&str, InputError> {
    if input.trim().is_empty() {
        return Err(InputError::Empty);
    }
    Ok(input)
}

/// Which of the three reads a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Balance,
    Transactions,
    InternalTransactions,
}

impl FetchKind {
    /// Message shown next to the search bar
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Balance => "Failed to fetch balance",
            Self::Transactions => "Failed to fetch transactions",
            Self::InternalTransactions => "Failed to fetch internal transactions",
        }
    }
}

impl fmt::Display for FetchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Balance => "balance",
            Self::Transactions => "transactions",
            Self::InternalTransactions => "internal transactions",
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed to fetch {kind}")]
pub struct FetchError {
    pub kind: FetchKind,
    #[source]
    pub source: ApiError,
}

impl FetchError {
    pub fn new(kind: FetchKind, source: ApiError) -> Self {
        Self { kind, source }
    }

    pub fn user_message(&self) -> &'static str {
        self.kind.failure_message()
    }
}

/// One committed search, tagged with the generation it was issued under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: u64,
    pub address: String,
    pub offset: u32,
}

#[derive(Debug)]
pub enum Fetched {
    Balance(Result<BalanceResult, FetchError>),
    Transactions(Result<Vec<Transaction>, FetchError>),
    InternalTransactions(Result<Vec<InternalTransaction>, FetchError>),
    /// All three reads have completed, successfully or not
    Settled,
}

/// Messages from a search task back to the main loop
#[derive(Debug)]
pub struct SearchEvent {
    pub generation: u64,
    pub fetched: Fetched,
}

/// Run the three reads concurrently.
///
/// Each outcome is sent as soon as its request completes; `Settled` is sent
/// only after all three are done. Send failures mean the UI has gone away
/// and are ignored.
pub async fn execute_search(
    api: Arc<dyn ExplorerApi>,
    request: SearchRequest,
    events: mpsc::Sender<SearchEvent>,
) {
    let SearchRequest {
        generation,
        address,
        offset,
    } = request;
    info!(generation, %address, "search started");

    let send = move |fetched: Fetched| {
        let events = events.clone();
        async move {
            let _ = events.send(SearchEvent { generation, fetched }).await;
        }
    };

    let balance = async {
        let result = api
            .get_balance(&address)
            .await
            .map_err(|e| report(generation, &address, FetchKind::Balance, e));
        if let Ok(balance) = &result {
            debug!(generation, ?balance, "balance received");
        }
        send(Fetched::Balance(result)).await;
    };

    let transactions = async {
        let result = api
            .get_transactions(&address, offset)
            .await
            .map_err(|e| report(generation, &address, FetchKind::Transactions, e));
        if let Ok(txs) = &result {
            info!(generation, count = txs.len(), "transactions received");
        }
        send(Fetched::Transactions(result)).await;
    };

    let internal = async {
        let result = api
            .get_internal_transactions(&address, offset)
            .await
            .map_err(|e| report(generation, &address, FetchKind::InternalTransactions, e));
        if let Ok(txs) = &result {
            info!(generation, count = txs.len(), "internal transactions received");
        }
        send(Fetched::InternalTransactions(result)).await;
    };

    tokio::join!(balance, transactions, internal);

    debug!(generation, "search settled");
    send(Fetched::Settled).await;
}

fn report(generation: u64, address: &str, kind: FetchKind, source: ApiError) -> FetchError {
    let cause = std::error::Error::source(&source)
        .map(|e| e.to_string())
        .unwrap_or_default();
    error!(generation, %address, error = %source, %cause, "failed to fetch {kind}");
    FetchError::new(kind, source)
}
