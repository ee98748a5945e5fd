use crate::api::{BalanceResult, InternalTransaction, Transaction};
use crate::config::Config;
use crate::search::{validate_address_input, Fetched, SearchEvent, SearchRequest};
use tracing::debug;
use tui_input::Input;

/// Result tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Balance,
    Transactions,
    Internal,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Balance, Tab::Transactions, Tab::Internal];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Balance => "Balance Details",
            Tab::Transactions => "Transactions",
            Tab::Internal => "Internal Transactions",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Balance => 0,
            Tab::Transactions => 1,
            Tab::Internal => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub struct App {
    pub config: Config,
    pub search_input: Input,
    /// Address of the last committed search; empty until the first one
    pub searched_address: String,
    pub balance: Option<BalanceResult>,
    pub transactions: Vec<Transaction>,
    pub internal_txs: Vec<InternalTransaction>,
    pub loading: bool,
    pub error_message: String,
    pub active_tab: Tab,
    pub selected_tx: usize,
    pub selected_internal: usize,
    /// Bumped on every committed search; events from older ones are dropped
    pub generation: u64,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            search_input: Input::default(),
            searched_address: String::new(),
            balance: None,
            transactions: Vec::new(),
            internal_txs: Vec::new(),
            loading: false,
            error_message: String::new(),
            active_tab: Tab::default(),
            selected_tx: 0,
            selected_internal: 0,
            generation: 0,
            should_quit: false,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    pub fn has_searched(&self) -> bool {
        !self.searched_address.is_empty()
    }

    /// Commit the input field as a new search.
    ///
    /// Returns the request to run, or `None` (with the error message set)
    /// when the input is empty.
    pub fn submit_search(&mut self) -> Option<SearchRequest> {
        let address = match validate_address_input(self.search_input.value()) {
            Ok(address) => address.to_string(),
            Err(e) => {
                self.error_message = e.to_string();
                return None;
            }
        };

        self.loading = true;
        self.error_message.clear();
        self.searched_address = address.clone();
        self.balance = None;
        self.transactions.clear();
        self.internal_txs.clear();
        self.selected_tx = 0;
        self.selected_internal = 0;
        self.generation += 1;

        Some(SearchRequest {
            generation: self.generation,
            address,
            offset: self.config.offset,
        })
    }

    /// Apply the outcome of one fetch
    pub fn apply(&mut self, event: SearchEvent) {
        if event.generation != self.generation {
            debug!(
                stale = event.generation,
                current = self.generation,
                "dropping result of superseded search"
            );
            return;
        }

        match event.fetched {
            Fetched::Balance(Ok(balance)) => self.balance = Some(balance),
            Fetched::Transactions(Ok(txs)) => {
                self.transactions = txs;
                self.selected_tx = 0;
            }
            Fetched::InternalTransactions(Ok(txs)) => {
                self.internal_txs = txs;
                self.selected_internal = 0;
            }
            Fetched::Balance(Err(e))
            | Fetched::Transactions(Err(e))
            | Fetched::InternalTransactions(Err(e)) => {
                self.error_message = e.user_message().to_string();
            }
            Fetched::Settled => self.loading = false,
        }
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.active_tab = self.active_tab.prev();
    }

    /// Move row selection up in the active list tab
    pub fn select_prev(&mut self) {
        match self.active_tab {
            Tab::Transactions => self.selected_tx = self.selected_tx.saturating_sub(1),
            Tab::Internal => self.selected_internal = self.selected_internal.saturating_sub(1),
            Tab::Balance => {}
        }
    }

    /// Move row selection down in the active list tab
    pub fn select_next(&mut self) {
        match self.active_tab {
            Tab::Transactions => {
                if self.selected_tx + 1 < self.transactions.len() {
                    self.selected_tx += 1;
                }
            }
            Tab::Internal => {
                if self.selected_internal + 1 < self.internal_txs.len() {
                    self.selected_internal += 1;
                }
            }
            Tab::Balance => {}
        }
    }

    pub fn selected_transaction(&self) -> Option<&Transaction> {
        self.transactions.get(self.selected_tx)
    }

    pub fn selected_internal_tx(&self) -> Option<&InternalTransaction> {
        self.internal_txs.get(self.selected_internal)
    }
}
