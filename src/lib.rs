//! addrscan - terminal address explorer
//!
//! Looks up an Ethereum address against an explorer backend and shows its
//! balance, transactions and internal transactions.

pub mod api;
pub mod app;
pub mod config;
pub mod logging;
pub mod search;
pub mod ui;

// Re-export commonly used types
pub use app::{App, Tab};
pub use config::Config;
