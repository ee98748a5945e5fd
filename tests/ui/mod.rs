//! These tests render the view into a `TestBackend` and search the buffer.

pub mod common_tests;
pub mod home_tests;
pub mod tx_tests;

use addrscan::api::{BalanceResult, InternalTransaction, Transaction};
use addrscan::app::App;
use addrscan::config::Config;
use addrscan::ui::draw;

use alloy::primitives::U256;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

// ==================== Test Data Builders ====================

pub const ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f8fE31";

pub fn mock_config() -> Config {
    Config {
        api_url: "http://127.0.0.1:8080/api".to_string(),
        ..Config::default()
    }
}

pub fn mock_balance() -> BalanceResult {
    BalanceResult {
        address: ADDRESS.to_string(),
        balance_wei: "5500000000000000000".to_string(),
        balance_eth: "5.500000".to_string(),
    }
}

pub fn mock_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            hash: "0xaaaa111122223333444455556666777788889999aaaabbbbccccddddeeeeffff".to_string(),
            from: "0x1111111111111111111111111111111111111111".to_string(),
            to: "0x2222222222222222222222222222222222222222".to_string(),
            value: U256::from(1_000_000_000_000_000_000u128), // 1 ETH
            timestamp: 1_700_000_000,
            block_number: Some(18_573_000),
        },
        Transaction {
            hash: "0xbbbb111122223333444455556666777788889999aaaabbbbccccddddeeeeffff".to_string(),
            from: "0x3333333333333333333333333333333333333333".to_string(),
            to: String::new(),
            value: U256::from(250_000_000_000_000_000u128), // 0.25 ETH
            timestamp: 1_700_000_100,
            block_number: None,
        },
    ]
}

pub fn mock_internal_txs() -> Vec<InternalTransaction> {
    vec![InternalTransaction {
        hash: "0xcccc111122223333444455556666777788889999aaaabbbbccccddddeeeeffff".to_string(),
        from: "0x4444444444444444444444444444444444444444".to_string(),
        to: "0x5555555555555555555555555555555555555555".to_string(),
        value: U256::from(3_000_000_000_000_000u128), // 0.003 ETH
        block_number: 17_123_456,
    }]
}

/// App as it looks after a completed search with every fetch succeeding
pub fn create_loaded_app() -> App {
    let mut app = App::new(mock_config());
    app.searched_address = ADDRESS.to_string();
    app.generation = 1;
    app.balance = Some(mock_balance());
    app.transactions = mock_transactions();
    app.internal_txs = mock_internal_txs();
    app
}

/// App after a completed search that returned nothing
pub fn create_empty_result_app() -> App {
    let mut app = App::new(mock_config());
    app.searched_address = ADDRESS.to_string();
    app.generation = 1;
    app
}

// ==================== Helper Functions ====================

/// Render the app to a buffer and return it
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            draw(frame, app);
        })
        .unwrap();

    terminal.backend().buffer().clone()
}

/// Check if buffer contains a specific string anywhere
pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    let content = buffer_to_string(buffer);
    content.contains(needle)
}

/// Convert buffer to a single string for searching
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut content = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            content.push(
                buffer
                    .cell((x, y))
                    .map(|c| c.symbol().chars().next().unwrap_or(' '))
                    .unwrap_or(' '),
            );
        }
        content.push('\n');
    }
    content
}

/// Print buffer for debugging
#[allow(dead_code)]
pub fn print_buffer(buffer: &Buffer) {
    print!("{}", buffer_to_string(buffer));
}
