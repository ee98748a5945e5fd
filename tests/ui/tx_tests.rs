//! Transaction and internal transaction tabs

use super::*;
use addrscan::app::Tab;

#[test]
fn test_transactions_tab_shows_header() {
    let mut app = create_loaded_app();
    app.set_active_tab(Tab::Transactions);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Hash"));
    assert!(buffer_contains(&buffer, "Value (ETH)"));
    assert!(buffer_contains(&buffer, "Time"));
}

#[test]
fn test_transactions_tab_shortens_hashes_and_addresses() {
    let mut app = create_loaded_app();
    app.set_active_tab(Tab::Transactions);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "0xbbbb...ffff"));
    assert!(buffer_contains(&buffer, "0x1111...1111"));
    assert!(buffer_contains(&buffer, "0x2222...2222"));
}

#[test]
fn test_transactions_tab_converts_values() {
    let mut app = create_loaded_app();
    app.set_active_tab(Tab::Transactions);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "1.000000"));
    assert!(buffer_contains(&buffer, "0.250000"));
}

#[test]
fn test_transactions_tab_shows_dates() {
    let mut app = create_loaded_app();
    app.set_active_tab(Tab::Transactions);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "2023-11-1"));
}

#[test]
fn test_selected_transaction_details() {
    let mut app = create_loaded_app();
    app.set_active_tab(Tab::Transactions);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(
        &buffer,
        "0xaaaa111122223333444455556666777788889999aaaabbbbccccddddeeeeffff"
    ));
    assert!(buffer_contains(&buffer, "18573000"));
}

#[test]
fn test_selected_contract_creation_details() {
    let mut app = create_loaded_app();
    app.set_active_tab(Tab::Transactions);
    app.select_next();
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "[Contract Create]"));
}

#[test]
fn test_empty_transactions_message() {
    let mut app = create_empty_result_app();
    app.set_active_tab(Tab::Transactions);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "No transactions found for this address"));
    assert!(!buffer_contains(&buffer, "Value (ETH)"));
}

#[test]
fn test_internal_tab_shows_rows() {
    let mut app = create_loaded_app();
    app.set_active_tab(Tab::Internal);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Block"));
    assert!(buffer_contains(&buffer, "17123456"));
    assert!(buffer_contains(&buffer, "0.003000"));
    assert!(buffer_contains(&buffer, "0xcccc...ffff"));
}

#[test]
fn test_empty_internal_message() {
    let mut app = create_empty_result_app();
    app.set_active_tab(Tab::Internal);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(
        &buffer,
        "No internal transactions found for this address"
    ));
}
