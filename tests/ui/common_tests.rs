//! Common UI tests - error line, loading, tabs

use super::*;
use addrscan::app::Tab;

#[test]
fn test_error_message_is_shown() {
    let mut app = App::new(mock_config());
    app.error_message = "Please enter an address".to_string();
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Please enter an address"));
}

#[test]
fn test_loading_shows_spinner_instead_of_content() {
    let mut app = create_empty_result_app();
    app.loading = true;
    app.set_active_tab(Tab::Transactions);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Loading data..."));
    assert!(!buffer_contains(&buffer, "No transactions found"));
}

#[test]
fn test_tab_bar_lists_all_tabs() {
    let app = create_loaded_app();
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Balance Details"));
    assert!(buffer_contains(&buffer, "Transactions"));
    assert!(buffer_contains(&buffer, "Internal Transactions"));
}

#[test]
fn test_tab_switch_changes_content_only() {
    let mut app = create_loaded_app();
    let before = render_to_buffer(&app, 100, 40);
    assert!(buffer_contains(&before, "Balance (Wei)"));

    app.set_active_tab(Tab::Internal);
    let after = render_to_buffer(&app, 100, 40);

    assert!(!buffer_contains(&after, "Balance (Wei)"));
    assert!(buffer_contains(&after, "17123456"));
    // Summary cards stay in place
    assert!(buffer_contains(&after, "5.500000 ETH"));
}

#[test]
fn test_shows_navigation_help() {
    let app = create_loaded_app();
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Esc quit"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let app = create_loaded_app();
    let _ = render_to_buffer(&app, 20, 8);

    let mut app = create_loaded_app();
    app.set_active_tab(Tab::Transactions);
    let _ = render_to_buffer(&app, 20, 8);
}
