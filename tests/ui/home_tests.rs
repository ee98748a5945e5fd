//! Screen before any search

use super::*;

#[test]
fn test_home_shows_title() {
    let app = App::new(mock_config());
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Wallet Explorer"));
}

#[test]
fn test_home_shows_search_placeholder() {
    let app = App::new(mock_config());
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Enter Ethereum address (0x...)"));
}

#[test]
fn test_home_shows_get_started_hint() {
    let app = App::new(mock_config());
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(
        &buffer,
        "Enter an Ethereum address above to get started"
    ));
}

#[test]
fn test_home_has_no_tabs_or_cards() {
    let app = App::new(mock_config());
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(!buffer_contains(&buffer, "Balance Details"));
    assert!(!buffer_contains(&buffer, "Internal Txs"));
}

#[test]
fn test_home_shows_api_url() {
    let app = App::new(mock_config());
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "http://127.0.0.1:8080/api"));
}

#[test]
fn test_typed_input_is_shown() {
    let mut app = App::new(mock_config());
    app.search_input = tui_input::Input::new(ADDRESS.to_string());
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, ADDRESS));
    assert!(!buffer_contains(&buffer, "Enter Ethereum address (0x...)"));
}
