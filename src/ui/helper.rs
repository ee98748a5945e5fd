use alloy::primitives::U256;
use chrono::{Local, TimeZone};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
};

use crate::api::parse_wei;

// ============================================================================
// Helper Functions
// ============================================================================

/// `0x1234...abcd`: first 6 and last 4 characters
pub fn shorten(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let count = value.chars().count();
    let head: String = value.chars().take(6).collect();
    let tail: String = value.chars().skip(count.saturating_sub(4)).collect();
    format!("{head}...{tail}")
}

const WEI_PER_MICRO_ETH: u64 = 1_000_000_000_000;
const MICRO_ETH_PER_ETH: u64 = 1_000_000;

/// Wei amount as ETH with 6 decimals, rounded half-up
pub fn format_eth(wei: U256) -> String {
    let divisor = U256::from(WEI_PER_MICRO_ETH);
    let mut micro = wei / divisor;
    if wei % divisor >= divisor / U256::from(2u64) {
        micro += U256::from(1u64);
    }

    let per_eth = U256::from(MICRO_ETH_PER_ETH);
    let whole = micro / per_eth;
    let frac = u64::try_from(micro % per_eth).unwrap_or_default();
    format!("{whole}.{frac:06}")
}

/// Decimal wei text as ETH with 6 decimals; `None` if it is not a decimal integer
pub fn wei_to_eth(wei: &str) -> Option<String> {
    parse_wei(wei).map(format_eth)
}

/// Unix seconds as a local date-time
pub fn format_timestamp(secs: u64) -> String {
    i64::try_from(secs)
        .ok()
        .and_then(|s| Local.timestamp_opt(s, 0).single())
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_kv(key: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

pub fn spinner_frame() -> &'static str {
    const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    FRAMES[(millis / 100) as usize % FRAMES.len()]
}

pub fn centered_rect(percent_x: u16, area: Rect) -> Rect {
    let popup_layout = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(area);

    popup_layout[1]
}

pub fn padded_rect(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y + padding,
        width: area.width.saturating_sub(padding * 2),
        height: area.height.saturating_sub(padding * 2),
    }
}
