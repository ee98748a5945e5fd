use super::helper::*;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::api::BalanceResult;

pub fn draw_balance_tab(frame: &mut Frame, balance: Option<&BalanceResult>, area: Rect) {
    // Nothing to show when the balance request failed
    let Some(balance) = balance else {
        return;
    };

    let lines = vec![
        format_kv("Address", &balance.address),
        Line::from(""),
        format_kv("Balance (Wei)", &balance.balance_wei),
        Line::from(""),
        Line::from(vec![
            Span::styled("Balance (ETH): ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} ETH", balance.balance_eth),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
