use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::BalanceResult;
use crate::app::App;

/// Balance, transaction count and internal transaction count side by side
pub fn draw_summary_cards(frame: &mut Frame, app: &App, balance: &BalanceResult, area: Rect) {
    let chunks = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    let cards = [
        (" 💰 Balance ", format!("{} ETH", balance.balance_eth), Color::Magenta),
        (
            " ⇅ Transactions ",
            app.transactions.len().to_string(),
            Color::Green,
        ),
        (
            " ⏱ Internal Txs ",
            app.internal_txs.len().to_string(),
            Color::Blue,
        ),
    ];

    for ((title, value, color), area) in cards.into_iter().zip(chunks.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(title)
            .title_style(Style::default().fg(Color::Gray));

        let card = Paragraph::new(value)
            .block(block)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(card, *area);
    }
}
