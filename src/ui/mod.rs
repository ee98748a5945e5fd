mod balance_tab;
mod helper;
mod summary;
mod tx_tables;

pub use helper::{format_eth, format_timestamp, shorten, wei_to_eth};

use balance_tab::draw_balance_tab;
use helper::*;
use summary::draw_summary_cards;
use tx_tables::{draw_internal_tab, draw_transactions_tab};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, Tab};

const NAV_HELP: &str = "Enter search • Tab switch tab • ↑↓ select • Esc quit";

pub fn draw(frame: &mut Frame, app: &App) {
    let area = padded_rect(frame.area(), 1);
    let cards_height = if app.balance.is_some() { 3 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(1),            // Title
        Constraint::Length(1),            // Subtitle
        Constraint::Length(1),            // Spacing
        Constraint::Length(3),            // Search bar
        Constraint::Length(1),            // Error line
        Constraint::Length(cards_height), // Summary cards
        Constraint::Min(3),               // Tabs and content
        Constraint::Length(1),            // Status / help
    ])
    .split(area);

    let title = Paragraph::new("🔍 Wallet Explorer")
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let subtitle = Paragraph::new("Enter an Ethereum address to view balance and transactions")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[1]);

    draw_search_bar(frame, app, centered_rect(80, chunks[3]));

    if !app.error_message.is_empty() {
        let error = Paragraph::new(app.error_message.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(error, chunks[4]);
    }

    if let Some(balance) = &app.balance {
        draw_summary_cards(frame, app, balance, chunks[5]);
    }

    if app.has_searched() {
        draw_results(frame, app, chunks[6]);
    } else {
        draw_get_started(frame, chunks[6]);
    }

    draw_status_line(frame, app, chunks[7]);
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" 🔍 Search ")
        .title_style(Style::default().fg(Color::Cyan));

    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = app.search_input.visual_scroll(inner_width);

    let display_text = if app.search_input.value().is_empty() {
        Span::styled(
            "Enter Ethereum address (0x...)",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(app.search_input.value(), Style::default().fg(Color::White))
    };

    let input = Paragraph::new(display_text)
        .block(block)
        .scroll((0, scroll as u16));
    frame.render_widget(input, area);

    let cursor_x = area.x + 1 + (app.search_input.visual_cursor().saturating_sub(scroll)) as u16;
    let cursor_y = area.y + 1;
    if cursor_x < area.x + area.width.saturating_sub(1) {
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn draw_get_started(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(area);

    let hint = Paragraph::new("👆 Enter an Ethereum address above to get started")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[1]);
}

fn draw_results(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Tab bar
        Constraint::Length(1), // Spacing
        Constraint::Min(0),    // Content
    ])
    .split(inner);

    let titles: Vec<Line> = Tab::ALL.iter().map(|tab| Line::from(tab.title())).collect();
    let tabs = Tabs::new(titles)
        .select(app.active_tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::default().fg(Color::DarkGray)));
    frame.render_widget(tabs, chunks[0]);

    if app.loading {
        draw_loading(frame, chunks[2]);
        return;
    }

    match app.active_tab {
        Tab::Balance => draw_balance_tab(frame, app.balance.as_ref(), chunks[2]),
        Tab::Transactions => draw_transactions_tab(frame, app, chunks[2]),
        Tab::Internal => draw_internal_tab(frame, app, chunks[2]),
    }
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(area);

    let text = format!("{} Loading data...", spinner_frame());
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(paragraph, chunks[1]);
}

fn draw_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(2)]).split(area);

    let api = Line::from(vec![
        Span::styled("API: ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.api_url().to_string(), Style::default().fg(Color::Green)),
    ]);
    frame.render_widget(Paragraph::new(api), chunks[0]);

    let help = Paragraph::new(NAV_HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    frame.render_widget(help, chunks[1]);
}
