use super::helper::*;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;

const HASH_WIDTH: u16 = 13;

pub fn draw_transactions_tab(frame: &mut Frame, app: &App, area: Rect) {
    if app.transactions.is_empty() {
        draw_empty(frame, "No transactions found for this address", area);
        return;
    }

    let rows = app.transactions.iter().map(|tx| {
        Row::new(vec![
            Cell::from(shorten(&tx.hash)).style(Style::default().fg(Color::Magenta)),
            Cell::from(shorten(&tx.from)).style(Style::default().fg(Color::Gray)),
            Cell::from(shorten(&tx.to)).style(Style::default().fg(Color::Gray)),
            value_cell(format_eth(tx.value)),
            Cell::from(format_timestamp(tx.timestamp)).style(Style::default().fg(Color::DarkGray)),
        ])
    });

    let detail = app.selected_transaction().map(|tx| {
        let mut lines = vec![format_kv("Hash", &tx.hash), route_line(&tx.from, &tx.to)];
        if let Some(block) = tx.block_number {
            lines.push(format_kv("Block", &block.to_string()));
        }
        lines
    });

    draw_table(
        frame,
        area,
        ["Hash", "From", "To", "Value (ETH)", "Time"],
        Constraint::Length(19),
        rows.collect(),
        app.selected_tx,
        detail.unwrap_or_default(),
    );
}

pub fn draw_internal_tab(frame: &mut Frame, app: &App, area: Rect) {
    if app.internal_txs.is_empty() {
        draw_empty(frame, "No internal transactions found for this address", area);
        return;
    }

    let rows = app.internal_txs.iter().map(|tx| {
        Row::new(vec![
            Cell::from(shorten(&tx.hash)).style(Style::default().fg(Color::Magenta)),
            Cell::from(shorten(&tx.from)).style(Style::default().fg(Color::Gray)),
            Cell::from(shorten(&tx.to)).style(Style::default().fg(Color::Gray)),
            value_cell(format_eth(tx.value)),
            Cell::from(tx.block_number.to_string()).style(Style::default().fg(Color::DarkGray)),
        ])
    });

    let detail = app
        .selected_internal_tx()
        .map(|tx| vec![format_kv("Hash", &tx.hash), route_line(&tx.from, &tx.to)]);

    draw_table(
        frame,
        area,
        ["Hash", "From", "To", "Value (ETH)", "Block"],
        Constraint::Length(10),
        rows.collect(),
        app.selected_internal,
        detail.unwrap_or_default(),
    );
}

fn value_cell(value: String) -> Cell<'static> {
    Cell::from(Line::from(value).alignment(Alignment::Right))
        .style(Style::default().fg(Color::White))
}

fn route_line(from: &str, to: &str) -> Line<'static> {
    let to = if to.is_empty() { "[Contract Create]" } else { to };
    format_kv("Route", &format!("{from} → {to}"))
}

fn draw_table(
    frame: &mut Frame,
    area: Rect,
    headers: [&'static str; 5],
    last_column: Constraint,
    rows: Vec<Row<'static>>,
    selected: usize,
    detail: Vec<Line<'static>>,
) {
    let chunks = Layout::vertical([
        Constraint::Min(3),                         // Table
        Constraint::Length(detail.len() as u16 + 1), // Selected row details
    ])
    .split(area);

    let header = Row::new(headers.map(|h| {
        if h == "Value (ETH)" {
            Cell::from(Line::from(h).alignment(Alignment::Right))
        } else {
            Cell::from(h)
        }
    }))
    .style(Style::default().fg(Color::DarkGray))
    .bottom_margin(1);

    let widths = [
        Constraint::Length(HASH_WIDTH),
        Constraint::Length(HASH_WIDTH),
        Constraint::Length(HASH_WIDTH),
        Constraint::Length(16),
        last_column,
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .row_highlight_style(
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = TableState::default().with_selected(Some(selected));
    frame.render_stateful_widget(table, chunks[0], &mut state);

    let mut lines = vec![Line::from("")];
    lines.extend(detail);
    frame.render_widget(Paragraph::new(lines), chunks[1]);
}

fn draw_empty(frame: &mut Frame, message: &str, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);

    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, chunks[1]);
}
