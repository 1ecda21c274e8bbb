//! Transaction details: summary block and the inputs/outputs tables.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Cell, Paragraph, Row, Table},
};

use crate::client::TransactionSource;
use crate::domain::{TransactionDetails, TransactionValue};
use crate::state::{App, Pane, ViewState};
use crate::theme::{ERROR_COLOR, HEADER_STYLE, LABEL_STYLE, MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::create_border_block;
use crate::ui::layout::ScreenLayout;
use crate::widgets::{format_amount, format_size, format_with_commas, truncate_address};

/// Width of the amount column in the rows tables.
const AMOUNT_COLUMN_WIDTH: u16 = 22;

/// Width of the label column in the summary.
const LABEL_COLUMN_WIDTH: u16 = 15;

// ============================================================================
// Summary Rows
// ============================================================================

/// Label/value pairs shown in the summary block.
#[must_use]
pub fn summary_rows(details: &TransactionDetails) -> Vec<(&'static str, String)> {
    vec![
        ("Transaction", details.id.clone()),
        (
            "Block",
            details.blockhash.clone().unwrap_or_else(|| "-".to_string()),
        ),
        ("Time", details.formatted_time()),
        (
            "Confirmations",
            details
                .confirmations
                .map_or_else(|| "-".to_string(), format_with_commas),
        ),
        ("Size", format_size(details.size)),
        ("Total input", format_amount(details.total_input())),
        ("Total output", format_amount(details.total_output())),
        ("Fee", format_amount(details.fee())),
    ]
}

// ============================================================================
// Rendering
// ============================================================================

pub fn render<S: TransactionSource>(frame: &mut Frame, layout: &ScreenLayout, app: &App<S>) {
    match app.details.state() {
        ViewState::Loaded(details) => {
            render_summary(frame, layout.summary, details);
            render_rows(
                frame,
                layout.inputs,
                "Inputs",
                &details.inputs,
                app.nav.input_scroll,
                app.nav.focus == Pane::Inputs,
            );
            render_rows(
                frame,
                layout.outputs,
                "Outputs",
                &details.outputs,
                app.nav.output_scroll,
                app.nav.focus == Pane::Outputs,
            );
        }
        ViewState::Idle => render_notice(
            frame,
            layout.summary,
            "No transaction selected. Press / to open one.",
            MUTED_COLOR,
        ),
        ViewState::Loading { txid } => render_notice(
            frame,
            layout.summary,
            &format!("Loading transaction {txid}..."),
            PRIMARY_COLOR,
        ),
        ViewState::Failed { txid } => render_notice(
            frame,
            layout.summary,
            &format!("Could not load transaction {txid}"),
            ERROR_COLOR,
        ),
    }
}

fn render_notice(frame: &mut Frame, area: Rect, text: &str, color: ratatui::style::Color) {
    let block = create_border_block("Transaction", false);
    let paragraph = Paragraph::new(Line::from(text))
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_summary(frame: &mut Frame, area: Rect, details: &TransactionDetails) {
    let rows: Vec<Row> = summary_rows(details)
        .into_iter()
        .map(|(label, value)| {
            Row::new(vec![
                Cell::from(label).style(LABEL_STYLE),
                Cell::from(value).style(Style::default().fg(PRIMARY_COLOR)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [Constraint::Length(LABEL_COLUMN_WIDTH), Constraint::Min(0)],
    )
    .block(create_border_block("Transaction", false));

    frame.render_widget(table, area);
}

fn render_rows(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[TransactionValue],
    scroll: usize,
    focused: bool,
) {
    let title = format!("{title} ({})", rows.len());
    let block = create_border_block(&title, focused);

    if rows.is_empty() {
        let paragraph = Paragraph::new("No rows (coinbase)")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let address_width = area
        .width
        .saturating_sub(AMOUNT_COLUMN_WIDTH + 3) as usize;

    let table_rows: Vec<Row> = rows
        .iter()
        .skip(scroll)
        .map(|row| {
            Row::new(vec![
                Cell::from(truncate_address(&row.address, address_width)),
                Cell::from(Line::from(format_amount(row.value)).alignment(Alignment::Right)),
            ])
        })
        .collect();

    let header = Row::new(vec![
        Cell::from("Address"),
        Cell::from(Line::from("Value").alignment(Alignment::Right)),
    ])
    .style(HEADER_STYLE);

    let table = Table::new(
        table_rows,
        [Constraint::Min(0), Constraint::Length(AMOUNT_COLUMN_WIDTH)],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

// ============================================================================
// Tests
// ============================================================================
