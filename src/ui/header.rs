//! Header bar: application name, explorer URL and view status.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::client::TransactionSource;
use crate::state::{App, ViewState};
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, WARNING_COLOR};

/// Render the application header
pub fn render<S: TransactionSource>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let (status, color) = match app.details.state() {
        ViewState::Idle => ("idle", MUTED_COLOR),
        ViewState::Loading { .. } => ("loading", WARNING_COLOR),
        ViewState::Loaded(_) => ("loaded", SUCCESS_COLOR),
        ViewState::Failed { .. } => ("failed", ERROR_COLOR),
    };

    let line = Line::from(vec![
        Span::styled(
            " txlens ",
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.api_url.as_str(), Style::default().fg(MUTED_COLOR)),
        Span::raw("  "),
        Span::styled(format!("[{status}]"), Style::default().fg(color)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
