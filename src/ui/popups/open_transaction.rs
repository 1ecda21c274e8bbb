//! Prompt for the id of a transaction to open.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{BORDER_STYLE, MUTED_COLOR, SUCCESS_COLOR, WARNING_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

/// Length of a hex-encoded transaction id.
const TXID_HEX_LEN: usize = 64;

/// Validation hint for the current query. The query is submitted either way.
#[must_use]
pub fn txid_hint(query: &str) -> (&'static str, bool) {
    let query = query.trim();
    if query.is_empty() {
        return ("Enter a transaction id", false);
    }
    if !query.chars().all(|c| c.is_ascii_hexdigit()) {
        return ("Transaction ids are hexadecimal", false);
    }
    if query.len() < TXID_HEX_LEN {
        return ("Too short for a transaction id", false);
    }
    if query.len() > TXID_HEX_LEN {
        return ("Too long for a transaction id", false);
    }
    ("Looks like a transaction id", true)
}

pub fn render(frame: &mut Frame, area: Rect, query: &str) {
    let popup_area = centered_popup_area(area, 76, 9);

    let popup_block = create_popup_block("Open Transaction");
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner_area = popup_block.inner(popup_area);
    if inner_area.height < 5 || inner_area.width < 6 {
        return;
    }

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
        .title(" Transaction id ")
        .title_alignment(Alignment::Left);

    let input_area = Rect::new(inner_area.x + 1, inner_area.y + 1, inner_area.width - 2, 3);
    frame.render_widget(input_block.clone(), input_area);

    let input = Paragraph::new(format!("{query}▏")).alignment(Alignment::Left);
    frame.render_widget(input, input_block.inner(input_area));

    let (hint, valid) = txid_hint(query);
    let hint_color = if valid { SUCCESS_COLOR } else { WARNING_COLOR };
    let hint_area = Rect::new(inner_area.x, input_area.y + 3, inner_area.width, 1);
    frame.render_widget(
        Paragraph::new(hint)
            .style(Style::default().fg(hint_color))
            .alignment(Alignment::Center),
        hint_area,
    );

    if inner_area.height > 5 {
        let help_area = Rect::new(inner_area.x, hint_area.y + 1, inner_area.width, 1);
        frame.render_widget(
            Paragraph::new("Enter:Open  Esc:Cancel")
                .style(Style::default().fg(MUTED_COLOR))
                .alignment(Alignment::Center),
            help_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case("xyz", false)]
    #[case("abc123", false)]
    #[case(&"a".repeat(65), false)]
    #[case(&"0f".repeat(32), true)]
    fn test_txid_hint(#[case] query: &str, #[case] valid: bool) {
        assert_eq!(txid_hint(query).1, valid);
    }

    #[test]
    fn test_prompt_shows_query() {
        let backend = TestBackend::new(90, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| render(frame, frame.area(), "abc123"))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("Open Transaction"));
        assert!(content.contains("abc123▏"));
        assert!(content.contains("Too short for a transaction id"));
    }
}
