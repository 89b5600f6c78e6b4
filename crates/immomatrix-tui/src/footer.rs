//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::messages::View;

/// Key hints for the current view and mode.
#[must_use]
pub fn hints(view: View, editing: bool) -> Vec<(&'static str, &'static str)> {
    if editing {
        return vec![
            ("0-9 . -", "type"),
            ("Backspace", "delete"),
            ("Enter", "commit"),
            ("Esc", "abort"),
        ];
    }
    let mut keys = vec![("q", "quit"), ("Tab/1-3", "view")];
    match view {
        View::Dashboard => keys.push(("g", "generate copy")),
        View::Vacancy | View::Roi => {
            keys.extend([
                ("↑↓", "select"),
                ("←→ -+", "step"),
                ("Enter", "edit"),
                ("r", "reset"),
            ]);
        }
    }
    keys.push(("PgUp/PgDn", "logs"));
    keys
}

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect, view: View, editing: bool) {
    let mut spans = Vec::new();
    for (i, (key, label)) in hints(view, editing).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(": {label}")));
    }

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
