//! TUI header panel with the view tabs.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

use immomatrix_core::content::{BRAND, TAGLINE};

use crate::messages::View;

/// Render the header with one tab per view.
pub fn render_header(frame: &mut Frame, area: Rect, active: View) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .map(|view| Line::from(format!("{} {}", view.index() + 1, view.title())))
        .collect();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(Line::from(vec![
            Span::styled(
                format!(" {BRAND} "),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("| {TAGLINE} ")),
        ]));

    let tabs = Tabs::new(titles)
        .block(block)
        .select(active.index())
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .divider("|");
    frame.render_widget(tabs, area);
}
