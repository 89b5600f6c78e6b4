//! Capped, scrollable log panel.

use std::collections::VecDeque;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

/// Most recent lines kept.
pub const LOG_CAPACITY: usize = 200;

/// Log lines plus scroll position.
///
/// `offset` counts lines scrolled up from the newest entry; 0 follows
/// the tail.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    offset: usize,
}

impl LogBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, dropping the oldest beyond `LOG_CAPACITY`.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
        if self.lines.len() > LOG_CAPACITY {
            self.lines.pop_front();
        }
        if self.offset > 0 {
            self.offset = (self.offset + 1).min(self.lines.len().saturating_sub(1));
        }
    }

    /// Number of stored lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Newest line, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    /// Iterate from oldest to newest.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Whether the view follows new lines.
    #[must_use]
    pub fn is_following(&self) -> bool {
        self.offset == 0
    }

    /// Scroll towards older lines.
    pub fn scroll_up(&mut self, by: usize) {
        self.offset = (self.offset + by).min(self.lines.len().saturating_sub(1));
    }

    /// Scroll towards newer lines.
    pub fn scroll_down(&mut self, by: usize) {
        self.offset = self.offset.saturating_sub(by);
    }

    /// Lines visible in a window of `height` rows.
    fn window(&self, height: usize) -> impl Iterator<Item = &str> {
        let end = self.lines.len().saturating_sub(self.offset);
        let start = end.saturating_sub(height);
        self.lines.range(start..end).map(String::as_str)
    }
}

fn line_style(line: &str) -> Style {
    if line.starts_with("[ERROR]") {
        Style::default().fg(Color::Red)
    } else if line.starts_with("[WARN]") {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

/// Render the log panel.
pub fn render_logs(frame: &mut Frame, area: Rect, logs: &LogBuffer) {
    let visible_height = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = logs
        .window(visible_height)
        .map(|line| ListItem::new(Line::raw(line)).style(line_style(line)))
        .collect();

    let title = if logs.is_following() {
        " Logs ".to_string()
    } else {
        format!(" Logs (-{}) ", logs.offset)
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}
