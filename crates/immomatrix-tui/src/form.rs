//! Editable field list for a calculator view.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use immomatrix_core::format::format_decimal;
use immomatrix_core::{FieldSpec, InputModel, Unit};

use crate::styles::ColorTheme;

/// Text being typed into a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryBuffer {
    /// Key of the field being edited.
    pub key: &'static str,
    /// Characters typed so far.
    pub text: String,
}

impl EntryBuffer {
    #[must_use]
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            text: String::new(),
        }
    }
}

/// Display value of a field, e.g. `2’500 CHF`.
#[must_use]
pub fn field_value(spec: &FieldSpec, value: f64) -> String {
    let number = format_decimal(value);
    match spec.unit {
        Unit::Count => number,
        Unit::Percent => format!("{number} %"),
        Unit::Chf | Unit::Months => format!("{number} {}", spec.unit.suffix()),
    }
}

/// Render the fields of `input`; `entry` replaces the selected value while typing.
pub fn render_fields<I: InputModel>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &I,
    selected: usize,
    entry: Option<&EntryBuffer>,
) {
    let theme = ColorTheme::default();
    let label_width = I::fields()
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = I::fields()
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let value = match entry {
                Some(buffer) if i == selected => format!("{}_", buffer.text),
                _ => input
                    .get(spec.key)
                    .map_or_else(String::new, |v| field_value(spec, v)),
            };
            let line = Line::from(vec![
                Span::raw(format!(" {:<label_width$}  ", spec.label)),
                Span::styled(value, theme.text_style()),
                Span::styled(format!("  {}", spec.hint), theme.muted_style()),
            ]);
            let item = ListItem::new(line);
            if i == selected {
                item.style(theme.selected_style())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "))
            .border_style(theme.border_style()),
    );
    frame.render_widget(list, area);
}
