//! Dashboard view: landing content and the campaign draft panel.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use immomatrix_copy::CampaignDraftRequest;
use immomatrix_core::content::{CASES, CONTACT, HERO_BODY, HERO_TITLE, SERVICES, TOOLS};

use crate::styles::ColorTheme;

/// State shown in the draft panel.
pub struct DraftPanel<'a> {
    pub request: &'a CampaignDraftRequest,
    pub model: &'a str,
    pub requesting: bool,
    pub text: Option<&'a str>,
}

fn content_lines(theme: &ColorTheme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(HERO_TITLE, theme.header_style())),
        Line::raw(HERO_BODY),
        Line::raw(""),
        Line::from(Span::styled("Leistungen", theme.header_style())),
    ];
    lines.extend(SERVICES.iter().map(|s| {
        Line::from(vec![
            Span::styled(format!("• {}: ", s.title), theme.text_style()),
            Span::styled(s.body, theme.muted_style()),
        ])
    }));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("Tools", theme.header_style())));
    lines.extend(
        TOOLS
            .iter()
            .enumerate()
            .map(|(i, t)| Line::raw(format!("[{}] {}: {}", i + 2, t.title, t.body))),
    );
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("Cases", theme.header_style())));
    lines.extend(
        CASES
            .iter()
            .map(|c| Line::raw(format!("{} {} {}", c.value, c.unit, c.description))),
    );
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{}: ", CONTACT.title), theme.warning_style()),
        Span::raw(CONTACT.body),
    ]));
    lines
}

fn draft_lines<'a>(panel: &DraftPanel<'a>, theme: &ColorTheme) -> Vec<Line<'a>> {
    let fact = |label: &'static str, value: &'a str| {
        Line::from(vec![
            Span::styled(format!("{label:<12}"), theme.muted_style()),
            Span::raw(value),
        ])
    };
    let mut lines = vec![
        fact("Typ", panel.request.project_type.as_str()),
        fact("Ort", panel.request.location.as_str()),
        fact("USP", panel.request.usp.as_str()),
        fact("Zielgruppe", panel.request.target_audience.as_str()),
        Line::raw(""),
    ];
    if panel.requesting {
        lines.push(Line::from(Span::styled(
            format!("Generiere Texte mit {} …", panel.model),
            theme.warning_style(),
        )));
    } else if let Some(text) = panel.text {
        lines.extend(text.lines().map(Line::raw));
    } else {
        lines.push(Line::from(Span::styled(
            "Drücken Sie g, um Kampagnen-Texte zu generieren.",
            theme.muted_style(),
        )));
    }
    lines
}

/// Render the dashboard view.
pub fn render_dashboard(frame: &mut Frame, area: Rect, panel: &DraftPanel<'_>) {
    let theme = ColorTheme::default();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let content = Paragraph::new(content_lines(&theme))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Übersicht ")
                .border_style(theme.border_style()),
        );
    frame.render_widget(content, columns[0]);

    let draft = Paragraph::new(draft_lines(panel, &theme))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Kampagnen-Texte (KI) ")
                .border_style(theme.border_style()),
        );
    frame.render_widget(draft, columns[1]);
}
