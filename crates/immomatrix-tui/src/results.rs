//! Result panels of the two calculator views.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use immomatrix_core::content::BRAND;
use immomatrix_core::format::{format_chf, format_count, format_percent};
use immomatrix_core::{LossCategory, RoiResult, VacancyResult};

use crate::styles::{hex_color, ColorTheme};

fn amount_line(label: &str, value: String, theme: &ColorTheme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<24}"), theme.muted_style()),
        Span::styled(value, theme.text_style()),
    ])
}

/// Lines of the vacancy result panel.
#[must_use]
pub fn vacancy_lines(result: &VacancyResult) -> Vec<Line<'static>> {
    let theme = ColorTheme::default();
    let mut lines = vec![
        Line::from(Span::styled("Gesamtverlust", theme.muted_style())),
        Line::from(Span::styled(
            format_chf(result.total_loss),
            theme.header_style(),
        )),
        Line::raw(""),
    ];
    for category in LossCategory::ALL {
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(hex_color(category.color()))),
            Span::styled(format!("{:<22}", category.label()), theme.muted_style()),
            Span::styled(format_chf(result.component(category)), theme.text_style()),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{BRAND} Insight: "), theme.warning_style()),
        Span::raw(format!(
            "Potenzielle Einsparung {} (basierend auf -40% Time-to-Rent)",
            format_chf(result.potential_savings())
        )),
    ]));
    lines
}

/// Lines of the ROI result panel.
#[must_use]
pub fn roi_lines(result: &RoiResult) -> Vec<Line<'static>> {
    let theme = ColorTheme::default();
    let mut lines: Vec<Line<'static>> = result
        .funnel()
        .iter()
        .map(|stage| amount_line(stage.label, format_count(stage.count), &theme))
        .collect();
    lines.push(Line::raw(""));
    lines.push(amount_line(
        "Umsatz aus Abschlüssen",
        format_chf(result.revenue_from_leases),
        &theme,
    ));
    lines.push(amount_line(
        "Leerstands-Einsparung",
        format!("+{}", format_chf(result.vacancy_savings)),
        &theme,
    ));
    lines.push(amount_line("Total Value", format_chf(result.total_value), &theme));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<24}", "Return on Investment"), theme.muted_style()),
        Span::styled(
            format_percent(result.roi_percent),
            theme.signed_style(result.roi_percent),
        ),
    ]));
    lines
}

fn render_panel(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let theme = ColorTheme::default();
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} "))
                .border_style(theme.border_style()),
        );
    frame.render_widget(paragraph, area);
}

/// Render the vacancy result panel.
pub fn render_vacancy_result(frame: &mut Frame, area: Rect, result: &VacancyResult) {
    render_panel(frame, area, "Ergebnis", vacancy_lines(result));
}

/// Render the financial forecast panel.
pub fn render_roi_result(frame: &mut Frame, area: Rect, result: &RoiResult) {
    render_panel(frame, area, "Finanzielle Prognose", roi_lines(result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use immomatrix_core::{campaign_roi, vacancy_cost, RoiInput, VacancyInput};

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| &*s.content).collect::<String>())
            .collect()
    }

    #[test]
    fn vacancy_panel_text() {
        let lines = plain(&vacancy_lines(&vacancy_cost(&VacancyInput::default())));
        assert_eq!(lines[1], "CHF 40’500");
        assert!(lines.iter().any(|l| l.contains("Mietausfall") && l.contains("CHF 37’500")));
        assert!(lines.iter().any(|l| l.contains("Finanzierung") && l.contains("CHF 0")));
        assert!(lines.last().unwrap().contains("CHF 16’200"));
    }

    #[test]
    fn roi_panel_text() {
        let lines = plain(&roi_lines(&campaign_roi(&RoiInput::default())));
        assert!(lines[0].starts_with("Leads") && lines[0].ends_with("200"));
        assert!(lines[2].starts_with("Abschlüsse") && lines[2].ends_with("12"));
        assert!(lines.iter().any(|l| l.ends_with("+CHF 1’000")));
        assert!(lines.last().unwrap().ends_with("2790.0%"));
    }
}
