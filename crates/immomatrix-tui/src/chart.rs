//! Bar charts for the loss breakdown and the funnel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use immomatrix_core::format::{format_chf, format_count};
use immomatrix_core::{BreakdownEntry, FunnelStage};

use crate::styles::hex_color;

/// Height of the tallest bar. `BarChart` multiplies bar values by the
/// chart height, so values are scaled into this range first.
const BAR_SCALE: f64 = 1000.0;

/// Bar heights for `values`, scaled so the largest positive value is
/// `BAR_SCALE`; negatives, NaN and infinities draw as empty bars.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_bars(values: &[f64]) -> Vec<u64> {
    let drawable = |v: f64| v.is_finite() && v > 0.0;
    let max = values
        .iter()
        .copied()
        .filter(|&v| drawable(v))
        .fold(0.0_f64, f64::max);
    values
        .iter()
        .map(|&v| {
            if drawable(v) && max > 0.0 {
                (v / max * BAR_SCALE).round() as u64
            } else {
                0
            }
        })
        .collect()
}

/// Width that lets `count` bars fill `area`.
#[allow(clippy::cast_possible_truncation)]
fn bar_width(area: Rect, count: usize) -> u16 {
    let inner = area.width.saturating_sub(2) as usize;
    let per_bar = inner / count.max(1);
    per_bar.saturating_sub(1).clamp(3, 24) as u16
}

/// Render the cost breakdown, one colored bar per non-zero component.
pub fn render_breakdown(frame: &mut Frame, area: Rect, entries: &[BreakdownEntry]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Kostenaufteilung ");

    if entries.is_empty() {
        let empty = Paragraph::new("Keine Kosten")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let values: Vec<f64> = entries.iter().map(|entry| entry.value).collect();
    let bars: Vec<Bar> = entries
        .iter()
        .zip(scaled_bars(&values))
        .map(|(entry, height)| {
            Bar::default()
                .value(height)
                .label(Line::from(entry.label))
                .text_value(format_chf(entry.value))
                .style(Style::default().fg(hex_color(entry.color)))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width(area, bars.len()))
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

/// Render the three funnel stages.
pub fn render_funnel(frame: &mut Frame, area: Rect, stages: &[FunnelStage]) {
    #[allow(clippy::cast_precision_loss)]
    let values: Vec<f64> = stages.iter().map(|stage| stage.count as f64).collect();
    let bars: Vec<Bar> = stages
        .iter()
        .zip(scaled_bars(&values))
        .map(|(stage, height)| {
            Bar::default()
                .value(height)
                .label(Line::from(stage.label))
                .text_value(format_count(stage.count))
                .style(Style::default().fg(Color::Rgb(0x63, 0x66, 0xF1)))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Conversion Flow "),
        )
        .bar_width(bar_width(area, bars.len()))
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use immomatrix_core::{campaign_roi, vacancy_cost, RoiInput, Stage, VacancyInput};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn screen_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(width: u16, height: u16, render: impl FnOnce(&mut Frame, Rect)) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let frame = terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area);
            })
            .unwrap();
        screen_text(frame.buffer)
    }

    #[test]
    fn scaled_bars_are_relative_to_max() {
        assert_eq!(scaled_bars(&[37_500.0, 3_000.0]), vec![1000, 80]);
        assert_eq!(scaled_bars(&[-5.0, f64::NAN, f64::INFINITY, 2.0]), vec![0, 0, 0, 1000]);
        assert_eq!(scaled_bars(&[0.0, -1.0]), vec![0, 0]);
        assert!(scaled_bars(&[]).is_empty());
    }

    #[test]
    fn scaled_bars_stay_small_for_huge_values() {
        let heights = scaled_bars(&[1.5e22, f64::MAX, 9.2e18]);
        assert!(heights.iter().all(|&h| h <= 1000));
        assert_eq!(heights[1], 1000);
    }

    #[test]
    fn huge_breakdown_renders() {
        let result = vacancy_cost(&VacancyInput {
            monthly_rent_per_unit: 1e21,
            ..VacancyInput::default()
        });
        let text = draw(60, 12, |frame, area| {
            render_breakdown(frame, area, &result.breakdown());
        });
        assert!(text.contains("Mietausfall"));
    }

    #[test]
    fn saturated_funnel_renders() {
        let stages = [
            FunnelStage {
                stage: Stage::Leads,
                label: Stage::Leads.label(),
                count: i64::MAX,
            },
            FunnelStage {
                stage: Stage::Viewings,
                label: Stage::Viewings.label(),
                count: i64::MAX - 1,
            },
            FunnelStage {
                stage: Stage::Leases,
                label: Stage::Leases.label(),
                count: 1,
            },
        ];
        let text = draw(60, 12, |frame, area| render_funnel(frame, area, &stages));
        assert!(text.contains("Leads"));
    }

    #[test]
    fn bar_width_bounds() {
        assert_eq!(bar_width(Rect::new(0, 0, 10, 10), 4), 3);
        assert_eq!(bar_width(Rect::new(0, 0, 200, 10), 2), 24);
    }

    #[test]
    fn breakdown_labels_rendered() {
        let result = vacancy_cost(&VacancyInput::default());
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let frame = terminal
            .draw(|frame| {
                let area = frame.area();
                render_breakdown(frame, area, &result.breakdown());
            })
            .unwrap();
        let text = screen_text(frame.buffer);
        assert!(text.contains("Kostenaufteilung"));
        assert!(text.contains("Mietausfall"));
    }

    #[test]
    fn empty_breakdown_shows_placeholder() {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let frame = terminal
            .draw(|frame| {
                let area = frame.area();
                render_breakdown(frame, area, &[]);
            })
            .unwrap();
        assert!(screen_text(frame.buffer).contains("Keine Kosten"));
    }

    #[test]
    fn funnel_renders_all_stages() {
        let result = campaign_roi(&RoiInput::default());
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let frame = terminal
            .draw(|frame| {
                let area = frame.area();
                render_funnel(frame, area, &result.funnel());
            })
            .unwrap();
        let text = screen_text(frame.buffer);
        assert!(text.contains("Leads"));
        assert!(text.contains("Abschlüsse"));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let result = campaign_roi(&RoiInput::default());
        let backend = TestBackend::new(8, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_funnel(frame, area, &result.funnel());
            })
            .unwrap();
    }
}
