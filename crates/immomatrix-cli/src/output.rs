//! CLI output formatting.
//!
//! Everything here renders to plain `String`s; styling is applied by the
//! presenters.

use std::io::{self, Write};
use std::path::Path;

use immomatrix_core::content::{BRAND, CASES, CONTACT, HERO_BODY, HERO_TITLE, SERVICES, TAGLINE, TOOLS};
use immomatrix_core::format::{format_chf, format_count, format_decimal, format_percent};
use immomatrix_core::{InputModel, LossCategory, RoiInput, RoiResult, Unit, VacancyInput, VacancyResult};

const LABEL_WIDTH: usize = 28;

/// Format an input value with its unit, e.g. `2’500 CHF` or `20%`.
#[must_use]
pub fn format_input(value: f64, unit: Unit) -> String {
    let number = format_decimal(value);
    match unit {
        Unit::Count => number,
        Unit::Percent => format!("{number}%"),
        Unit::Chf | Unit::Months => format!("{number} {}", unit.suffix()),
    }
}

/// One aligned `label value` line.
fn row(label: &str, value: &str) -> String {
    format!("  {label:<LABEL_WIDTH$} {value}")
}

fn input_rows<I: InputModel>(input: &I) -> Vec<String> {
    I::fields()
        .iter()
        .filter_map(|spec| {
            let label = format!("{} ({})", spec.label, spec.hint);
            input
                .get(spec.key)
                .map(|v| row(&label, &format_input(v, spec.unit)))
        })
        .collect()
}

/// Render the cost-of-vacancy result.
///
/// Verbose output echoes the inputs first.
#[must_use]
pub fn render_vacancy(input: &VacancyInput, result: &VacancyResult, verbose: bool) -> String {
    let mut lines = Vec::new();
    if verbose {
        lines.push("Eingaben".to_string());
        lines.extend(input_rows(input));
        lines.push(String::new());
    }

    lines.push("Kostenaufstellung".to_string());
    for category in LossCategory::ALL {
        lines.push(row(category.label(), &format_chf(result.component(category))));
    }
    lines.push(row("Gesamtverlust", &format_chf(result.total_loss)));
    lines.push(String::new());
    lines.push(format!(
        "{BRAND} Insight: Potenzielle Einsparung {} (basierend auf -40% Time-to-Rent).",
        format_chf(result.potential_savings())
    ));
    lines.join("\n")
}

/// Render the funnel and the financial forecast.
#[must_use]
pub fn render_roi(input: &RoiInput, result: &RoiResult, verbose: bool) -> String {
    let mut lines = Vec::new();
    if verbose {
        lines.push("Eingaben".to_string());
        lines.extend(input_rows(input));
        lines.push(String::new());
    }

    lines.push("Funnel".to_string());
    for stage in result.funnel() {
        lines.push(row(stage.label, &format_count(stage.count)));
    }
    lines.push(String::new());
    lines.push("Finanzielle Prognose".to_string());
    lines.push(row("Umsatz aus Abschlüssen", &format_chf(result.revenue_from_leases)));
    lines.push(row(
        "Leerstands-Einsparung",
        &format!("+{}", format_chf(result.vacancy_savings)),
    ));
    lines.push(row("Total Value", &format_chf(result.total_value)));
    lines.push(row("Return on Investment", &format_percent(result.roi_percent)));
    lines.join("\n")
}

/// Render the landing content.
#[must_use]
pub fn render_dashboard() -> String {
    let mut lines = vec![
        format!("{BRAND} | {TAGLINE}"),
        String::new(),
        HERO_TITLE.to_string(),
        HERO_BODY.to_string(),
        String::new(),
        "Leistungen".to_string(),
    ];
    for service in &SERVICES {
        lines.push(format!("  - {}: {}", service.title, service.body));
    }
    lines.push(String::new());
    lines.push("Tools".to_string());
    for tool in &TOOLS {
        lines.push(format!("  - {}: {}", tool.title, tool.body));
    }
    lines.push(String::new());
    lines.push("Cases".to_string());
    for case in &CASES {
        lines.push(format!("  - {} {} {}", case.value, case.unit, case.description));
    }
    lines.push(String::new());
    lines.push(format!("{}: {}", CONTACT.title, CONTACT.body));
    lines.join("\n")
}

/// Write text to a file, creating or truncating it.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, text: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        file.write_all(b"\n")?;
    }
    Ok(())
}
