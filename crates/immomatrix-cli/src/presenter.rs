//! CLI result presenters: styled text and JSON.

use serde::Serialize;
use serde_json::{json, Value};

use immomatrix_core::content::{
    Section, BRAND, CASES, CONTACT, HERO_BODY, HERO_TITLE, SERVICES, TAGLINE, TOOLS,
};
use immomatrix_core::format::{format_chf, format_percent};
use immomatrix_core::{RoiInput, RoiResult, VacancyInput, VacancyResult};

use crate::output::{render_dashboard, render_roi, render_vacancy};
use crate::ui;

/// Presents calculator results and drafts to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a cost-of-vacancy result.
    fn present_vacancy(&self, input: &VacancyInput, result: &VacancyResult);

    /// Present a funnel/ROI result.
    fn present_roi(&self, input: &RoiInput, result: &RoiResult);

    /// Present the landing content.
    fn present_dashboard(&self);

    /// Present generated copy. `failed` marks fallback text.
    fn present_draft(&self, model: &str, text: &str, failed: bool);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Styled text presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_vacancy(&self, input: &VacancyInput, result: &VacancyResult) {
        if self.quiet {
            println!("{}", format_chf(result.total_loss));
            return;
        }
        ui::print_header("Cost-of-Vacancy Rechner");
        println!("{}", render_vacancy(input, result, self.verbose));
    }

    fn present_roi(&self, input: &RoiInput, result: &RoiResult) {
        if self.quiet {
            println!("{}", format_percent(result.roi_percent));
            return;
        }
        ui::print_header("ROI Rechner");
        println!("{}", render_roi(input, result, self.verbose));
        let verdict = if result.is_profitable() {
            "Kampagne rentiert"
        } else {
            "Kampagne rentiert nicht"
        };
        println!("{}", ui::highlight(verdict, !result.is_profitable()));
    }

    fn present_dashboard(&self) {
        if self.quiet {
            println!("{HERO_TITLE}");
            return;
        }
        println!("{}", render_dashboard());
    }

    fn present_draft(&self, model: &str, text: &str, failed: bool) {
        if failed {
            ui::print_warning(text);
            return;
        }
        if !self.quiet {
            ui::print_header(&format!("Kampagnen-Texte ({model})"));
        }
        println!("{text}");
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}

/// Envelope for JSON output.
#[derive(Debug, Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// JSON payload for a vacancy result.
#[must_use]
pub fn vacancy_json(input: &VacancyInput, result: &VacancyResult) -> Value {
    json!({
        "input": input,
        "result": result,
        "breakdown": result.breakdown(),
        "potential_savings": result.potential_savings(),
    })
}

/// JSON payload for a ROI result.
#[must_use]
pub fn roi_json(input: &RoiInput, result: &RoiResult) -> Value {
    json!({
        "input": input,
        "result": result,
        "funnel": result.funnel(),
    })
}

fn sections_json(items: &[Section]) -> Vec<Value> {
    items
        .iter()
        .map(|s| json!({ "title": s.title, "body": s.body }))
        .collect()
}

/// JSON payload for the landing content.
#[must_use]
pub fn dashboard_json() -> Value {
    json!({
        "brand": BRAND,
        "tagline": TAGLINE,
        "hero": { "title": HERO_TITLE, "body": HERO_BODY },
        "services": sections_json(&SERVICES),
        "tools": sections_json(&TOOLS),
        "cases": CASES
            .iter()
            .map(|c| json!({ "value": c.value, "unit": c.unit, "description": c.description }))
            .collect::<Vec<_>>(),
        "contact": { "title": CONTACT.title, "body": CONTACT.body },
    })
}

/// JSON presenter; one document per invocation on stdout.
pub struct JsonResultPresenter;

impl JsonResultPresenter {
    fn emit<T: Serialize>(&self, ok: bool, data: T) {
        match serde_json::to_string_pretty(&JsonOut { ok, data }) {
            Ok(doc) => println!("{doc}"),
            Err(err) => tracing::error!(error = %err, "failed to serialize output"),
        }
    }
}

impl ResultPresenter for JsonResultPresenter {
    fn present_vacancy(&self, input: &VacancyInput, result: &VacancyResult) {
        self.emit(true, vacancy_json(input, result));
    }

    fn present_roi(&self, input: &RoiInput, result: &RoiResult) {
        self.emit(true, roi_json(input, result));
    }

    fn present_dashboard(&self) {
        self.emit(true, dashboard_json());
    }

    fn present_draft(&self, model: &str, text: &str, failed: bool) {
        self.emit(
            true,
            json!({ "model": model, "text": text, "fallback": failed }),
        );
    }

    fn present_error(&self, error: &str) {
        self.emit(false, json!({ "error": error }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use immomatrix_core::{campaign_roi, vacancy_cost};

    #[test]
    fn vacancy_json_shape() {
        let input = VacancyInput::default();
        let value = vacancy_json(&input, &vacancy_cost(&input));
        assert_eq!(value["result"]["total_loss"], 40_500.0);
        assert_eq!(value["potential_savings"], 16_200.0);
        assert_eq!(value["input"]["vacant_units"], 5.0);
        let breakdown = value["breakdown"].as_array().unwrap();
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0]["label"], "Mietausfall");
        assert_eq!(breakdown[0]["color"], "#2563EB");
    }

    #[test]
    fn roi_json_shape() {
        let input = RoiInput::default();
        let value = roi_json(&input, &campaign_roi(&input));
        assert_eq!(value["result"]["leads"], 200);
        assert_eq!(value["result"]["roi_percent"], 2790.0);
        let funnel = value["funnel"].as_array().unwrap();
        assert_eq!(funnel[2]["label"], "Abschlüsse");
        assert_eq!(funnel[2]["count"], 12);
    }

    #[test]
    fn dashboard_json_shape() {
        let value = dashboard_json();
        assert_eq!(value["brand"], "ImmoMatrix");
        assert_eq!(value["services"].as_array().unwrap().len(), 4);
        assert_eq!(value["cases"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn envelope_serializes_ok_flag() {
        let doc = serde_json::to_value(JsonOut { ok: true, data: 1 }).unwrap();
        assert_eq!(doc, json!({ "ok": true, "data": 1 }));
    }

    #[test]
    fn presenters_do_not_panic() {
        let vacancy = VacancyInput::default();
        let roi = RoiInput::default();
        let presenters: Vec<Box<dyn ResultPresenter>> = vec![
            Box::new(CLIResultPresenter::new(false, false)),
            Box::new(CLIResultPresenter::new(true, false)),
            Box::new(CLIResultPresenter::new(false, true)),
            Box::new(JsonResultPresenter),
        ];
        for presenter in &presenters {
            presenter.present_vacancy(&vacancy, &vacancy_cost(&vacancy));
            presenter.present_roi(&roi, &campaign_roi(&roi));
            presenter.present_dashboard();
            presenter.present_draft("gemini-2.5-flash", "**Headline**", false);
            presenter.present_draft("gemini-2.5-flash", "Konnte keine Texte generieren.", true);
            presenter.present_error("ungültige Zahl");
        }
    }
}
