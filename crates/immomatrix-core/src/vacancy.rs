//! Cost-of-vacancy derivation.
//!
//! Converts the rent, cost, and duration figures of a vacancy period into
//! the total financial loss and its four components.

use serde::{Deserialize, Serialize};

use crate::calculator::{CalcError, Calculator};
use crate::constants::{
    colors, DEFAULT_FINANCING_COSTS, DEFAULT_MONTHLY_RENT, DEFAULT_OPERATING_COSTS,
    DEFAULT_OPPORTUNITY_RATE, DEFAULT_VACANCY_MONTHS, DEFAULT_VACANT_UNITS,
    TIME_TO_RENT_SAVINGS_SHARE,
};
use crate::fields::{FieldSpec, InputModel, Unit};

/// Inputs of the cost-of-vacancy calculator.
///
/// Values are not validated; negative entries propagate into the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VacancyInput {
    /// Net rent per unit and month (CHF).
    pub monthly_rent_per_unit: f64,
    /// Number of vacant units.
    pub vacant_units: f64,
    /// Vacancy duration in months.
    pub vacancy_duration_months: f64,
    /// Operating costs per unit and month (CHF).
    pub operating_cost_per_unit_per_month: f64,
    /// Financing costs per unit and month (CHF).
    pub financing_cost_per_unit_per_month: f64,
    /// Opportunity loss as a percentage of the rent loss.
    pub opportunity_loss_rate_percent: f64,
}

impl Default for VacancyInput {
    fn default() -> Self {
        Self {
            monthly_rent_per_unit: DEFAULT_MONTHLY_RENT,
            vacant_units: DEFAULT_VACANT_UNITS,
            vacancy_duration_months: DEFAULT_VACANCY_MONTHS,
            operating_cost_per_unit_per_month: DEFAULT_OPERATING_COSTS,
            financing_cost_per_unit_per_month: DEFAULT_FINANCING_COSTS,
            opportunity_loss_rate_percent: DEFAULT_OPPORTUNITY_RATE,
        }
    }
}

const VACANCY_FIELDS: [FieldSpec; 6] = [
    FieldSpec {
        key: "monthly_rent_per_unit",
        label: "Monatsmiete pro Einheit",
        hint: "Nettomiete",
        unit: Unit::Chf,
        step: 100.0,
    },
    FieldSpec {
        key: "vacant_units",
        label: "Einheiten",
        hint: "Leerstehend",
        unit: Unit::Count,
        step: 1.0,
    },
    FieldSpec {
        key: "vacancy_duration_months",
        label: "Dauer",
        hint: "Monate",
        unit: Unit::Months,
        step: 0.1,
    },
    FieldSpec {
        key: "operating_cost_per_unit_per_month",
        label: "Nebenkosten",
        hint: "pro Einheit/Monat",
        unit: Unit::Chf,
        step: 10.0,
    },
    FieldSpec {
        key: "financing_cost_per_unit_per_month",
        label: "Finanzierung",
        hint: "pro Monat (Zins)",
        unit: Unit::Chf,
        step: 10.0,
    },
    FieldSpec {
        key: "opportunity_loss_rate_percent",
        label: "Opportunität",
        hint: "Verlustrate",
        unit: Unit::Percent,
        step: 1.0,
    },
];

impl InputModel for VacancyInput {
    fn fields() -> &'static [FieldSpec] {
        &VACANCY_FIELDS
    }

    fn get(&self, key: &str) -> Option<f64> {
        match key {
            "monthly_rent_per_unit" => Some(self.monthly_rent_per_unit),
            "vacant_units" => Some(self.vacant_units),
            "vacancy_duration_months" => Some(self.vacancy_duration_months),
            "operating_cost_per_unit_per_month" => Some(self.operating_cost_per_unit_per_month),
            "financing_cost_per_unit_per_month" => Some(self.financing_cost_per_unit_per_month),
            "opportunity_loss_rate_percent" => Some(self.opportunity_loss_rate_percent),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: f64) -> Result<(), CalcError> {
        let slot = match key {
            "monthly_rent_per_unit" => &mut self.monthly_rent_per_unit,
            "vacant_units" => &mut self.vacant_units,
            "vacancy_duration_months" => &mut self.vacancy_duration_months,
            "operating_cost_per_unit_per_month" => &mut self.operating_cost_per_unit_per_month,
            "financing_cost_per_unit_per_month" => &mut self.financing_cost_per_unit_per_month,
            "opportunity_loss_rate_percent" => &mut self.opportunity_loss_rate_percent,
            _ => return Err(CalcError::UnknownField(key.to_string())),
        };
        *slot = value;
        Ok(())
    }
}

/// Result of the cost-of-vacancy derivation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VacancyResult {
    pub rent_loss: f64,
    pub operating_loss: f64,
    pub financing_loss: f64,
    pub opportunity_loss: f64,
    pub total_loss: f64,
}

impl VacancyResult {
    /// Amount saved when the vacancy period shrinks by 40 %.
    #[must_use]
    pub fn potential_savings(&self) -> f64 {
        self.total_loss * TIME_TO_RENT_SAVINGS_SHARE
    }

    /// Non-zero loss components for charting.
    ///
    /// Only strictly positive components are kept, in the fixed order
    /// rent, operating, financing, opportunity.
    #[must_use]
    pub fn breakdown(&self) -> Vec<BreakdownEntry> {
        LossCategory::ALL
            .iter()
            .map(|&category| BreakdownEntry {
                category,
                label: category.label(),
                value: self.component(category),
                color: category.color(),
            })
            .filter(|entry| entry.value > 0.0)
            .collect()
    }

    /// Value of one loss component.
    #[must_use]
    pub fn component(&self, category: LossCategory) -> f64 {
        match category {
            LossCategory::Rent => self.rent_loss,
            LossCategory::Operating => self.operating_loss,
            LossCategory::Financing => self.financing_loss,
            LossCategory::Opportunity => self.opportunity_loss,
        }
    }
}

/// Component of the vacancy loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LossCategory {
    Rent,
    Operating,
    Financing,
    Opportunity,
}

impl LossCategory {
    /// All categories in chart order.
    pub const ALL: [LossCategory; 4] = [
        LossCategory::Rent,
        LossCategory::Operating,
        LossCategory::Financing,
        LossCategory::Opportunity,
    ];

    /// German chart label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LossCategory::Rent => "Mietausfall",
            LossCategory::Operating => "Nebenkosten",
            LossCategory::Financing => "Finanzierung",
            LossCategory::Opportunity => "Opportunität",
        }
    }

    /// Hex color tag used by charts.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            LossCategory::Rent => colors::RENT_LOSS,
            LossCategory::Operating => colors::OPERATING_LOSS,
            LossCategory::Financing => colors::FINANCING_LOSS,
            LossCategory::Opportunity => colors::OPPORTUNITY_LOSS,
        }
    }
}

/// One slice of the vacancy breakdown chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakdownEntry {
    pub category: LossCategory,
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// Cost-of-vacancy calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct VacancyCalculator;

impl VacancyCalculator {
    /// Create a new calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for VacancyCalculator {
    type Input = VacancyInput;
    type Output = VacancyResult;

    fn derive(&self, input: &VacancyInput) -> VacancyResult {
        derive_vacancy(input)
    }

    fn name(&self) -> &str {
        "Cost-of-Vacancy"
    }
}

/// Derive the vacancy loss from its inputs.
///
/// Every output is recomputed from scratch. The function is total over
/// finite and non-finite inputs alike and performs no division by input
/// values.
#[must_use]
pub fn derive_vacancy(input: &VacancyInput) -> VacancyResult {
    let units = input.vacant_units;
    let months = input.vacancy_duration_months;

    let rent_loss = input.monthly_rent_per_unit * units * months;
    let operating_loss = input.operating_cost_per_unit_per_month * units * months;
    let financing_loss = input.financing_cost_per_unit_per_month * units * months;
    let opportunity_loss = if input.opportunity_loss_rate_percent > 0.0 {
        rent_loss * (input.opportunity_loss_rate_percent / 100.0)
    } else {
        0.0
    };
    let total_loss = rent_loss + operating_loss + financing_loss + opportunity_loss;

    VacancyResult {
        rent_loss,
        operating_loss,
        financing_loss,
        opportunity_loss,
        total_loss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_values() {
        let result = derive_vacancy(&VacancyInput::default());
        assert_eq!(result.rent_loss, 37_500.0);
        assert_eq!(result.operating_loss, 3_000.0);
        assert_eq!(result.financing_loss, 0.0);
        assert_eq!(result.opportunity_loss, 0.0);
        assert_eq!(result.total_loss, 40_500.0);
    }

    #[test]
    fn opportunity_loss_from_rate() {
        let input = VacancyInput {
            opportunity_loss_rate_percent: 10.0,
            ..VacancyInput::default()
        };
        let result = derive_vacancy(&input);
        assert_eq!(result.opportunity_loss, 37_500.0 * 0.1);
        assert_eq!(result.total_loss, 37_500.0 + 3_000.0 + 3_750.0);
    }

    #[test]
    fn negative_rate_yields_no_opportunity_loss() {
        let input = VacancyInput {
            opportunity_loss_rate_percent: -10.0,
            ..VacancyInput::default()
        };
        assert_eq!(derive_vacancy(&input).opportunity_loss, 0.0);
    }

    #[test]
    fn negative_inputs_propagate() {
        let input = VacancyInput {
            vacant_units: -2.0,
            ..VacancyInput::default()
        };
        let result = derive_vacancy(&input);
        assert_eq!(result.rent_loss, -15_000.0);
        assert!(result.total_loss < 0.0);
    }

    #[test]
    fn financing_loss_scales_with_units_and_months() {
        let input = VacancyInput {
            financing_cost_per_unit_per_month: 150.0,
            ..VacancyInput::default()
        };
        assert_eq!(derive_vacancy(&input).financing_loss, 150.0 * 5.0 * 3.0);
    }

    #[test]
    fn breakdown_filters_zero_components() {
        let result = derive_vacancy(&VacancyInput::default());
        let breakdown = result.breakdown();
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].label, "Mietausfall");
        assert_eq!(breakdown[0].color, colors::RENT_LOSS);
        assert_eq!(breakdown[1].label, "Nebenkosten");
    }

    #[test]
    fn breakdown_keeps_category_order() {
        let input = VacancyInput {
            financing_cost_per_unit_per_month: 100.0,
            opportunity_loss_rate_percent: 5.0,
            ..VacancyInput::default()
        };
        let categories: Vec<LossCategory> = derive_vacancy(&input)
            .breakdown()
            .iter()
            .map(|e| e.category)
            .collect();
        assert_eq!(categories, LossCategory::ALL.to_vec());
    }

    #[test]
    fn breakdown_drops_negative_components() {
        let input = VacancyInput {
            operating_cost_per_unit_per_month: -200.0,
            ..VacancyInput::default()
        };
        let breakdown = derive_vacancy(&input).breakdown();
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].category, LossCategory::Rent);
    }

    #[test]
    fn potential_savings_is_forty_percent() {
        let result = derive_vacancy(&VacancyInput::default());
        assert_eq!(result.potential_savings(), 40_500.0 * 0.4);
    }

    #[test]
    fn field_access_round_trip() {
        let mut input = VacancyInput::default();
        for field in VacancyInput::fields() {
            input.set(field.key, 7.0).unwrap();
            assert_eq!(input.get(field.key), Some(7.0));
        }
    }

    #[test]
    fn unknown_field_rejected() {
        let mut input = VacancyInput::default();
        assert_eq!(
            input.set("rent", 1.0),
            Err(CalcError::UnknownField("rent".into()))
        );
        assert_eq!(input.get("rent"), None);
    }

    #[test]
    fn set_text_parses() {
        let mut input = VacancyInput::default();
        input.set_text("vacancy_duration_months", "2,5").unwrap();
        assert_eq!(input.vacancy_duration_months, 2.5);
    }

    #[test]
    fn calculator_trait_matches_function() {
        let calc = VacancyCalculator::new();
        let input = VacancyInput::default();
        assert_eq!(calc.derive(&input), derive_vacancy(&input));
        assert_eq!(calc.name(), "Cost-of-Vacancy");
    }
}
