//! ROI and marketing funnel derivation.
//!
//! Models a linear funnel (budget -> leads -> viewings -> leases) and the
//! financial return of the campaign. Each funnel stage is truncated
//! toward negative infinity, so fractional leads, viewings, or leases
//! never appear.

use serde::{Deserialize, Serialize};

use crate::calculator::{CalcError, Calculator};
use crate::constants::{
    DEFAULT_AVERAGE_LEASE_VALUE, DEFAULT_BUDGET, DEFAULT_COST_OF_VACANCY, DEFAULT_COST_PER_LEAD,
    DEFAULT_LEAD_TO_VIEWING_RATE, DEFAULT_TIME_REDUCTION_RATE, DEFAULT_VIEWING_TO_LEASE_RATE,
    FALLBACK_COST_PER_LEAD,
};
use crate::fields::{FieldSpec, InputModel, Unit};

/// Inputs of the ROI calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInput {
    /// Total advertising budget (CHF).
    pub budget: f64,
    /// Estimated cost per lead (CHF).
    pub cost_per_lead: f64,
    /// Lead-to-viewing conversion (percent).
    pub lead_to_viewing_rate_percent: f64,
    /// Viewing-to-lease conversion (percent).
    pub viewing_to_lease_rate_percent: f64,
    /// Average contract value per lease (CHF).
    pub average_lease_value: f64,
    /// Reduction of the time-to-rent (percent).
    pub time_reduction_rate_percent: f64,
    /// Monthly cost of vacancy (CHF).
    pub cost_of_vacancy_per_month: f64,
}

impl Default for RoiInput {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            cost_per_lead: DEFAULT_COST_PER_LEAD,
            lead_to_viewing_rate_percent: DEFAULT_LEAD_TO_VIEWING_RATE,
            viewing_to_lease_rate_percent: DEFAULT_VIEWING_TO_LEASE_RATE,
            average_lease_value: DEFAULT_AVERAGE_LEASE_VALUE,
            time_reduction_rate_percent: DEFAULT_TIME_REDUCTION_RATE,
            cost_of_vacancy_per_month: DEFAULT_COST_OF_VACANCY,
        }
    }
}

const ROI_FIELDS: [FieldSpec; 7] = [
    FieldSpec {
        key: "budget",
        label: "Werbebudget",
        hint: "Total",
        unit: Unit::Chf,
        step: 500.0,
    },
    FieldSpec {
        key: "cost_per_lead",
        label: "Cost per Lead (CPL)",
        hint: "Ø Schätzung",
        unit: Unit::Chf,
        step: 5.0,
    },
    FieldSpec {
        key: "lead_to_viewing_rate_percent",
        label: "Lead → Besichtigung",
        hint: "Konversion",
        unit: Unit::Percent,
        step: 1.0,
    },
    FieldSpec {
        key: "viewing_to_lease_rate_percent",
        label: "Besichtigung → Deal",
        hint: "Konversion",
        unit: Unit::Percent,
        step: 1.0,
    },
    FieldSpec {
        key: "average_lease_value",
        label: "Vertragswert",
        hint: "Ø pro Abschluss",
        unit: Unit::Chf,
        step: 1000.0,
    },
    FieldSpec {
        key: "time_reduction_rate_percent",
        label: "Zeitgewinn",
        hint: "Time-to-Rent",
        unit: Unit::Percent,
        step: 5.0,
    },
    FieldSpec {
        key: "cost_of_vacancy_per_month",
        label: "Leerstandskosten",
        hint: "/Mt",
        unit: Unit::Chf,
        step: 100.0,
    },
];

impl InputModel for RoiInput {
    fn fields() -> &'static [FieldSpec] {
        &ROI_FIELDS
    }

    fn get(&self, key: &str) -> Option<f64> {
        match key {
            "budget" => Some(self.budget),
            "cost_per_lead" => Some(self.cost_per_lead),
            "lead_to_viewing_rate_percent" => Some(self.lead_to_viewing_rate_percent),
            "viewing_to_lease_rate_percent" => Some(self.viewing_to_lease_rate_percent),
            "average_lease_value" => Some(self.average_lease_value),
            "time_reduction_rate_percent" => Some(self.time_reduction_rate_percent),
            "cost_of_vacancy_per_month" => Some(self.cost_of_vacancy_per_month),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: f64) -> Result<(), CalcError> {
        let slot = match key {
            "budget" => &mut self.budget,
            "cost_per_lead" => &mut self.cost_per_lead,
            "lead_to_viewing_rate_percent" => &mut self.lead_to_viewing_rate_percent,
            "viewing_to_lease_rate_percent" => &mut self.viewing_to_lease_rate_percent,
            "average_lease_value" => &mut self.average_lease_value,
            "time_reduction_rate_percent" => &mut self.time_reduction_rate_percent,
            "cost_of_vacancy_per_month" => &mut self.cost_of_vacancy_per_month,
            _ => return Err(CalcError::UnknownField(key.to_string())),
        };
        *slot = value;
        Ok(())
    }
}

/// Result of the ROI derivation.
///
/// The stage counts are whole numbers that saturate at `i64::MAX` (and
/// `i64::MIN`). The money fields are derived from the unsaturated stage
/// values, so a saturated count does not cap the revenue.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RoiResult {
    /// `floor(budget / cost_per_lead)`, saturating at `i64::MAX`.
    pub leads: i64,
    /// Leads times the viewing rate, floored and saturating.
    pub viewings: i64,
    /// Viewings times the lease rate, floored and saturating.
    pub leases: i64,
    pub revenue_from_leases: f64,
    pub vacancy_savings: f64,
    pub total_value: f64,
    pub roi_percent: f64,
}

impl RoiResult {
    /// The three funnel stages with their counts, in stage order.
    #[must_use]
    pub fn funnel(&self) -> [FunnelStage; 3] {
        [
            FunnelStage {
                stage: Stage::Leads,
                label: Stage::Leads.label(),
                count: self.leads,
            },
            FunnelStage {
                stage: Stage::Viewings,
                label: Stage::Viewings.label(),
                count: self.viewings,
            },
            FunnelStage {
                stage: Stage::Leases,
                label: Stage::Leases.label(),
                count: self.leases,
            },
        ]
    }

    /// Whether the campaign pays for itself.
    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.roi_percent >= 0.0
    }
}

/// A funnel stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Leads,
    Viewings,
    Leases,
}

impl Stage {
    /// German stage label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Stage::Leads => "Leads",
            Stage::Viewings => "Besichtigungen",
            Stage::Leases => "Abschlüsse",
        }
    }
}

/// One entry of the funnel series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FunnelStage {
    pub stage: Stage,
    pub label: &'static str,
    pub count: i64,
}

/// ROI and funnel calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoiCalculator;

impl RoiCalculator {
    /// Create a new calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for RoiCalculator {
    type Input = RoiInput;
    type Output = RoiResult;

    fn derive(&self, input: &RoiInput) -> RoiResult {
        derive_roi(input)
    }

    fn name(&self) -> &str {
        "ROI"
    }
}

/// Derive the funnel and the campaign return.
///
/// A cost per lead of zero or below is replaced by 1, and a budget of
/// zero or below reports an ROI of exactly 0, so the result never
/// contains NaN or infinity from a division.
#[must_use]
pub fn derive_roi(input: &RoiInput) -> RoiResult {
    let safe_cpl = if input.cost_per_lead > 0.0 {
        input.cost_per_lead
    } else {
        FALLBACK_COST_PER_LEAD
    };

    let leads = (input.budget / safe_cpl).floor();
    let viewings = (leads * (input.lead_to_viewing_rate_percent / 100.0)).floor();
    let leases = (viewings * (input.viewing_to_lease_rate_percent / 100.0)).floor();

    let revenue_from_leases = leases * input.average_lease_value;
    let vacancy_savings =
        if input.time_reduction_rate_percent > 0.0 && input.cost_of_vacancy_per_month > 0.0 {
            (input.time_reduction_rate_percent / 100.0) * input.cost_of_vacancy_per_month
        } else {
            0.0
        };
    let total_value = revenue_from_leases + vacancy_savings;
    let roi_percent = if input.budget > 0.0 {
        ((total_value - input.budget) / input.budget) * 100.0
    } else {
        0.0
    };

    RoiResult {
        leads: stage_count(leads),
        viewings: stage_count(viewings),
        leases: stage_count(leases),
        revenue_from_leases,
        vacancy_savings,
        total_value,
        roi_percent,
    }
}

/// Convert a floored stage value to a count (saturating, NaN as 0).
#[allow(clippy::cast_possible_truncation)]
fn stage_count(value: f64) -> i64 {
    value as i64
}
