//! # immomatrix-core
//!
//! Core library for the ImmoMatrix calculators: the cost-of-vacancy and
//! ROI/funnel derivations, their editable input models, and de-CH
//! formatting of the results.

pub mod calculator;
pub mod constants;
pub mod content;
pub mod fields;
pub mod format;
pub mod live;
pub mod roi;
pub mod vacancy;

// Re-exports
pub use calculator::{CalcError, Calculator};
pub use constants::exit_codes;
pub use fields::{FieldSpec, InputModel, Unit};
pub use live::LiveCalculation;
pub use roi::{derive_roi, FunnelStage, RoiCalculator, RoiInput, RoiResult, Stage};
pub use vacancy::{
    derive_vacancy, BreakdownEntry, LossCategory, VacancyCalculator, VacancyInput, VacancyResult,
};

/// Cost of vacancy for the given inputs.
///
/// # Example
/// ```
/// let result = immomatrix_core::vacancy_cost(&immomatrix_core::VacancyInput::default());
/// assert_eq!(result.total_loss, 40_500.0);
/// ```
#[must_use]
pub fn vacancy_cost(input: &VacancyInput) -> VacancyResult {
    VacancyCalculator::new().derive(input)
}

/// Funnel and ROI for the given campaign inputs.
///
/// # Example
/// ```
/// let result = immomatrix_core::campaign_roi(&immomatrix_core::RoiInput::default());
/// assert_eq!(result.leases, 12);
/// ```
#[must_use]
pub fn campaign_roi(input: &RoiInput) -> RoiResult {
    RoiCalculator::new().derive(input)
}
