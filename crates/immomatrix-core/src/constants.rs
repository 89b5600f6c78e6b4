//! Default sample values, chart colors, and exit codes.

/// Sample monthly net rent per unit (CHF).
pub const DEFAULT_MONTHLY_RENT: f64 = 2500.0;

/// Sample number of vacant units.
pub const DEFAULT_VACANT_UNITS: f64 = 5.0;

/// Sample vacancy duration in months.
pub const DEFAULT_VACANCY_MONTHS: f64 = 3.0;

/// Sample operating costs per unit and month (CHF).
pub const DEFAULT_OPERATING_COSTS: f64 = 200.0;

/// Sample financing costs per unit and month (CHF).
pub const DEFAULT_FINANCING_COSTS: f64 = 0.0;

/// Sample opportunity loss rate (percent of rent loss).
pub const DEFAULT_OPPORTUNITY_RATE: f64 = 0.0;

/// Sample total advertising budget (CHF).
pub const DEFAULT_BUDGET: f64 = 10_000.0;

/// Sample cost per lead (CHF).
pub const DEFAULT_COST_PER_LEAD: f64 = 50.0;

/// Sample lead-to-viewing conversion rate (percent).
pub const DEFAULT_LEAD_TO_VIEWING_RATE: f64 = 20.0;

/// Sample viewing-to-lease conversion rate (percent).
pub const DEFAULT_VIEWING_TO_LEASE_RATE: f64 = 30.0;

/// Sample average contract value per lease (CHF).
pub const DEFAULT_AVERAGE_LEASE_VALUE: f64 = 24_000.0;

/// Sample time-to-rent reduction (percent).
pub const DEFAULT_TIME_REDUCTION_RATE: f64 = 50.0;

/// Sample monthly cost of vacancy (CHF).
pub const DEFAULT_COST_OF_VACANCY: f64 = 2000.0;

/// Cost per lead substituted when the entered value is zero or negative.
pub const FALLBACK_COST_PER_LEAD: f64 = 1.0;

/// Share of the total vacancy loss recovered by a 40 % shorter time-to-rent.
pub const TIME_TO_RENT_SAVINGS_SHARE: f64 = 0.4;

/// Chart colors for the vacancy breakdown, in category order.
pub mod colors {
    pub const RENT_LOSS: &str = "#2563EB";
    pub const OPERATING_LOSS: &str = "#EF4444";
    pub const FINANCING_LOSS: &str = "#8B5CF6";
    pub const OPPORTUNITY_LOSS: &str = "#F59E0B";
}

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration or input.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn savings_share_is_forty_percent() {
        assert_eq!(TIME_TO_RENT_SAVINGS_SHARE * 100.0, 40.0);
    }

    #[test]
    fn colors_are_hex() {
        for c in [
            colors::RENT_LOSS,
            colors::OPERATING_LOSS,
            colors::FINANCING_LOSS,
            colors::OPPORTUNITY_LOSS,
        ] {
            assert!(c.starts_with('#'));
            assert_eq!(c.len(), 7);
        }
    }
}
