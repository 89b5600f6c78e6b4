//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use immomatrix_copy::{CampaignDraftRequest, DEFAULT_ENDPOINT, DEFAULT_MODEL};
use immomatrix_core::constants::{
    DEFAULT_AVERAGE_LEASE_VALUE, DEFAULT_BUDGET, DEFAULT_COST_OF_VACANCY, DEFAULT_COST_PER_LEAD,
    DEFAULT_FINANCING_COSTS, DEFAULT_LEAD_TO_VIEWING_RATE, DEFAULT_MONTHLY_RENT,
    DEFAULT_OPERATING_COSTS, DEFAULT_OPPORTUNITY_RATE, DEFAULT_TIME_REDUCTION_RATE,
    DEFAULT_VACANCY_MONTHS, DEFAULT_VACANT_UNITS, DEFAULT_VIEWING_TO_LEASE_RATE,
};
use immomatrix_core::{CalcError, InputModel, RoiInput, VacancyInput};

/// Environment variable read when `API_KEY` is unset.
pub const FALLBACK_KEY_ENV: &str = "GEMINI_API_KEY";

/// ImmoMatrix: vacancy and marketing ROI calculators for Swiss real estate.
#[derive(Parser, Debug)]
#[command(name = "immomatrix", version, about)]
pub struct AppConfig {
    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Quiet mode (only output the headline number).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands; no subcommand shows the dashboard.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the landing content.
    Dashboard,
    /// Compute the cost of vacancy.
    #[command(allow_negative_numbers = true)]
    Vacancy(VacancyArgs),
    /// Compute the campaign funnel and ROI.
    #[command(allow_negative_numbers = true)]
    Roi(RoiArgs),
    /// Generate campaign copy with the text service.
    Draft(DraftArgs),
    /// Launch the interactive dashboard.
    Tui(TuiArgs),
    /// Generate shell completion.
    Completion {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Cost-of-vacancy inputs.
#[derive(Args, Debug, Clone)]
pub struct VacancyArgs {
    /// Monthly net rent per unit (CHF).
    #[arg(long, default_value_t = DEFAULT_MONTHLY_RENT)]
    pub monthly_rent: f64,

    /// Number of vacant units.
    #[arg(long, default_value_t = DEFAULT_VACANT_UNITS)]
    pub units: f64,

    /// Vacancy duration in months.
    #[arg(long, default_value_t = DEFAULT_VACANCY_MONTHS)]
    pub months: f64,

    /// Operating costs per unit and month (CHF).
    #[arg(long, default_value_t = DEFAULT_OPERATING_COSTS)]
    pub operating_costs: f64,

    /// Financing costs per unit and month (CHF).
    #[arg(long, default_value_t = DEFAULT_FINANCING_COSTS)]
    pub financing_costs: f64,

    /// Opportunity loss rate (percent of rent loss).
    #[arg(long, default_value_t = DEFAULT_OPPORTUNITY_RATE)]
    pub opportunity_rate: f64,

    /// Override a field by key, e.g. `--set monthly_rent_per_unit=2'800`.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

impl VacancyArgs {
    /// Build the input model, applying `--set` overrides last.
    pub fn to_input(&self) -> Result<VacancyInput, CalcError> {
        let mut input = VacancyInput {
            monthly_rent_per_unit: self.monthly_rent,
            vacant_units: self.units,
            vacancy_duration_months: self.months,
            operating_cost_per_unit_per_month: self.operating_costs,
            financing_cost_per_unit_per_month: self.financing_costs,
            opportunity_loss_rate_percent: self.opportunity_rate,
        };
        apply_overrides(&mut input, &self.overrides)?;
        Ok(input)
    }
}

/// Campaign funnel inputs.
#[derive(Args, Debug, Clone)]
pub struct RoiArgs {
    /// Total advertising budget (CHF).
    #[arg(long, default_value_t = DEFAULT_BUDGET)]
    pub budget: f64,

    /// Cost per lead (CHF).
    #[arg(long, default_value_t = DEFAULT_COST_PER_LEAD)]
    pub cost_per_lead: f64,

    /// Lead to viewing conversion (percent).
    #[arg(long, default_value_t = DEFAULT_LEAD_TO_VIEWING_RATE)]
    pub lead_to_viewing_rate: f64,

    /// Viewing to lease conversion (percent).
    #[arg(long, default_value_t = DEFAULT_VIEWING_TO_LEASE_RATE)]
    pub viewing_to_lease_rate: f64,

    /// Average contract value per lease (CHF).
    #[arg(long, default_value_t = DEFAULT_AVERAGE_LEASE_VALUE)]
    pub average_lease_value: f64,

    /// Time-to-rent reduction (percent).
    #[arg(long, default_value_t = DEFAULT_TIME_REDUCTION_RATE)]
    pub time_reduction_rate: f64,

    /// Cost of vacancy per month (CHF).
    #[arg(long, default_value_t = DEFAULT_COST_OF_VACANCY)]
    pub cost_of_vacancy: f64,

    /// Override a field by key, e.g. `--set budget=20'000`.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

impl RoiArgs {
    /// Build the input model, applying `--set` overrides last.
    pub fn to_input(&self) -> Result<RoiInput, CalcError> {
        let mut input = RoiInput {
            budget: self.budget,
            cost_per_lead: self.cost_per_lead,
            lead_to_viewing_rate_percent: self.lead_to_viewing_rate,
            viewing_to_lease_rate_percent: self.viewing_to_lease_rate,
            average_lease_value: self.average_lease_value,
            time_reduction_rate_percent: self.time_reduction_rate,
            cost_of_vacancy_per_month: self.cost_of_vacancy,
        };
        apply_overrides(&mut input, &self.overrides)?;
        Ok(input)
    }
}

/// Apply `KEY=VALUE` pairs to an input model.
fn apply_overrides<I: InputModel>(input: &mut I, pairs: &[String]) -> Result<(), CalcError> {
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| CalcError::Config(format!("expected KEY=VALUE, got {pair:?}")))?;
        input.set_text(key.trim(), value)?;
    }
    Ok(())
}

/// Campaign facts for the copy draft.
#[derive(Args, Debug, Clone)]
pub struct CampaignArgs {
    /// Kind of project.
    #[arg(long)]
    pub project_type: Option<String>,

    /// Location of the project.
    #[arg(long)]
    pub location: Option<String>,

    /// Unique selling points.
    #[arg(long)]
    pub usp: Option<String>,

    /// Target audience.
    #[arg(long)]
    pub target_audience: Option<String>,
}

impl CampaignArgs {
    /// Build the request; unset fields keep the sample campaign.
    #[must_use]
    pub fn to_request(&self) -> CampaignDraftRequest {
        let sample = CampaignDraftRequest::default();
        CampaignDraftRequest {
            project_type: self.project_type.clone().unwrap_or(sample.project_type),
            location: self.location.clone().unwrap_or(sample.location),
            usp: self.usp.clone().unwrap_or(sample.usp),
            target_audience: self.target_audience.clone().unwrap_or(sample.target_audience),
        }
    }
}

/// Text service connection.
#[derive(Args, Debug, Clone)]
pub struct ServiceArgs {
    /// API key of the text service.
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for generation.
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the text service.
    #[arg(long, env = "IMMOMATRIX_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl ServiceArgs {
    /// API key from `--api-key`/`API_KEY`, else `GEMINI_API_KEY`.
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        pick_api_key(self.api_key.clone(), std::env::var(FALLBACK_KEY_ENV).ok())
    }
}

fn pick_api_key(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary
        .filter(|key| !key.trim().is_empty())
        .or_else(|| fallback.filter(|key| !key.trim().is_empty()))
}

/// Arguments of the `draft` subcommand.
#[derive(Args, Debug, Clone)]
pub struct DraftArgs {
    #[command(flatten)]
    pub campaign: CampaignArgs,

    #[command(flatten)]
    pub service: ServiceArgs,

    /// Also write the generated text to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments of the `tui` subcommand.
#[derive(Args, Debug, Clone)]
pub struct TuiArgs {
    #[command(flatten)]
    pub campaign: CampaignArgs,

    #[command(flatten)]
    pub service: ServiceArgs,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
