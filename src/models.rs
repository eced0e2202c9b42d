//! Data models for the Hiring Cost Engine.
//!
//! The `models` module defines the serialisable structs and enums
//! representing pay descriptors, hiring-phase inputs, ad-hoc service
//! entries and the computed cost breakdown.  These data types derive
//! `Serialize` and `Deserialize` so that callers can persist or
//! transmit them as JSON; the engine itself never performs I/O.  They
//! form the engine's entire input and output surface.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a pay figure is expressed.  `Unset` marks a descriptor the user
/// has not filled in; the normalizer substitutes a configured default
/// in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayType {
    Monthly,
    Hourly,
    Unset,
}

/// A raw pay descriptor as entered by the caller.
///
/// Meaningful only when `pay_type` is not `Unset` and `pay_amount` is
/// positive; anything else is treated as "use the configured default".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayInput {
    pub pay_type: PayType,
    /// Monthly gross for `Monthly`, hourly gross for `Hourly`.
    pub pay_amount: f64,
    /// Contracted hours per month; only relevant for hourly pay.  When
    /// absent or non-positive the configured default applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_per_month: Option<f64>,
}

impl PayInput {
    /// An unset descriptor, the state every pay field starts in.
    pub fn unset() -> Self {
        PayInput {
            pay_type: PayType::Unset,
            pay_amount: 0.0,
            hours_per_month: None,
        }
    }
}

/// Canonical monthly/hourly figures derived from a [`PayInput`].
///
/// Invariant: `employer_monthly_cost` equals `monthly_gross` times
/// `1 + social_tax_rate + employer_ui_rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPay {
    pub monthly_gross: f64,
    /// Hourly rate from gross pay only, excluding employer taxes.
    pub gross_hourly_rate: f64,
    /// Hourly rate including employer-side payroll taxes.
    pub employer_hourly_rate: f64,
    pub employer_monthly_cost: f64,
    /// True iff the source descriptor was unset or non-positive and a
    /// configured default was substituted.
    pub is_default: bool,
}

impl NormalizedPay {
    /// The all-zero result used for disabled roles.
    pub fn zero() -> Self {
        NormalizedPay {
            monthly_gross: 0.0,
            gross_hourly_rate: 0.0,
            employer_hourly_rate: 0.0,
            employer_monthly_cost: 0.0,
            is_default: true,
        }
    }
}

/// The three internal roles whose time is priced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Hr,
    Manager,
    Team,
}

/// Pay descriptor for one internal role.  A disabled role contributes
/// zero to every time cost regardless of its pay fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePayInput {
    pub enabled: bool,
    #[serde(flatten)]
    pub pay: PayInput,
}

impl RolePayInput {
    /// An enabled role with no pay entered yet.
    pub fn enabled_unset() -> Self {
        RolePayInput {
            enabled: true,
            pay: PayInput::unset(),
        }
    }
}

/// Pay descriptors for all three roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolesInput {
    pub hr: RolePayInput,
    pub manager: RolePayInput,
    pub team: RolePayInput,
}

/// Normalized pay for all three roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRoles {
    pub hr: NormalizedPay,
    pub manager: NormalizedPay,
    pub team: NormalizedPay,
}

impl NormalizedRoles {
    pub fn get(&self, role: Role) -> &NormalizedPay {
        match role {
            Role::Hr => &self.hr,
            Role::Manager => &self.manager,
            Role::Team => &self.team,
        }
    }
}

/// How an outsourced service is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BillingType {
    Monthly,
    Hourly,
    OneOff,
}

/// Pricing details for one service entry.
///
/// Exactly one of the two variants is present; a service is either
/// performed by in-house staff (priced at their employer hourly rate)
/// or bought in (priced by the vendor's billing terms).  There is no
/// partial or mixed state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "serviceType", rename_all = "lowercase")]
pub enum ServiceDetails {
    #[serde(rename_all = "camelCase")]
    Inhouse {
        pay_type: PayType,
        pay_amount: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hours_per_month: Option<f64>,
    },
    #[serde(rename_all = "camelCase")]
    Outsourced { billing_type: BillingType, price: f64 },
}

/// One row of the user-managed ad-hoc service ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntry {
    pub id: String,
    pub name: String,
    pub details: ServiceDetails,
    /// Hours of work the service covers; used for in-house pricing and
    /// hourly outsourced billing.
    pub service_hours: f64,
    /// Whether this service must be bought again if the hire fails.
    pub repeat_on_bad_hire: bool,
}

impl ServiceEntry {
    /// Creates a new entry with the default shape: outsourced, one-off
    /// billing, zero price.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        ServiceEntry {
            id: id.into(),
            name: name.into(),
            details: ServiceDetails::Outsourced {
                billing_type: BillingType::OneOff,
                price: 0.0,
            },
            service_hours: 0.0,
            repeat_on_bad_hire: false,
        }
    }
}

/// Hours spent by each role on one hiring phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHours {
    pub hr_hours: f64,
    pub manager_hours: f64,
    pub team_hours: f64,
}

impl BlockHours {
    pub fn new(hr_hours: f64, manager_hours: f64, team_hours: f64) -> Self {
        BlockHours {
            hr_hours,
            manager_hours,
            team_hours,
        }
    }
}

/// Ads and employer branding: role hours plus direct spend on job ads
/// and branding material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdsBrandingInput {
    pub hr_hours: f64,
    pub manager_hours: f64,
    pub team_hours: f64,
    pub direct_costs: f64,
}

impl AdsBrandingInput {
    pub fn hours(&self) -> BlockHours {
        BlockHours::new(self.hr_hours, self.manager_hours, self.team_hours)
    }
}

/// Candidate management: role hours plus spend on assessment tools and
/// tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateMgmtInput {
    pub hr_hours: f64,
    pub manager_hours: f64,
    pub team_hours: f64,
    pub tests_cost: f64,
}

impl CandidateMgmtInput {
    pub fn hours(&self) -> BlockHours {
        BlockHours::new(self.hr_hours, self.manager_hours, self.team_hours)
    }
}

/// Interviews: role hours plus direct spend (travel, facilities).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewsInput {
    pub hr_hours: f64,
    pub manager_hours: f64,
    pub team_hours: f64,
    pub direct_costs: f64,
}

impl InterviewsInput {
    pub fn hours(&self) -> BlockHours {
        BlockHours::new(self.hr_hours, self.manager_hours, self.team_hours)
    }
}

/// Background checks and offer: role hours plus direct spend
/// (background checks, legal fees).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundOfferInput {
    pub hr_hours: f64,
    pub manager_hours: f64,
    pub team_hours: f64,
    pub direct_costs: f64,
}

impl BackgroundOfferInput {
    pub fn hours(&self) -> BlockHours {
        BlockHours::new(self.hr_hours, self.manager_hours, self.team_hours)
    }
}

/// Preparation before the start date: equipment spend, IT setup time
/// (team rate) and HR preparation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreboardingInput {
    pub devices_cost: f64,
    pub it_setup_hours: f64,
    pub prep_hours: f64,
}

/// Onboarding ramp-up: duration, average productivity during the ramp
/// and extra spend (training material, courses).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingInput {
    pub onboarding_months: f64,
    /// Average productivity during onboarding, 0..=100 percent.
    pub productivity_pct: f64,
    pub extra_costs: f64,
}

/// Cost of the position standing vacant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacancyInput {
    pub vacancy_days: f64,
    pub daily_cost: f64,
}

/// The full input snapshot for one computation.  The engine takes this
/// by reference and never retains any part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineInputs {
    pub position_title: String,
    pub hire_pay: PayInput,
    pub roles: RolesInput,
    pub strategy_prep: BlockHours,
    pub ads_branding: AdsBrandingInput,
    pub candidate_mgmt: CandidateMgmtInput,
    pub interviews: InterviewsInput,
    pub background_offer: BackgroundOfferInput,
    pub other_services: Vec<ServiceEntry>,
    pub preboarding: PreboardingInput,
    pub onboarding: OnboardingInput,
    pub vacancy: VacancyInput,
    pub indirect_costs: BlockHours,
}

impl Default for EngineInputs {
    /// The starting template: typical hour estimates filled in, all pay
    /// descriptors unset, no services.
    fn default() -> Self {
        EngineInputs {
            position_title: String::new(),
            hire_pay: PayInput::unset(),
            roles: RolesInput {
                hr: RolePayInput::enabled_unset(),
                manager: RolePayInput::enabled_unset(),
                team: RolePayInput::enabled_unset(),
            },
            strategy_prep: BlockHours::new(4.0, 2.0, 0.0),
            ads_branding: AdsBrandingInput {
                hr_hours: 3.0,
                manager_hours: 1.0,
                team_hours: 0.0,
                direct_costs: 500.0,
            },
            candidate_mgmt: CandidateMgmtInput {
                hr_hours: 10.0,
                manager_hours: 2.0,
                team_hours: 0.0,
                tests_cost: 0.0,
            },
            interviews: InterviewsInput {
                hr_hours: 6.0,
                manager_hours: 8.0,
                team_hours: 4.0,
                direct_costs: 0.0,
            },
            background_offer: BackgroundOfferInput {
                hr_hours: 3.0,
                manager_hours: 1.0,
                team_hours: 0.0,
                direct_costs: 0.0,
            },
            other_services: Vec::new(),
            preboarding: PreboardingInput {
                devices_cost: 500.0,
                it_setup_hours: 2.0,
                prep_hours: 2.0,
            },
            onboarding: OnboardingInput {
                onboarding_months: 3.0,
                productivity_pct: 50.0,
                extra_costs: 0.0,
            },
            vacancy: VacancyInput {
                vacancy_days: 30.0,
                daily_cost: 0.0,
            },
            indirect_costs: BlockHours::new(5.0, 3.0, 2.0),
        }
    }
}

/// The named hiring-phase blocks.  The declaration order is the stable
/// presentation order and the tie-break order for top drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockName {
    StrategyPrep,
    AdsBranding,
    CandidateMgmt,
    Interviews,
    BackgroundOffer,
    OtherServices,
    Preboarding,
    Onboarding,
    Vacancy,
    IndirectCosts,
    ExpectedRisk,
}

impl BlockName {
    /// Every block, in presentation order.
    pub const ALL: [BlockName; 11] = [
        BlockName::StrategyPrep,
        BlockName::AdsBranding,
        BlockName::CandidateMgmt,
        BlockName::Interviews,
        BlockName::BackgroundOffer,
        BlockName::OtherServices,
        BlockName::Preboarding,
        BlockName::Onboarding,
        BlockName::Vacancy,
        BlockName::IndirectCosts,
        BlockName::ExpectedRisk,
    ];

    /// Human-readable label for display layers.
    pub fn label(&self) -> &'static str {
        match self {
            BlockName::StrategyPrep => "Strategy and preparation",
            BlockName::AdsBranding => "Job ads and branding",
            BlockName::CandidateMgmt => "Candidate management and tests",
            BlockName::Interviews => "Interviews",
            BlockName::BackgroundOffer => "Background checks and offer",
            BlockName::OtherServices => "Other services",
            BlockName::Preboarding => "Preboarding",
            BlockName::Onboarding => "Onboarding",
            BlockName::Vacancy => "Vacancy cost",
            BlockName::IndirectCosts => "Indirect costs",
            BlockName::ExpectedRisk => "Expected risk cost",
        }
    }
}

/// Cost of a single block.  Invariant: `total = time_cost + direct_cost`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockCost {
    pub time_cost: f64,
    pub direct_cost: f64,
    pub total: f64,
}

impl BlockCost {
    pub fn new(time_cost: f64, direct_cost: f64) -> Self {
        BlockCost {
            time_cost,
            direct_cost,
            total: time_cost + direct_cost,
        }
    }
}

/// Costs of every block, one field per block name so the compiler
/// enforces completeness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockCosts {
    pub strategy_prep: BlockCost,
    pub ads_branding: BlockCost,
    pub candidate_mgmt: BlockCost,
    pub interviews: BlockCost,
    pub background_offer: BlockCost,
    pub other_services: BlockCost,
    pub preboarding: BlockCost,
    pub onboarding: BlockCost,
    pub vacancy: BlockCost,
    pub indirect_costs: BlockCost,
    pub expected_risk: BlockCost,
}

impl BlockCosts {
    pub fn get(&self, name: BlockName) -> &BlockCost {
        match name {
            BlockName::StrategyPrep => &self.strategy_prep,
            BlockName::AdsBranding => &self.ads_branding,
            BlockName::CandidateMgmt => &self.candidate_mgmt,
            BlockName::Interviews => &self.interviews,
            BlockName::BackgroundOffer => &self.background_offer,
            BlockName::OtherServices => &self.other_services,
            BlockName::Preboarding => &self.preboarding,
            BlockName::Onboarding => &self.onboarding,
            BlockName::Vacancy => &self.vacancy,
            BlockName::IndirectCosts => &self.indirect_costs,
            BlockName::ExpectedRisk => &self.expected_risk,
        }
    }

    /// Iterates every block with its name, in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockName, &BlockCost)> {
        BlockName::ALL.iter().map(move |&name| (name, self.get(name)))
    }
}

/// Totals from the service ledger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesCostResult {
    pub total_services_cost: f64,
    /// Subtotal of services that recur if the hire fails; feeds the
    /// bad-hire scenario.
    pub repeated_services_cost: f64,
}

/// Figures of the bad-hire scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadHireScenario {
    /// Employer cost of paying the failed hire for the configured
    /// number of months before termination.
    pub bad_hire_salary_cost: f64,
    /// Salary cost plus repeated services, should the scenario occur.
    pub bad_hire_extra_if_happens: f64,
    /// Probability-weighted expected cost.
    pub expected_risk_cost: f64,
}

/// One of the top-ranked cost blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopDriver {
    pub block: BlockName,
    pub label: String,
    pub amount: f64,
    pub percentage: f64,
}

/// Which pay descriptors fell back to configured defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultsUsed {
    pub hire_pay: bool,
    pub hr_pay: bool,
    pub manager_pay: bool,
    pub team_pay: bool,
}

/// Advisory severity of a range warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

/// Advisory emitted when a monitored input sits outside its
/// recommended range, or was left blank in a block that is in use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeWarning {
    /// Dotted field path, e.g. `interviews.hrHours`.
    pub field: String,
    pub label: String,
    pub message: String,
    pub severity: Severity,
    pub recommended_min: f64,
    pub recommended_max: f64,
    pub current_value: f64,
    pub unit: String,
}

/// Advisory emitted when the hire pay was not provided and the
/// configured average wage was substituted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingPayWarning {
    pub field: String,
    pub message: String,
}

/// Complete output of one engine run.  All monetary figures are
/// unrounded; rounding is a display concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedResult {
    pub normalized_hire_pay: NormalizedPay,
    pub normalized_roles: NormalizedRoles,
    pub block_costs: BlockCosts,
    /// Sum of all block totals except the risk block.
    pub base_cost: f64,
    pub expected_risk_cost: f64,
    /// The headline total.  Equals `base_cost`; the probabilistic risk
    /// cost is surfaced separately and never folded in.
    pub total_cost: f64,
    /// `base_cost + expected_risk_cost`, for reference displays.
    pub total_cost_with_risk: f64,
    pub bad_hire_salary_cost: f64,
    pub bad_hire_extra_if_happens: f64,
    /// At most three blocks with positive cost, highest first.
    pub top_drivers: Vec<TopDriver>,
    /// Each block's share of `base_cost`, in percent.  The risk block's
    /// share is defined as zero.
    pub percentages: BTreeMap<BlockName, f64>,
    pub defaults_used: DefaultsUsed,
    pub missing_pay_warnings: Vec<MissingPayWarning>,
    pub range_warnings: Vec<RangeWarning>,
}
