//! The bad-hire risk scenario.
//!
//! A failed hire costs the employer a configured number of months of
//! pay before termination, plus every service that has to be bought
//! again.  The expected cost weights that magnitude by the configured
//! probability; it is a plain expected-value model with no other
//! coupling to the rest of the computation.

use crate::config::EngineConfig;
use crate::models::BadHireScenario;
use crate::pay::employer_cost_from_monthly_gross;

/// Computes the bad-hire scenario from the hire's normalized monthly
/// gross and the repeat-on-bad-hire service subtotal.
pub fn bad_hire_scenario(
    normalized_hire_monthly_gross: f64,
    repeated_services_cost: f64,
    config: &EngineConfig,
) -> BadHireScenario {
    let employer_monthly_cost = employer_cost_from_monthly_gross(
        normalized_hire_monthly_gross,
        config.social_tax_rate,
        config.employer_ui_rate,
    );

    let bad_hire_salary_cost = employer_monthly_cost * config.bad_hire_pay_months;
    let bad_hire_extra_if_happens = bad_hire_salary_cost + repeated_services_cost;
    let expected_risk_cost = bad_hire_extra_if_happens * config.bad_hire_risk_rate;

    BadHireScenario {
        bad_hire_salary_cost,
        bad_hire_extra_if_happens,
        expected_risk_cost,
    }
}
