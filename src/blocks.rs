//! Per-phase block cost calculation.
//!
//! Each hiring phase ("block") costs a mix of staff time and direct
//! spend.  Time is priced at the employer hourly rate of each role,
//! except for the indirect-costs block, which uses the gross hourly
//! rate: indirect time is foregone attention, not paid overtime, so
//! employer payroll taxes do not apply to it.

use crate::models::{BlockHours, NormalizedRoles};

/// Time cost of a block: hours per role priced at employer hourly
/// rates.
pub fn block_time_cost(hours: &BlockHours, roles: &NormalizedRoles) -> f64 {
    hours.hr_hours * roles.hr.employer_hourly_rate
        + hours.manager_hours * roles.manager.employer_hourly_rate
        + hours.team_hours * roles.team.employer_hourly_rate
}

/// Time cost of the indirect-costs block, priced at gross hourly
/// rates.
pub fn indirect_block_time_cost(hours: &BlockHours, roles: &NormalizedRoles) -> f64 {
    hours.hr_hours * roles.hr.gross_hourly_rate
        + hours.manager_hours * roles.manager.gross_hourly_rate
        + hours.team_hours * roles.team.gross_hourly_rate
}

/// Productivity loss during onboarding.
///
/// The new hire is paid full employer cost while delivering only
/// `productivity_pct` percent; the loss is the unproductive share over
/// the ramp-up months.  Zero when the ramp has no duration or
/// productivity is already full.  The percentage is clamped to
/// `[0, 100]` before use.
pub fn onboarding_productivity_loss_cost(
    hire_employer_monthly_cost: f64,
    onboarding_months: f64,
    productivity_pct: f64,
) -> f64 {
    if onboarding_months <= 0.0 || productivity_pct >= 100.0 {
        return 0.0;
    }

    let loss_rate = (100.0 - productivity_pct.clamp(0.0, 100.0)) / 100.0;
    hire_employer_monthly_cost * onboarding_months * loss_rate
}

/// Cost of the position standing vacant.  Negative day counts clamp
/// to zero.
pub fn vacancy_cost(daily_cost: f64, vacancy_days: f64) -> f64 {
    daily_cost * vacancy_days.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::models::{PayInput, PayType, Role, RolePayInput};
    use crate::pay::normalize_role_pay;
    use rstest::rstest;

    fn roles_at_monthly(hr: f64, manager: f64, team: f64) -> NormalizedRoles {
        let config = EngineConfig::default();
        let role = |amount: f64| RolePayInput {
            enabled: true,
            pay: PayInput {
                pay_type: PayType::Monthly,
                pay_amount: amount,
                hours_per_month: None,
            },
        };
        NormalizedRoles {
            hr: normalize_role_pay(&role(hr), Role::Hr, &config),
            manager: normalize_role_pay(&role(manager), Role::Manager, &config),
            team: normalize_role_pay(&role(team), Role::Team, &config),
        }
    }

    #[test]
    fn time_cost_sums_roles_at_employer_rates() {
        let roles = roles_at_monthly(1680.0, 3360.0, 1680.0);
        let hours = BlockHours::new(2.0, 1.0, 0.5);
        let expected = 2.0 * roles.hr.employer_hourly_rate
            + 1.0 * roles.manager.employer_hourly_rate
            + 0.5 * roles.team.employer_hourly_rate;
        assert_eq!(block_time_cost(&hours, &roles), expected);
    }

    #[test]
    fn indirect_time_cost_uses_gross_rates() {
        let roles = roles_at_monthly(1680.0, 3360.0, 1680.0);
        let hours = BlockHours::new(5.0, 3.0, 2.0);
        let expected = 5.0 * 10.0 + 3.0 * 20.0 + 2.0 * 10.0;
        let result = indirect_block_time_cost(&hours, &roles);
        assert!((result - expected).abs() < 1e-9);
        // Gross-rate pricing is strictly cheaper than employer-rate pricing.
        assert!(result < block_time_cost(&hours, &roles));
    }

    #[rstest]
    #[case(2676.0, 3.0, 50.0, 4014.0)]
    #[case(2676.0, 3.0, 100.0, 0.0)]
    #[case(2676.0, 0.0, 50.0, 0.0)]
    #[case(2676.0, 3.0, 110.0, 0.0)]
    #[case(2676.0, 3.0, -10.0, 8028.0)]
    fn onboarding_loss_cases(
        #[case] employer_cost: f64,
        #[case] months: f64,
        #[case] pct: f64,
        #[case] expected: f64,
    ) {
        let result = onboarding_productivity_loss_cost(employer_cost, months, pct);
        assert!((result - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(100.0, 30.0, 3000.0)]
    #[case(100.0, 0.0, 0.0)]
    #[case(100.0, -5.0, 0.0)]
    fn vacancy_cost_cases(#[case] daily: f64, #[case] days: f64, #[case] expected: f64) {
        assert_eq!(vacancy_cost(daily, days), expected);
    }
}
