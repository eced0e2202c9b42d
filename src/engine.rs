//! Hiring cost computation engine.
//!
//! The `engine` module is responsible for turning an [`EngineInputs`]
//! snapshot and an [`EngineConfig`] into a [`ComputedResult`].  It
//! normalizes all pay descriptors, prices every hiring-phase block and
//! the service ledger, evaluates the bad-hire scenario, and aggregates
//! totals, percentage shares, top cost drivers and advisory warnings.
//! The whole computation is pure and synchronous: the same inputs and
//! config always produce an equal result.

use crate::blocks::{
    block_time_cost, indirect_block_time_cost, onboarding_productivity_loss_cost, vacancy_cost,
};
use crate::config::EngineConfig;
use crate::models::{
    BlockCost, BlockCosts, BlockName, ComputedResult, DefaultsUsed, EngineInputs, NormalizedRoles,
    Role, TopDriver,
};
use crate::pay::{normalize_hire_pay, normalize_role_pay};
use crate::risk::bad_hire_scenario;
use crate::services::services_cost;
use crate::warnings::{missing_pay_warnings, range_warnings};
use std::collections::BTreeMap;

/// Computes the full cost breakdown for one input snapshot.
///
/// This is the engine's single entry point.  It never fails: negative
/// durations clamp to zero, productivity clamps to 0..=100,
/// non-positive hours fall back to the configured default, and every
/// call returns a complete result.  The headline `total_cost` equals
/// `base_cost`; the probability-weighted risk cost is surfaced
/// separately.
pub fn compute_totals(inputs: &EngineInputs, config: &EngineConfig) -> ComputedResult {
    let normalized_hire_pay = normalize_hire_pay(&inputs.hire_pay, config);
    let normalized_roles = NormalizedRoles {
        hr: normalize_role_pay(&inputs.roles.hr, Role::Hr, config),
        manager: normalize_role_pay(&inputs.roles.manager, Role::Manager, config),
        team: normalize_role_pay(&inputs.roles.team, Role::Team, config),
    };

    let services = services_cost(&inputs.other_services, config);
    let bad_hire = bad_hire_scenario(
        normalized_hire_pay.monthly_gross,
        services.repeated_services_cost,
        config,
    );

    let preboarding_time_cost = inputs.preboarding.it_setup_hours
        * normalized_roles.team.employer_hourly_rate
        + inputs.preboarding.prep_hours * normalized_roles.hr.employer_hourly_rate;

    let onboarding_direct_cost = onboarding_productivity_loss_cost(
        normalized_hire_pay.employer_monthly_cost,
        inputs.onboarding.onboarding_months,
        inputs.onboarding.productivity_pct,
    ) + inputs.onboarding.extra_costs;

    let block_costs = BlockCosts {
        strategy_prep: BlockCost::new(
            block_time_cost(&inputs.strategy_prep, &normalized_roles),
            0.0,
        ),
        ads_branding: BlockCost::new(
            block_time_cost(&inputs.ads_branding.hours(), &normalized_roles),
            inputs.ads_branding.direct_costs,
        ),
        candidate_mgmt: BlockCost::new(
            block_time_cost(&inputs.candidate_mgmt.hours(), &normalized_roles),
            inputs.candidate_mgmt.tests_cost,
        ),
        interviews: BlockCost::new(
            block_time_cost(&inputs.interviews.hours(), &normalized_roles),
            inputs.interviews.direct_costs,
        ),
        background_offer: BlockCost::new(
            block_time_cost(&inputs.background_offer.hours(), &normalized_roles),
            inputs.background_offer.direct_costs,
        ),
        other_services: BlockCost::new(0.0, services.total_services_cost),
        preboarding: BlockCost::new(preboarding_time_cost, inputs.preboarding.devices_cost),
        onboarding: BlockCost::new(0.0, onboarding_direct_cost),
        vacancy: BlockCost::new(
            0.0,
            vacancy_cost(inputs.vacancy.daily_cost, inputs.vacancy.vacancy_days),
        ),
        indirect_costs: BlockCost::new(
            indirect_block_time_cost(&inputs.indirect_costs, &normalized_roles),
            0.0,
        ),
        expected_risk: BlockCost::new(0.0, bad_hire.expected_risk_cost),
    };

    let base_cost: f64 = block_costs
        .iter()
        .filter(|(name, _)| *name != BlockName::ExpectedRisk)
        .map(|(_, block)| block.total)
        .sum();

    // The headline total excludes the probabilistic risk cost; it is
    // reported alongside, never folded in.
    let total_cost = base_cost;
    let total_cost_with_risk = base_cost + bad_hire.expected_risk_cost;

    let mut percentages = BTreeMap::new();
    for (name, block) in block_costs.iter() {
        let share = if name == BlockName::ExpectedRisk || base_cost <= 0.0 {
            0.0
        } else {
            block.total / base_cost * 100.0
        };
        percentages.insert(name, share);
    }

    let mut ranked: Vec<TopDriver> = block_costs
        .iter()
        .filter(|(_, block)| block.total > 0.0)
        .map(|(name, block)| TopDriver {
            block: name,
            label: name.label().to_string(),
            amount: block.total,
            percentage: percentages[&name],
        })
        .collect();
    // Stable sort keeps declaration order among equal amounts.
    ranked.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(3);

    let defaults_used = DefaultsUsed {
        hire_pay: normalized_hire_pay.is_default,
        hr_pay: normalized_roles.hr.is_default,
        manager_pay: normalized_roles.manager.is_default,
        team_pay: normalized_roles.team.is_default,
    };

    let missing_pay_warnings = missing_pay_warnings(&normalized_hire_pay);
    let range_warnings = range_warnings(inputs, &config.recommended_ranges);

    ComputedResult {
        normalized_hire_pay,
        normalized_roles,
        block_costs,
        base_cost,
        expected_risk_cost: bad_hire.expected_risk_cost,
        total_cost,
        total_cost_with_risk,
        bad_hire_salary_cost: bad_hire.bad_hire_salary_cost,
        bad_hire_extra_if_happens: bad_hire.bad_hire_extra_if_happens,
        top_drivers: ranked,
        percentages,
        defaults_used,
        missing_pay_warnings,
        range_warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BillingType, BlockHours, PayInput, PayType, ServiceDetails, ServiceEntry, Severity,
    };

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    /// Inputs with every hour and spend zeroed; only the defaulted
    /// hire pay keeps the risk scenario alive.
    fn zeroed_inputs() -> EngineInputs {
        EngineInputs {
            strategy_prep: BlockHours::new(0.0, 0.0, 0.0),
            ads_branding: crate::models::AdsBrandingInput {
                hr_hours: 0.0,
                manager_hours: 0.0,
                team_hours: 0.0,
                direct_costs: 0.0,
            },
            candidate_mgmt: crate::models::CandidateMgmtInput {
                hr_hours: 0.0,
                manager_hours: 0.0,
                team_hours: 0.0,
                tests_cost: 0.0,
            },
            interviews: crate::models::InterviewsInput {
                hr_hours: 0.0,
                manager_hours: 0.0,
                team_hours: 0.0,
                direct_costs: 0.0,
            },
            background_offer: crate::models::BackgroundOfferInput {
                hr_hours: 0.0,
                manager_hours: 0.0,
                team_hours: 0.0,
                direct_costs: 0.0,
            },
            preboarding: crate::models::PreboardingInput {
                devices_cost: 0.0,
                it_setup_hours: 0.0,
                prep_hours: 0.0,
            },
            onboarding: crate::models::OnboardingInput {
                onboarding_months: 0.0,
                productivity_pct: 0.0,
                extra_costs: 0.0,
            },
            vacancy: crate::models::VacancyInput {
                vacancy_days: 0.0,
                daily_cost: 0.0,
            },
            indirect_costs: BlockHours::new(0.0, 0.0, 0.0),
            ..EngineInputs::default()
        }
    }

    #[test]
    fn every_block_total_is_time_plus_direct() {
        let result = compute_totals(&EngineInputs::default(), &EngineConfig::default());
        for (_, block) in result.block_costs.iter() {
            assert!(close(block.total, block.time_cost + block.direct_cost));
        }
    }

    #[test]
    fn base_cost_sums_all_blocks_except_risk() {
        let result = compute_totals(&EngineInputs::default(), &EngineConfig::default());
        let sum: f64 = result
            .block_costs
            .iter()
            .filter(|(name, _)| *name != BlockName::ExpectedRisk)
            .map(|(_, block)| block.total)
            .sum();
        assert!(close(result.base_cost, sum));
        assert!(result.base_cost > 0.0);
    }

    #[test]
    fn headline_total_excludes_risk() {
        let result = compute_totals(&EngineInputs::default(), &EngineConfig::default());
        assert_eq!(result.total_cost, result.base_cost);
        assert!(close(
            result.total_cost_with_risk,
            result.base_cost + result.expected_risk_cost
        ));
        assert!(result.expected_risk_cost > 0.0);
        assert_eq!(
            result.block_costs.expected_risk.total,
            result.expected_risk_cost
        );
    }

    #[test]
    fn percentages_sum_to_one_hundred_when_base_is_positive() {
        let result = compute_totals(&EngineInputs::default(), &EngineConfig::default());
        assert!(result.base_cost > 0.0);
        let sum: f64 = result.percentages.values().sum();
        assert!((sum - 100.0).abs() < 1e-6);
        assert_eq!(result.percentages[&BlockName::ExpectedRisk], 0.0);
    }

    #[test]
    fn percentages_are_all_zero_when_base_is_zero() {
        let mut inputs = zeroed_inputs();
        inputs.roles.hr.enabled = false;
        inputs.roles.manager.enabled = false;
        inputs.roles.team.enabled = false;
        let result = compute_totals(&inputs, &EngineConfig::default());
        assert_eq!(result.base_cost, 0.0);
        assert!(result.percentages.values().all(|&share| share == 0.0));
    }

    #[test]
    fn top_drivers_are_positive_sorted_and_capped() {
        let result = compute_totals(&EngineInputs::default(), &EngineConfig::default());
        assert!(result.top_drivers.len() <= 3);
        assert!(result.top_drivers.iter().all(|driver| driver.amount > 0.0));
        for pair in result.top_drivers.windows(2) {
            assert!(pair[0].amount >= pair[1].amount);
        }
    }

    #[test]
    fn risk_is_the_only_driver_of_otherwise_empty_inputs() {
        let result = compute_totals(&zeroed_inputs(), &EngineConfig::default());
        assert_eq!(result.base_cost, 0.0);
        assert_eq!(result.top_drivers.len(), 1);
        assert_eq!(result.top_drivers[0].block, BlockName::ExpectedRisk);
    }

    #[test]
    fn computation_is_idempotent() {
        let inputs = EngineInputs::default();
        let config = EngineConfig::default();
        let first = compute_totals(&inputs, &config);
        let second = compute_totals(&inputs, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn defaults_used_reflects_normalization() {
        let mut inputs = EngineInputs::default();
        inputs.hire_pay = PayInput {
            pay_type: PayType::Monthly,
            pay_amount: 2500.0,
            hours_per_month: None,
        };
        inputs.roles.manager.pay = PayInput {
            pay_type: PayType::Monthly,
            pay_amount: 4000.0,
            hours_per_month: None,
        };
        let result = compute_totals(&inputs, &EngineConfig::default());
        assert!(!result.defaults_used.hire_pay);
        assert!(result.defaults_used.hr_pay);
        assert!(!result.defaults_used.manager_pay);
        assert!(result.defaults_used.team_pay);
        assert!(result.missing_pay_warnings.is_empty());
    }

    #[test]
    fn default_hire_pay_emits_missing_pay_warning() {
        let result = compute_totals(&EngineInputs::default(), &EngineConfig::default());
        assert!(result.defaults_used.hire_pay);
        assert_eq!(result.missing_pay_warnings.len(), 1);
        assert_eq!(result.missing_pay_warnings[0].field, "hirePay");
        assert_eq!(
            result.normalized_hire_pay.monthly_gross,
            EngineConfig::default().avg_gross_wage
        );
    }

    #[test]
    fn default_template_produces_expected_range_advisories() {
        let result = compute_totals(&EngineInputs::default(), &EngineConfig::default());
        // Two fields sit blank inside blocks that are in use.
        let fields: Vec<&str> = result
            .range_warnings
            .iter()
            .map(|warning| warning.field.as_str())
            .collect();
        assert_eq!(
            fields,
            vec!["strategyPrep.teamHours", "interviews.directCosts"]
        );
        assert!(result
            .range_warnings
            .iter()
            .all(|warning| warning.severity == Severity::Info));
    }

    #[test]
    fn repeated_services_feed_the_risk_scenario() {
        let mut inputs = zeroed_inputs();
        inputs.hire_pay = PayInput {
            pay_type: PayType::Monthly,
            pay_amount: 2000.0,
            hours_per_month: None,
        };
        inputs.other_services = vec![
            ServiceEntry {
                id: "1".to_string(),
                name: "Agency fee".to_string(),
                details: ServiceDetails::Outsourced {
                    billing_type: BillingType::OneOff,
                    price: 5000.0,
                },
                service_hours: 0.0,
                repeat_on_bad_hire: false,
            },
            ServiceEntry {
                id: "2".to_string(),
                name: "Background check".to_string(),
                details: ServiceDetails::Outsourced {
                    billing_type: BillingType::OneOff,
                    price: 500.0,
                },
                service_hours: 0.0,
                repeat_on_bad_hire: true,
            },
        ];
        let result = compute_totals(&inputs, &EngineConfig::default());
        assert_eq!(result.block_costs.other_services.total, 5500.0);
        assert!(close(result.bad_hire_salary_cost, 5352.0));
        assert!(close(result.bad_hire_extra_if_happens, 5852.0));
        assert!(close(result.expected_risk_cost, 877.8));
    }

    #[test]
    fn disabled_roles_zero_their_time_costs() {
        let mut inputs = EngineInputs::default();
        inputs.roles.hr.enabled = false;
        inputs.roles.manager.enabled = false;
        inputs.roles.team.enabled = false;
        let result = compute_totals(&inputs, &EngineConfig::default());
        assert_eq!(result.block_costs.strategy_prep.time_cost, 0.0);
        assert_eq!(result.block_costs.interviews.time_cost, 0.0);
        assert_eq!(result.block_costs.indirect_costs.time_cost, 0.0);
        // Preboarding time is priced on the hire-independent role rates too.
        assert_eq!(result.block_costs.preboarding.time_cost, 0.0);
    }

    #[test]
    fn onboarding_block_combines_loss_and_extra_costs() {
        let mut inputs = zeroed_inputs();
        inputs.hire_pay = PayInput {
            pay_type: PayType::Monthly,
            pay_amount: 2000.0,
            hours_per_month: None,
        };
        inputs.onboarding.onboarding_months = 3.0;
        inputs.onboarding.productivity_pct = 50.0;
        inputs.onboarding.extra_costs = 250.0;
        let result = compute_totals(&inputs, &EngineConfig::default());
        assert!(close(result.block_costs.onboarding.direct_cost, 4014.0 + 250.0));
        assert_eq!(result.block_costs.onboarding.time_cost, 0.0);
    }

    #[test]
    fn vacancy_block_prices_days_at_daily_cost() {
        let mut inputs = zeroed_inputs();
        inputs.vacancy.vacancy_days = 30.0;
        inputs.vacancy.daily_cost = 100.0;
        let result = compute_totals(&inputs, &EngineConfig::default());
        assert_eq!(result.block_costs.vacancy.total, 3000.0);
    }

    #[test]
    fn result_serializes_to_json() {
        let result = compute_totals(&EngineInputs::default(), &EngineConfig::default());
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("blockCosts").is_some());
        assert!(json.get("totalCost").is_some());
        assert!(json["percentages"].get("expectedRisk").is_some());
    }
}
