//! Advisory warning generation.
//!
//! The warning engine scans monitored input fields against the
//! configured recommended-range table and emits advisory messages.
//! It never fails a computation: a value outside its range produces a
//! suggestion, not an error.  Fields with no configured range are
//! never evaluated, so the table is the single switch for what gets
//! checked.  A separate, range-independent check reports when the hire
//! pay fell back to the configured default.

use crate::config::RecommendedRange;
use crate::models::{
    EngineInputs, MissingPayWarning, NormalizedPay, RangeWarning, Severity,
};
use std::collections::HashMap;

/// One input field the warning engine knows about: its stable dotted
/// path, a display label, the current value and whether the containing
/// block is in use at all.
struct MonitoredField {
    path: &'static str,
    label: &'static str,
    value: f64,
    block_in_use: bool,
}

/// Enumerates every monitored field with its block-in-use flag.  A
/// block is in use when any of its fields is non-zero; a zero value
/// inside a used block reads as "left blank", not "deliberately
/// zero".  The returned order is fixed, so warning output is
/// deterministic.
fn monitored_fields(inputs: &EngineInputs) -> Vec<MonitoredField> {
    let strategy = &inputs.strategy_prep;
    let strategy_in_use =
        strategy.hr_hours != 0.0 || strategy.manager_hours != 0.0 || strategy.team_hours != 0.0;

    let ads = &inputs.ads_branding;
    let ads_in_use = ads.hr_hours != 0.0
        || ads.manager_hours != 0.0
        || ads.team_hours != 0.0
        || ads.direct_costs != 0.0;

    let candidates = &inputs.candidate_mgmt;
    let candidates_in_use = candidates.hr_hours != 0.0
        || candidates.manager_hours != 0.0
        || candidates.team_hours != 0.0
        || candidates.tests_cost != 0.0;

    let interviews = &inputs.interviews;
    let interviews_in_use = interviews.hr_hours != 0.0
        || interviews.manager_hours != 0.0
        || interviews.team_hours != 0.0
        || interviews.direct_costs != 0.0;

    let background = &inputs.background_offer;
    let background_in_use = background.hr_hours != 0.0
        || background.manager_hours != 0.0
        || background.team_hours != 0.0
        || background.direct_costs != 0.0;

    let preboarding = &inputs.preboarding;
    let preboarding_in_use = preboarding.devices_cost != 0.0
        || preboarding.it_setup_hours != 0.0
        || preboarding.prep_hours != 0.0;

    let onboarding = &inputs.onboarding;
    let onboarding_in_use = onboarding.onboarding_months != 0.0
        || onboarding.productivity_pct != 0.0
        || onboarding.extra_costs != 0.0;

    let vacancy = &inputs.vacancy;
    let vacancy_in_use = vacancy.vacancy_days != 0.0 || vacancy.daily_cost != 0.0;

    let indirect = &inputs.indirect_costs;
    let indirect_in_use =
        indirect.hr_hours != 0.0 || indirect.manager_hours != 0.0 || indirect.team_hours != 0.0;

    vec![
        MonitoredField {
            path: "strategyPrep.hrHours",
            label: "Strategy: HR hours",
            value: strategy.hr_hours,
            block_in_use: strategy_in_use,
        },
        MonitoredField {
            path: "strategyPrep.managerHours",
            label: "Strategy: manager hours",
            value: strategy.manager_hours,
            block_in_use: strategy_in_use,
        },
        MonitoredField {
            path: "strategyPrep.teamHours",
            label: "Strategy: team hours",
            value: strategy.team_hours,
            block_in_use: strategy_in_use,
        },
        MonitoredField {
            path: "adsBranding.hrHours",
            label: "Job ads: HR hours",
            value: ads.hr_hours,
            block_in_use: ads_in_use,
        },
        MonitoredField {
            path: "adsBranding.managerHours",
            label: "Job ads: manager hours",
            value: ads.manager_hours,
            block_in_use: ads_in_use,
        },
        MonitoredField {
            path: "adsBranding.teamHours",
            label: "Job ads: team hours",
            value: ads.team_hours,
            block_in_use: ads_in_use,
        },
        MonitoredField {
            path: "adsBranding.directCosts",
            label: "Job ad spend",
            value: ads.direct_costs,
            block_in_use: ads_in_use,
        },
        MonitoredField {
            path: "candidateMgmt.hrHours",
            label: "Candidates: HR hours",
            value: candidates.hr_hours,
            block_in_use: candidates_in_use,
        },
        MonitoredField {
            path: "candidateMgmt.managerHours",
            label: "Candidates: manager hours",
            value: candidates.manager_hours,
            block_in_use: candidates_in_use,
        },
        MonitoredField {
            path: "candidateMgmt.teamHours",
            label: "Candidates: team hours",
            value: candidates.team_hours,
            block_in_use: candidates_in_use,
        },
        MonitoredField {
            path: "candidateMgmt.testsCost",
            label: "Assessment and test spend",
            value: candidates.tests_cost,
            block_in_use: candidates_in_use,
        },
        MonitoredField {
            path: "interviews.hrHours",
            label: "Interviews: HR hours",
            value: interviews.hr_hours,
            block_in_use: interviews_in_use,
        },
        MonitoredField {
            path: "interviews.managerHours",
            label: "Interviews: manager hours",
            value: interviews.manager_hours,
            block_in_use: interviews_in_use,
        },
        MonitoredField {
            path: "interviews.teamHours",
            label: "Interviews: team hours",
            value: interviews.team_hours,
            block_in_use: interviews_in_use,
        },
        MonitoredField {
            path: "interviews.directCosts",
            label: "Interview spend",
            value: interviews.direct_costs,
            block_in_use: interviews_in_use,
        },
        MonitoredField {
            path: "backgroundOffer.hrHours",
            label: "Background checks: HR hours",
            value: background.hr_hours,
            block_in_use: background_in_use,
        },
        MonitoredField {
            path: "backgroundOffer.managerHours",
            label: "Background checks: manager hours",
            value: background.manager_hours,
            block_in_use: background_in_use,
        },
        MonitoredField {
            path: "backgroundOffer.teamHours",
            label: "Background checks: team hours",
            value: background.team_hours,
            block_in_use: background_in_use,
        },
        MonitoredField {
            path: "backgroundOffer.directCosts",
            label: "Background check spend",
            value: background.direct_costs,
            block_in_use: background_in_use,
        },
        MonitoredField {
            path: "preboarding.devicesCost",
            label: "Devices and equipment spend",
            value: preboarding.devices_cost,
            block_in_use: preboarding_in_use,
        },
        MonitoredField {
            path: "preboarding.itSetupHours",
            label: "IT setup hours",
            value: preboarding.it_setup_hours,
            block_in_use: preboarding_in_use,
        },
        MonitoredField {
            path: "preboarding.prepHours",
            label: "HR preparation hours",
            value: preboarding.prep_hours,
            block_in_use: preboarding_in_use,
        },
        MonitoredField {
            path: "onboarding.onboardingMonths",
            label: "Onboarding period",
            value: onboarding.onboarding_months,
            block_in_use: onboarding_in_use,
        },
        MonitoredField {
            path: "onboarding.productivityPct",
            label: "Average productivity",
            value: onboarding.productivity_pct,
            block_in_use: onboarding_in_use,
        },
        MonitoredField {
            path: "onboarding.extraCosts",
            label: "Extra onboarding spend",
            value: onboarding.extra_costs,
            block_in_use: onboarding_in_use,
        },
        MonitoredField {
            path: "vacancy.vacancyDays",
            label: "Vacancy duration",
            value: vacancy.vacancy_days,
            block_in_use: vacancy_in_use,
        },
        MonitoredField {
            path: "vacancy.dailyCost",
            label: "Daily vacancy cost",
            value: vacancy.daily_cost,
            block_in_use: vacancy_in_use,
        },
        MonitoredField {
            path: "indirectCosts.hrHours",
            label: "Indirect: HR hours",
            value: indirect.hr_hours,
            block_in_use: indirect_in_use,
        },
        MonitoredField {
            path: "indirectCosts.managerHours",
            label: "Indirect: manager hours",
            value: indirect.manager_hours,
            block_in_use: indirect_in_use,
        },
        MonitoredField {
            path: "indirectCosts.teamHours",
            label: "Indirect: team hours",
            value: indirect.team_hours,
            block_in_use: indirect_in_use,
        },
    ]
}

fn warning_for_field(field: &MonitoredField, range: &RecommendedRange) -> Option<RangeWarning> {
    let range_text = format!("{}–{} {}", range.min, range.max, range.unit);

    // A blank field in a block that is otherwise in use gets a gentle
    // prompt with the typical range.
    if field.value == 0.0 && field.block_in_use {
        return Some(RangeWarning {
            field: field.path.to_string(),
            label: field.label.to_string(),
            message: format!("Typical range: {}. Enter an estimate.", range_text),
            severity: Severity::Info,
            recommended_min: range.min,
            recommended_max: range.max,
            current_value: 0.0,
            unit: range.unit.clone(),
        });
    }

    // A blank field in an unused block is genuinely zero.
    if field.value == 0.0 {
        return None;
    }

    if field.value < range.min {
        return Some(RangeWarning {
            field: field.path.to_string(),
            label: field.label.to_string(),
            message: format!("This may be underestimated. Typical range: {}.", range_text),
            severity: Severity::Info,
            recommended_min: range.min,
            recommended_max: range.max,
            current_value: field.value,
            unit: range.unit.clone(),
        });
    }

    if field.value > range.max {
        return Some(RangeWarning {
            field: field.path.to_string(),
            label: field.label.to_string(),
            message: format!(
                "This is higher than typical; consider whether it can be optimized. Typical range: {}.",
                range_text
            ),
            severity: Severity::Warning,
            recommended_min: range.min,
            recommended_max: range.max,
            current_value: field.value,
            unit: range.unit.clone(),
        });
    }

    None
}

/// Scans every monitored field against the configured range table.
/// Fields without a table entry are skipped entirely.
pub fn range_warnings(
    inputs: &EngineInputs,
    ranges: &HashMap<String, RecommendedRange>,
) -> Vec<RangeWarning> {
    monitored_fields(inputs)
        .iter()
        .filter_map(|field| {
            let range = ranges.get(field.path)?;
            warning_for_field(field, range)
        })
        .collect()
}

/// Reports the hire pay falling back to the configured average wage.
/// Independent of the range table and always evaluated.
pub fn missing_pay_warnings(normalized_hire_pay: &NormalizedPay) -> Vec<MissingPayWarning> {
    if normalized_hire_pay.is_default {
        vec![MissingPayWarning {
            field: "hirePay".to_string(),
            message: "Hire pay is not set; the configured average wage is used instead."
                .to_string(),
        }]
    } else {
        Vec::new()
    }
}
