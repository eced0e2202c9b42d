//! Pay normalization and employer tax cost.
//!
//! The `pay` module resolves raw pay descriptors into canonical
//! monthly and hourly figures.  Descriptors that are unset or
//! non-positive fall back to configured defaults: the average gross
//! wage for the hire, a per-role default wage for internal roles.
//! Employer cost is gross pay plus employer-side payroll taxes; no
//! value is ever rounded here.

use crate::config::EngineConfig;
use crate::models::{NormalizedPay, PayInput, PayType, Role, RolePayInput};

/// Monthly gross base from a pay descriptor.
///
/// Returns 0 when the descriptor is unset or non-positive.  Hourly pay
/// is scaled by the caller's hours per month, falling back to
/// `default_monthly_hours` when that figure is non-positive.
pub fn monthly_gross_base(
    pay_type: PayType,
    pay_amount: f64,
    hours_per_month: f64,
    default_monthly_hours: f64,
) -> f64 {
    if pay_type == PayType::Unset || pay_amount <= 0.0 {
        return 0.0;
    }

    match pay_type {
        PayType::Monthly => pay_amount,
        PayType::Hourly => {
            let hours = if hours_per_month > 0.0 {
                hours_per_month
            } else {
                default_monthly_hours
            };
            pay_amount * hours
        }
        PayType::Unset => 0.0,
    }
}

/// Employer cost from monthly gross: gross plus social tax plus
/// employer unemployment insurance.
pub fn employer_cost_from_monthly_gross(
    monthly_gross: f64,
    social_tax_rate: f64,
    employer_ui_rate: f64,
) -> f64 {
    monthly_gross * (1.0 + social_tax_rate + employer_ui_rate)
}

/// Hourly rate including employer taxes, derived from any descriptor.
/// Returns 0 for descriptors with no meaningful gross.
pub fn employer_hourly_rate(
    pay_type: PayType,
    pay_amount: f64,
    hours_per_month: f64,
    config: &EngineConfig,
) -> f64 {
    let monthly_gross =
        monthly_gross_base(pay_type, pay_amount, hours_per_month, config.hours_per_month);
    if monthly_gross <= 0.0 {
        return 0.0;
    }

    let employer_cost = employer_cost_from_monthly_gross(
        monthly_gross,
        config.social_tax_rate,
        config.employer_ui_rate,
    );

    let hours = if hours_per_month > 0.0 {
        hours_per_month
    } else {
        config.hours_per_month
    };
    employer_cost / hours
}

/// Hourly rate from gross pay only, excluding employer taxes.  Used
/// for indirect costs, which represent foregone attention rather than
/// paid overtime.
pub fn gross_hourly_rate(
    pay_type: PayType,
    pay_amount: f64,
    hours_per_month: f64,
    default_monthly_hours: f64,
) -> f64 {
    if pay_type == PayType::Hourly && pay_amount > 0.0 {
        return pay_amount;
    }

    let monthly_gross = monthly_gross_base(pay_type, pay_amount, hours_per_month, default_monthly_hours);
    if monthly_gross <= 0.0 {
        return 0.0;
    }

    let hours = if hours_per_month > 0.0 {
        hours_per_month
    } else {
        default_monthly_hours
    };
    monthly_gross / hours
}

/// Shared normalization: substitutes `default_monthly_wage` when the
/// descriptor is default-eligible, then derives all canonical figures.
fn normalize_pay(input: &PayInput, default_monthly_wage: f64, config: &EngineConfig) -> NormalizedPay {
    let is_default = input.pay_type == PayType::Unset || input.pay_amount <= 0.0;

    let (effective_type, effective_amount, effective_hours) = if is_default {
        (PayType::Monthly, default_monthly_wage, config.hours_per_month)
    } else {
        (
            input.pay_type,
            input.pay_amount,
            input.hours_per_month.unwrap_or(config.hours_per_month),
        )
    };

    let monthly_gross = monthly_gross_base(
        effective_type,
        effective_amount,
        effective_hours,
        config.hours_per_month,
    );

    let employer_monthly_cost = employer_cost_from_monthly_gross(
        monthly_gross,
        config.social_tax_rate,
        config.employer_ui_rate,
    );

    let hours = if effective_hours > 0.0 {
        effective_hours
    } else {
        config.hours_per_month
    };

    NormalizedPay {
        monthly_gross,
        gross_hourly_rate: monthly_gross / hours,
        employer_hourly_rate: employer_monthly_cost / hours,
        employer_monthly_cost,
        is_default,
    }
}

/// Normalizes the hire's pay, substituting the configured average
/// gross wage when the descriptor is unset or non-positive.
pub fn normalize_hire_pay(input: &PayInput, config: &EngineConfig) -> NormalizedPay {
    normalize_pay(input, config.avg_gross_wage, config)
}

/// Normalizes one internal role's pay.  A disabled role yields the
/// all-zero result; otherwise an unset descriptor falls back to the
/// role-specific default wage.
pub fn normalize_role_pay(input: &RolePayInput, role: Role, config: &EngineConfig) -> NormalizedPay {
    if !input.enabled {
        return NormalizedPay::zero();
    }
    normalize_pay(&input.pay, config.role_default_wage(role), config)
}
