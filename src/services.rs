//! The ad-hoc service ledger.
//!
//! Users attach an open-ended list of services to a hiring process:
//! agency fees, background checks, assessments, or in-house work that
//! does not fit a named phase.  In-house entries are priced at the
//! employer hourly rate of the staff performing them; outsourced
//! entries follow the vendor's billing terms.  Entries flagged as
//! repeating feed the bad-hire scenario through their own subtotal.

use crate::config::EngineConfig;
use crate::models::{BillingType, ServiceDetails, ServiceEntry, ServicesCostResult};
use crate::pay::employer_hourly_rate;

/// Price of a single service entry.
pub fn service_entry_cost(entry: &ServiceEntry, config: &EngineConfig) -> f64 {
    match &entry.details {
        ServiceDetails::Inhouse {
            pay_type,
            pay_amount,
            hours_per_month,
        } => {
            let rate = employer_hourly_rate(
                *pay_type,
                *pay_amount,
                hours_per_month.unwrap_or(config.hours_per_month),
                config,
            );
            rate * entry.service_hours
        }
        ServiceDetails::Outsourced { billing_type, price } => match billing_type {
            BillingType::Hourly => price * entry.service_hours,
            // Monthly billing is assumed to cover the service period.
            BillingType::Monthly | BillingType::OneOff => *price,
        },
    }
}

/// Totals over the whole ledger, with the repeat-on-bad-hire subtotal
/// tracked separately.
pub fn services_cost(entries: &[ServiceEntry], config: &EngineConfig) -> ServicesCostResult {
    let mut total_services_cost = 0.0;
    let mut repeated_services_cost = 0.0;

    for entry in entries {
        let cost = service_entry_cost(entry, config);
        total_services_cost += cost;
        if entry.repeat_on_bad_hire {
            repeated_services_cost += cost;
        }
    }

    ServicesCostResult {
        total_services_cost,
        repeated_services_cost,
    }
}
