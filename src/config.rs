//! Engine configuration.
//!
//! The `config` module defines the [`EngineConfig`] value passed into
//! every engine call: tax rates, default wages, bad-hire risk
//! parameters and the recommended-range table that drives advisory
//! warnings.  Configuration is a plain JSON-serialisable value with no
//! behaviour; a small helper loads it from a JSON file so that admin
//! tooling can persist overrides.  Fields missing from a stored file
//! fall back to the built-in defaults.

use crate::models::Role;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Advisory min/max for one monitored input field.
///
/// Keyed in [`EngineConfig::recommended_ranges`] by the field's dotted
/// path (e.g. `interviews.hrHours`).  A field with no entry is never
/// evaluated by the warning engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedRange {
    pub min: f64,
    pub max: f64,
    /// Display unit for the range, e.g. `h`, `€`, `days`.
    pub unit: String,
}

impl RecommendedRange {
    pub fn new(min: f64, max: f64, unit: impl Into<String>) -> Self {
        RecommendedRange {
            min,
            max,
            unit: unit.into(),
        }
    }
}

/// Default monthly gross wages substituted for roles with no pay
/// entered.  Each role has its own constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleDefaultWages {
    pub hr: f64,
    pub manager: f64,
    pub team: f64,
}

impl Default for RoleDefaultWages {
    fn default() -> Self {
        RoleDefaultWages {
            hr: 2075.0,
            manager: 3112.5,
            team: 2075.0,
        }
    }
}

/// All tunable parameters of the engine.
///
/// An explicit config value is passed into every call; the engine
/// keeps no module-level state.  Employee-side tax rates are carried
/// for future net/gross support and are not read by any current
/// computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Default contracted hours per month, also the divisor fallback
    /// whenever a caller-provided hours figure is non-positive.
    pub hours_per_month: f64,
    /// Estimated average monthly gross wage, substituted when the hire
    /// pay is unset.
    pub avg_gross_wage: f64,

    // Employer taxes
    pub social_tax_rate: f64,
    pub employer_ui_rate: f64,

    // Employee taxes, reserved for future net/gross support
    pub employee_ui_rate: f64,
    pub income_tax_rate: f64,
    pub pillar_ii_rate: f64,
    pub tax_free_allowance: f64,

    // Bad-hire risk parameters
    pub bad_hire_risk_rate: f64,
    pub bad_hire_pay_months: f64,

    pub role_default_wages: RoleDefaultWages,

    /// Recommended ranges keyed by dotted field path.  The single
    /// source of truth for range warnings; the same keys are shared
    /// with admin editors and UI hint lookups.
    pub recommended_ranges: HashMap<String, RecommendedRange>,
}

impl EngineConfig {
    /// The default wage substituted for a role with no pay entered.
    pub fn role_default_wage(&self, role: Role) -> f64 {
        match role {
            Role::Hr => self.role_default_wages.hr,
            Role::Manager => self.role_default_wages.manager,
            Role::Team => self.role_default_wages.team,
        }
    }

    /// Parses a config from a JSON string.  Missing fields take their
    /// default values, so a stored partial override remains valid.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            hours_per_month: 168.0,
            avg_gross_wage: 2075.0,
            social_tax_rate: 0.33,
            employer_ui_rate: 0.008,
            employee_ui_rate: 0.016,
            income_tax_rate: 0.20,
            pillar_ii_rate: 0.02,
            tax_free_allowance: 654.0,
            bad_hire_risk_rate: 0.15,
            bad_hire_pay_months: 2.0,
            role_default_wages: RoleDefaultWages::default(),
            recommended_ranges: default_recommended_ranges(),
        }
    }
}

/// The built-in range table, covering every benchmarkable input field.
/// Fields whose plausible values vary too much by vendor or business
/// (test costs, device costs, daily vacancy cost) have no entry and are
/// never warned about.
pub fn default_recommended_ranges() -> HashMap<String, RecommendedRange> {
    let entries = [
        ("strategyPrep.hrHours", 2.0, 8.0, "h"),
        ("strategyPrep.managerHours", 1.0, 6.0, "h"),
        ("strategyPrep.teamHours", 0.0, 4.0, "h"),
        ("adsBranding.hrHours", 2.0, 8.0, "h"),
        ("adsBranding.managerHours", 0.0, 4.0, "h"),
        ("adsBranding.directCosts", 100.0, 2000.0, "€"),
        ("candidateMgmt.hrHours", 4.0, 25.0, "h"),
        ("candidateMgmt.managerHours", 1.0, 10.0, "h"),
        ("interviews.hrHours", 3.0, 15.0, "h"),
        ("interviews.managerHours", 3.0, 20.0, "h"),
        ("interviews.teamHours", 0.0, 12.0, "h"),
        ("interviews.directCosts", 0.0, 500.0, "€"),
        ("backgroundOffer.hrHours", 1.0, 6.0, "h"),
        ("backgroundOffer.managerHours", 0.0, 4.0, "h"),
        ("indirectCosts.hrHours", 2.0, 12.0, "h"),
        ("indirectCosts.managerHours", 1.0, 10.0, "h"),
        ("indirectCosts.teamHours", 0.0, 8.0, "h"),
        ("onboarding.onboardingMonths", 1.0, 12.0, "months"),
        ("onboarding.productivityPct", 20.0, 80.0, "%"),
        ("vacancy.vacancyDays", 10.0, 90.0, "days"),
    ];
    entries
        .into_iter()
        .map(|(path, min, max, unit)| (path.to_string(), RecommendedRange::new(min, max, unit)))
        .collect()
}

/// Errors from loading a stored configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads a configuration from a JSON file.  The file may contain any
/// subset of the config fields; the rest take default values.
pub fn load_config_from_file(path: &Path) -> Result<EngineConfig, ConfigError> {
    let data = std::fs::read_to_string(path)?;
    EngineConfig::from_json_str(&data)
}
