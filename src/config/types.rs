//! Configuration types for the Pay Audit Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML reference-data files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{FilingStatus, LineCodeDefinition, PaySection};

/// The canonical catch-all code unrecognized line items are coerced to.
pub(crate) const OTHER_CODE: &str = "OTHER";

/// Code registry configuration from registry.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Map of canonical code to its definition.
    pub codes: HashMap<String, LineCodeDefinition>,
    /// Map of known raw spellings (upper-cased) to canonical codes.
    pub aliases: HashMap<String, String>,
}

/// One marginal tax bracket.
///
/// `up_to_cents` is the annual income ceiling for this bracket; the last
/// bracket of a schedule leaves it unset (open-ended).
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBracket {
    /// Annual income ceiling in cents, exclusive upper bound.
    #[serde(default)]
    pub up_to_cents: Option<i64>,
    /// Marginal rate applied within this bracket.
    pub rate: Decimal,
}

/// Federal withholding configuration from federal.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct FederalConfig {
    /// The tax year these tables apply to.
    pub tax_year: i32,
    /// The date these tables take effect.
    pub effective_date: NaiveDate,
    /// Annual liability reduction per withholding allowance, in cents.
    pub allowance_credit_cents: i64,
    /// Standard deduction in cents, per filing status.
    pub standard_deduction_cents: HashMap<FilingStatus, i64>,
    /// Marginal bracket schedule, per filing status.
    pub brackets: HashMap<FilingStatus, Vec<TaxBracket>>,
}

/// How a state taxes income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateRateKind {
    /// No state income tax.
    None,
    /// A published flat rate.
    Flat,
    /// A graduated schedule, approximated by a single conservative rate.
    Graduated,
}

/// A state's income tax rate entry.
#[derive(Debug, Clone, Deserialize)]
pub struct StateRate {
    /// How the state taxes income.
    pub kind: StateRateKind,
    /// Flat rate or conservative approximation; unset for `none`.
    #[serde(default)]
    pub rate: Option<Decimal>,
}

/// State rate table from states.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct StatesConfig {
    /// Conservative default rate for states missing from the table.
    pub default_rate: Decimal,
    /// Per-state rate entries keyed by two-letter code.
    pub states: HashMap<String, StateRate>,
}

/// Acceptable band for an effective payroll-tax rate.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollTaxBand {
    /// The statutory rate (6.2% for OASDI, 1.45% for Medicare).
    pub statutory_rate: Decimal,
    /// Lower bound of the acceptable effective-rate range.
    pub min_rate: Decimal,
    /// Upper bound of the acceptable effective-rate range.
    pub max_rate: Decimal,
}

/// Comparison thresholds from comparison.yaml.
///
/// The variance bands are policy choices, kept configurable rather than
/// hard-coded in the rules.
#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonConfig {
    /// Allowance deltas at or under this are treated as verified, in cents.
    pub exact_tolerance_cents: i64,
    /// Allowance deltas at or under this (and over the exact tolerance) are
    /// advisory rather than action-required, in cents.
    pub variance_band_cents: i64,
    /// Tolerance around the statutory payroll-tax rate.
    pub rate_tolerance: Decimal,
    /// Acceptable band for the Social Security effective rate.
    pub fica: PayrollTaxBand,
    /// Acceptable band for the Medicare effective rate.
    pub medicare: PayrollTaxBand,
    /// Federal withholding at or under this counts as zero for the
    /// combat-zone informational rule, in cents.
    pub czte_near_zero_cents: i64,
}

/// The complete audit configuration loaded from YAML files.
///
/// Read-only at request time; every audit consults it without mutation.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    registry: RegistryConfig,
    federal: FederalConfig,
    states: StatesConfig,
    comparison: ComparisonConfig,
}

impl AuditConfig {
    /// Creates a new AuditConfig from its component parts, validating the
    /// registry invariants.
    ///
    /// Tax-section codes must carry all-false taxability (a withholding
    /// line is not itself taxable income), every alias must point at a
    /// defined code, and the `OTHER` catch-all must be defined.
    pub fn new(
        registry: RegistryConfig,
        federal: FederalConfig,
        states: StatesConfig,
        comparison: ComparisonConfig,
    ) -> EngineResult<Self> {
        for (code, def) in &registry.codes {
            if def.section == PaySection::Tax && def.taxability.any() {
                return Err(EngineError::InvalidRegistryEntry {
                    code: code.clone(),
                    message: "tax-section codes must have all taxability flags false".to_string(),
                });
            }
        }
        for (alias, target) in &registry.aliases {
            if !registry.codes.contains_key(target) {
                return Err(EngineError::InvalidRegistryEntry {
                    code: alias.clone(),
                    message: format!("alias points at undefined code '{}'", target),
                });
            }
        }
        if !registry.codes.contains_key(OTHER_CODE) {
            return Err(EngineError::InvalidRegistryEntry {
                code: OTHER_CODE.to_string(),
                message: "registry must define the OTHER catch-all code".to_string(),
            });
        }
        Ok(Self {
            registry,
            federal,
            states,
            comparison,
        })
    }

    /// Returns the code registry tables.
    pub fn registry(&self) -> &RegistryConfig {
        &self.registry
    }

    /// Returns the federal withholding tables.
    pub fn federal(&self) -> &FederalConfig {
        &self.federal
    }

    /// Returns the state rate table.
    pub fn states(&self) -> &StatesConfig {
        &self.states
    }

    /// Returns the comparison thresholds.
    pub fn comparison(&self) -> &ComparisonConfig {
        &self.comparison
    }
}
