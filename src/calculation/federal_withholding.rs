//! Federal withholding estimation.
//!
//! Approximates monthly federal withholding from a monthly taxable figure:
//! annualize, subtract the filing-status standard deduction, walk the
//! progressive marginal brackets, subtract a linear per-allowance credit,
//! floor at zero, and return to a monthly figure. The combat-zone
//! income-tax exclusion is absolute: it zeroes the federal figure outright.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::{FederalConfig, TaxBracket};
use crate::models::{Confidence, EstimateMethod, FilingStatus};

/// The result of a federal withholding estimation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederalWithholding {
    /// Estimated monthly federal withholding in cents.
    pub monthly_cents: i64,
    /// How the figure was derived.
    pub method: EstimateMethod,
    /// Confidence in the figure.
    pub confidence: Confidence,
}

/// Estimates monthly federal withholding.
///
/// Confidence models how far the simplified bracket approximation diverges
/// from real withholding tables as the allowance count grows: `high` only
/// for zero allowances with a single or married-joint status, `medium` up
/// to two allowances, `low` beyond that.
pub fn estimate_federal_withholding(
    monthly_taxable_cents: i64,
    filing_status: FilingStatus,
    allowances: u32,
    combat_zone: bool,
    federal: &FederalConfig,
) -> FederalWithholding {
    if combat_zone {
        return FederalWithholding {
            monthly_cents: 0,
            method: EstimateMethod::ZeroCzte,
            confidence: Confidence::High,
        };
    }

    let annual_income = monthly_taxable_cents.saturating_mul(12);
    let standard_deduction = federal
        .standard_deduction_cents
        .get(&filing_status)
        .copied()
        .unwrap_or_default();
    let annual_taxable = (annual_income - standard_deduction).max(0);

    let brackets = federal
        .brackets
        .get(&filing_status)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let annual_tax = apply_brackets(annual_taxable, brackets);

    let credit = i64::from(allowances) * federal.allowance_credit_cents;
    let annual_after_credit = (annual_tax - credit).max(0);

    let confidence = if allowances == 0
        && matches!(
            filing_status,
            FilingStatus::Single | FilingStatus::MarriedJoint
        ) {
        Confidence::High
    } else if allowances <= 2 {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    FederalWithholding {
        monthly_cents: annual_after_credit / 12,
        method: EstimateMethod::Estimated,
        confidence,
    }
}

/// Walks a progressive marginal bracket schedule over annual taxable cents.
fn apply_brackets(annual_taxable_cents: i64, brackets: &[TaxBracket]) -> i64 {
    let mut tax = Decimal::ZERO;
    let mut lower = 0i64;

    for bracket in brackets {
        let upper = bracket.up_to_cents.unwrap_or(i64::MAX);
        if annual_taxable_cents > lower {
            let span = annual_taxable_cents.min(upper) - lower;
            tax += Decimal::from(span) * bracket.rate;
        } else {
            break;
        }
        lower = upper;
    }

    tax.round().to_i64().unwrap_or_default()
}
