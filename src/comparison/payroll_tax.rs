//! Payroll-tax percentage rules and withholding comparison.
//!
//! The payroll-tax rules derive an effective rate from the actual withheld
//! amount and the matching taxable base. A rate at the statutory figure
//! verifies green; a rate outside the acceptable band is advisory yellow.
//! Deviations between the band edges emit nothing: caps and catch-up
//! contributions move the effective rate legitimately, so the policy is
//! informational, never red.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::PayrollTaxBand;
use crate::models::{EstimateMethod, PayFlag, Severity};

use super::context::{RuleContext, format_usd};

/// Checks the effective Social Security rate against 6.2%.
pub fn fica_pct_rule(ctx: &RuleContext<'_>) -> Option<PayFlag> {
    effective_rate_check(
        ctx,
        "FICA",
        ctx.bases.oasdi,
        &ctx.thresholds.fica,
        "Social Security",
    )
}

/// Checks the effective Medicare rate against 1.45%.
pub fn medicare_pct_rule(ctx: &RuleContext<'_>) -> Option<PayFlag> {
    effective_rate_check(
        ctx,
        "MEDICARE",
        ctx.bases.medicare,
        &ctx.thresholds.medicare,
        "Medicare",
    )
}

fn effective_rate_check(
    ctx: &RuleContext<'_>,
    code: &str,
    base_cents: i64,
    band: &PayrollTaxBand,
    label: &str,
) -> Option<PayFlag> {
    let actual = ctx.sum_code(code);
    if base_cents <= 0 || actual <= 0 {
        return None;
    }

    let rate = Decimal::from(actual) / Decimal::from(base_cents);
    let statutory_cents = (Decimal::from(base_cents) * band.statutory_rate)
        .round()
        .to_i64()
        .unwrap_or_default();

    if (rate - band.statutory_rate).abs() <= ctx.thresholds.rate_tolerance {
        Some(PayFlag {
            severity: Severity::Green,
            flag_code: format!("{}_PCT_CORRECT", code),
            message: format!(
                "{} withholding of {} matches the statutory rate on a {} base",
                label,
                format_usd(actual),
                format_usd(base_cents)
            ),
            delta_cents: Some(actual - statutory_cents),
            suggestion: None,
        })
    } else if rate < band.min_rate || rate > band.max_rate {
        Some(PayFlag {
            severity: Severity::Yellow,
            flag_code: format!("{}_PCT_OUT_OF_RANGE", code),
            message: format!(
                "{} withholding of {} is an effective rate of {:.2}% on a {} base",
                label,
                format_usd(actual),
                rate * Decimal::from(100),
                format_usd(base_cents)
            ),
            delta_cents: Some(actual - statutory_cents),
            suggestion: Some(
                "Wage-base caps and catch-up contributions can shift this rate; verify year-to-date totals".to_string(),
            ),
        })
    } else {
        // Between the tolerance and the band edge: likely a cap effect
        None
    }
}

/// Compares actual federal withholding against the bracket-table estimate.
///
/// Advisory only: the estimate is an approximation, so even a large
/// deviation is a prompt to review a W-4, not an error. Skipped under the
/// combat-zone exclusion, where zero withholding is expected.
pub fn fed_withholding_rule(ctx: &RuleContext<'_>) -> Option<PayFlag> {
    let estimate = ctx.estimate?;
    if estimate.method == EstimateMethod::ZeroCzte {
        return None;
    }

    let actual = ctx.sum_code("FITW");
    let delta = actual - estimate.federal_tax_cents;
    if delta.abs() <= ctx.thresholds.variance_band_cents {
        return None;
    }

    Some(PayFlag {
        severity: Severity::Yellow,
        flag_code: "FED_WITHHOLDING_DIFF".to_string(),
        message: format!(
            "Federal withholding of {} differs from the estimated {}",
            format_usd(actual),
            format_usd(estimate.federal_tax_cents)
        ),
        delta_cents: Some(delta),
        suggestion: Some("Review the W-4 on file if this is unexpected".to_string()),
    })
}
