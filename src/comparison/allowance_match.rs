//! Allowance-match rules.
//!
//! Compare an actual reported allowance against an externally-sourced
//! expected amount. Deltas at or under the exact tolerance verify; deltas
//! within the variance band are advisory; anything larger is an
//! action-required mismatch. `delta_cents` is always `actual - expected`,
//! so the sign indicates under- or over-payment.

use crate::models::{PayFlag, Severity};

use super::context::{RuleContext, format_usd};

/// Compares the reported housing allowance to the expected rate.
pub fn bah_match_rule(ctx: &RuleContext<'_>) -> Option<PayFlag> {
    match_allowance(ctx, "BAH", ctx.expected.bah_cents, "Housing allowance")
}

/// Compares the reported subsistence allowance to the expected rate.
pub fn bas_match_rule(ctx: &RuleContext<'_>) -> Option<PayFlag> {
    match_allowance(ctx, "BAS", ctx.expected.bas_cents, "Subsistence allowance")
}

/// Compares reported base pay to the expected pay-table amount.
pub fn base_pay_match_rule(ctx: &RuleContext<'_>) -> Option<PayFlag> {
    match_allowance(ctx, "BASEPAY", ctx.expected.base_pay_cents, "Base pay")
}

/// Shared allowance-match policy.
///
/// Skipped entirely when no expected amount was supplied; a missing
/// reference is a data gap, not a finding.
fn match_allowance(
    ctx: &RuleContext<'_>,
    code: &str,
    expected_cents: Option<i64>,
    label: &str,
) -> Option<PayFlag> {
    let expected = expected_cents?;
    let actual = ctx.sum_code(code);
    let delta = actual - expected;

    let (severity, suffix, suggestion) = if delta.abs() <= ctx.thresholds.exact_tolerance_cents {
        (Severity::Green, "VERIFIED", None)
    } else if delta.abs() <= ctx.thresholds.variance_band_cents {
        (
            Severity::Yellow,
            "PARTIAL_OR_DIFF",
            Some(format!(
                "Compare the {} start/stop dates on the statement with your orders",
                label.to_lowercase()
            )),
        )
    } else {
        (
            Severity::Red,
            "MISMATCH",
            Some(format!(
                "Contact finance: {} differs from the published rate by {}",
                label.to_lowercase(),
                format_usd(delta.abs())
            )),
        )
    };

    Some(PayFlag {
        severity,
        flag_code: format!("{}_{}", flag_prefix(code), suffix),
        message: format!(
            "{}: reported {} vs expected {} ({})",
            label,
            format_usd(actual),
            format_usd(expected),
            format_usd(delta)
        ),
        delta_cents: Some(delta),
        suggestion,
    })
}

fn flag_prefix(code: &str) -> &str {
    match code {
        "BASEPAY" => "BASE_PAY",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::context::ExpectedAmounts;
    use crate::config::ConfigLoader;
    use crate::models::{LineItem, PaySection, TaxableBases};

    fn run_bah(actual_cents: i64, expected_cents: Option<i64>) -> Option<PayFlag> {
        let loader = ConfigLoader::load("./config/2025").unwrap();
        let lines = vec![LineItem {
            code: "BAH".to_string(),
            amount_cents: actual_cents,
            section: PaySection::Allowance,
        }];
        let bases = TaxableBases::default();
        let expected = ExpectedAmounts {
            bah_cents: expected_cents,
            ..Default::default()
        };
        let ctx = RuleContext {
            lines: &lines,
            bases: &bases,
            expected: &expected,
            net_pay_cents: 0,
            estimate: None,
            thresholds: loader.config().comparison(),
        };
        bah_match_rule(&ctx)
    }

    /// AM-001: exact match verifies green
    #[test]
    fn test_exact_match_is_green() {
        let flag = run_bah(180_000, Some(180_000)).unwrap();

        assert_eq!(flag.severity, Severity::Green);
        assert_eq!(flag.flag_code, "BAH_VERIFIED");
        assert_eq!(flag.delta_cents, Some(0));
    }

    /// AM-002: delta within $5 still verifies
    #[test]
    fn test_delta_within_exact_tolerance_is_green() {
        let flag = run_bah(180_400, Some(180_000)).unwrap();

        assert_eq!(flag.severity, Severity::Green);
        assert_eq!(flag.delta_cents, Some(400));
    }

    /// AM-003: small variance band is advisory yellow
    #[test]
    fn test_small_variance_is_yellow() {
        let flag = run_bah(182_000, Some(180_000)).unwrap();

        assert_eq!(flag.severity, Severity::Yellow);
        assert_eq!(flag.flag_code, "BAH_PARTIAL_OR_DIFF");
        assert_eq!(flag.delta_cents, Some(2_000));
    }

    /// AM-004: material delta is a red mismatch
    #[test]
    fn test_material_delta_is_red() {
        let flag = run_bah(168_000, Some(180_000)).unwrap();

        assert_eq!(flag.severity, Severity::Red);
        assert_eq!(flag.flag_code, "BAH_MISMATCH");
        // Sign indicates underpayment
        assert_eq!(flag.delta_cents, Some(-12_000));
        assert!(flag.suggestion.is_some());
    }

    /// AM-005: missing expected amount skips the rule
    #[test]
    fn test_no_expected_amount_skips_rule() {
        assert!(run_bah(180_000, None).is_none());
    }

    /// AM-006: expected but entirely missing allowance is red
    #[test]
    fn test_missing_allowance_line_is_red() {
        let loader = ConfigLoader::load("./config/2025").unwrap();
        let lines: Vec<LineItem> = vec![];
        let bases = TaxableBases::default();
        let expected = ExpectedAmounts {
            bah_cents: Some(180_000),
            ..Default::default()
        };
        let ctx = RuleContext {
            lines: &lines,
            bases: &bases,
            expected: &expected,
            net_pay_cents: 0,
            estimate: None,
            thresholds: loader.config().comparison(),
        };

        let flag = bah_match_rule(&ctx).unwrap();
        assert_eq!(flag.severity, Severity::Red);
        assert_eq!(flag.delta_cents, Some(-180_000));
    }

    #[test]
    fn test_base_pay_flag_prefix() {
        let loader = ConfigLoader::load("./config/2025").unwrap();
        let lines = vec![LineItem {
            code: "BASEPAY".to_string(),
            amount_cents: 350_000,
            section: PaySection::Allowance,
        }];
        let bases = TaxableBases::default();
        let expected = ExpectedAmounts {
            base_pay_cents: Some(350_000),
            ..Default::default()
        };
        let ctx = RuleContext {
            lines: &lines,
            bases: &bases,
            expected: &expected,
            net_pay_cents: 0,
            estimate: None,
            thresholds: loader.config().comparison(),
        };

        let flag = base_pay_match_rule(&ctx).unwrap();
        assert_eq!(flag.flag_code, "BASE_PAY_VERIFIED");
    }

    #[test]
    fn test_message_reports_both_amounts() {
        let flag = run_bah(168_000, Some(180_000)).unwrap();

        assert!(flag.message.contains("$1680.00"));
        assert!(flag.message.contains("$1800.00"));
        assert!(flag.message.contains("-$120.00"));
    }
}
