//! Net-math verification rule.
//!
//! Recomputes net pay from the statement's own line items and compares it
//! to the reported net. The tolerance is exactly ±100 cents inclusive: a
//! $1.00 delta verifies, a $1.01 delta mismatches. This is the one rule
//! with a hard cents-level cutoff rather than a percentage band.

use crate::models::{PayFlag, PaySection, Severity};

use super::context::{RuleContext, format_usd};

/// Fixed net-math cutoff. Unlike the policy bands in the comparison
/// config, this boundary is part of the rule's contract and is not
/// tunable per year.
const NET_MATH_TOLERANCE_CENTS: i64 = 100;

/// Verifies that reported net pay matches the line-item arithmetic.
pub fn net_math_rule(ctx: &RuleContext<'_>) -> Option<PayFlag> {
    let computed = computed_net(ctx);
    let delta = ctx.net_pay_cents - computed;

    if delta.abs() <= NET_MATH_TOLERANCE_CENTS {
        Some(PayFlag {
            severity: Severity::Green,
            flag_code: "NET_MATH_VERIFIED".to_string(),
            message: format!(
                "Reported net pay {} matches the computed {}",
                format_usd(ctx.net_pay_cents),
                format_usd(computed)
            ),
            delta_cents: Some(delta),
            suggestion: None,
        })
    } else {
        Some(PayFlag {
            severity: Severity::Red,
            flag_code: "NET_MATH_MISMATCH".to_string(),
            message: format!(
                "Reported net pay {} differs from the computed {} by {}",
                format_usd(ctx.net_pay_cents),
                format_usd(computed),
                format_usd(delta)
            ),
            delta_cents: Some(delta),
            suggestion: Some(
                "Check for a line item missing from the statement or entered twice".to_string(),
            ),
        })
    }
}

/// Net pay recomputed from the line items: allowances minus taxes,
/// deductions, allotments, and debts, plus adjustments.
pub(crate) fn computed_net(ctx: &RuleContext<'_>) -> i64 {
    ctx.sum_section(PaySection::Allowance)
        - ctx.sum_section(PaySection::Tax)
        - ctx.sum_section(PaySection::Deduction)
        - ctx.sum_section(PaySection::Allotment)
        - ctx.sum_section(PaySection::Debt)
        + ctx.sum_section(PaySection::Adjustment)
}
