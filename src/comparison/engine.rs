//! Rule registry and the detailed comparison entry point.

use crate::config::ComparisonConfig;
use crate::models::{AuditResult, Confidence, LineItem, TaxEstimate, TaxableBases};

use super::allowance_match::{bah_match_rule, bas_match_rule, base_pay_match_rule};
use super::context::{ComparisonRule, ExpectedAmounts, RuleContext};
use super::czte::czte_info_rule;
use super::net_math::net_math_rule;
use super::payroll_tax::{fed_withholding_rule, fica_pct_rule, medicare_pct_rule};
use super::waterfall::{build_math_proof, build_totals, build_waterfall};

/// The comparison rules, in evaluation order.
///
/// Flags are emitted in this order, so two audits of the same statement
/// produce identical output. New rules go at the position that reads
/// best in a report, not at the end.
pub fn comparison_rules() -> &'static [ComparisonRule] {
    &[
        base_pay_match_rule,
        bah_match_rule,
        bas_match_rule,
        fica_pct_rule,
        medicare_pct_rule,
        fed_withholding_rule,
        net_math_rule,
        czte_info_rule,
    ]
}

/// Runs every comparison rule over the statement and assembles the
/// detailed audit result.
///
/// Pure with respect to its inputs: the same statement, expectations, and
/// thresholds always produce an identical result.
pub fn compare_detailed(
    expected: &ExpectedAmounts,
    bases: &TaxableBases,
    lines: &[LineItem],
    net_pay_cents: i64,
    estimate: Option<&TaxEstimate>,
    thresholds: &ComparisonConfig,
) -> AuditResult {
    let ctx = RuleContext {
        lines,
        bases,
        expected,
        net_pay_cents,
        estimate,
        thresholds,
    };

    let flags = comparison_rules()
        .iter()
        .filter_map(|rule| rule(&ctx))
        .collect();

    let totals = build_totals(lines, net_pay_cents);
    let waterfall = build_waterfall(&totals);
    let math_proof = build_math_proof(&totals);

    let confidence = if expected.any_missing() {
        Confidence::Medium
    } else {
        Confidence::High
    };

    AuditResult {
        flags,
        totals,
        waterfall,
        math_proof,
        confidence,
    }
}
