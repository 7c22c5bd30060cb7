//! Gross-to-net reconciliation: category totals, the waterfall rows,
//! and the textual math proof.

use crate::models::{AuditTotals, LineItem, PaySection, WaterfallRow};

use super::context::format_usd;

/// Sums the statement into category totals and the net reconciliation.
pub fn build_totals(lines: &[LineItem], net_pay_cents: i64) -> AuditTotals {
    let sum = |section: PaySection| -> i64 {
        lines
            .iter()
            .filter(|l| l.section == section)
            .map(|l| l.amount_cents)
            .sum()
    };

    let total_allowances = sum(PaySection::Allowance);
    let total_deductions = sum(PaySection::Deduction);
    let total_taxes = sum(PaySection::Tax);
    let total_allotments = sum(PaySection::Allotment);
    let total_debts = sum(PaySection::Debt);
    let total_adjustments = sum(PaySection::Adjustment);

    let computed_net = total_allowances - total_taxes - total_deductions - total_allotments
        - total_debts
        + total_adjustments;

    AuditTotals {
        total_allowances,
        total_deductions,
        total_taxes,
        total_allotments,
        total_debts,
        total_adjustments,
        computed_net,
        actual_net: net_pay_cents,
        variance: net_pay_cents - computed_net,
    }
}

/// Builds the ordered gross-to-net waterfall from the category totals.
///
/// Rows always appear in the same order, zero categories included, so the
/// final running total always equals `computed_net`.
pub fn build_waterfall(totals: &AuditTotals) -> Vec<WaterfallRow> {
    let steps = [
        ("Allowances", totals.total_allowances),
        ("Taxes", -totals.total_taxes),
        ("Deductions", -totals.total_deductions),
        ("Allotments", -totals.total_allotments),
        ("Debts", -totals.total_debts),
        ("Adjustments", totals.total_adjustments),
    ];

    let mut running = 0i64;
    steps
        .into_iter()
        .map(|(label, amount_cents)| {
            running += amount_cents;
            WaterfallRow {
                label: label.to_string(),
                amount_cents,
                running_cents: running,
            }
        })
        .collect()
}

/// Renders the net-pay arithmetic as a single human-readable line.
pub fn build_math_proof(totals: &AuditTotals) -> String {
    format!(
        "{} - {} - {} - {} - {} + {} = {} (reported {}, variance {})",
        format_usd(totals.total_allowances),
        format_usd(totals.total_taxes),
        format_usd(totals.total_deductions),
        format_usd(totals.total_allotments),
        format_usd(totals.total_debts),
        format_usd(totals.total_adjustments),
        format_usd(totals.computed_net),
        format_usd(totals.actual_net),
        format_usd(totals.variance)
    )
}
