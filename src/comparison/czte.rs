//! Combat-zone tax exclusion informational rule.
//!
//! A statement with near-zero federal income tax withheld but nonzero
//! Social Security and Medicare withholding is the signature of a combat
//! zone tax exclusion month, not a payroll error. This rule surfaces that
//! pattern as an informational finding so the near-zero FITW is not
//! mistaken for a problem.

use crate::models::{PayFlag, Severity};

use super::context::{RuleContext, format_usd};

/// Flags the CZTE withholding pattern as informational.
pub fn czte_info_rule(ctx: &RuleContext<'_>) -> Option<PayFlag> {
    let fitw = ctx.sum_code("FITW");
    let fica = ctx.sum_code("FICA");
    let medicare = ctx.sum_code("MEDICARE");

    if fitw > ctx.thresholds.czte_near_zero_cents || fica <= 0 || medicare <= 0 {
        return None;
    }

    Some(PayFlag {
        severity: Severity::Green,
        flag_code: "CZTE_INFO".to_string(),
        message: format!(
            "Federal withholding of {} with payroll taxes still deducted is \
             consistent with a combat zone tax exclusion month",
            format_usd(fitw)
        ),
        delta_cents: None,
        suggestion: None,
    })
}
