//! Rule context for the comparison engine.
//!
//! Every comparison rule is a pure function from a [`RuleContext`] to an
//! optional finding, so rules can be unit-tested, added, and reordered
//! independently.

use serde::{Deserialize, Serialize};

use crate::config::ComparisonConfig;
use crate::models::{LineItem, PayFlag, PaySection, TaxEstimate, TaxableBases};

/// Externally-sourced expected amounts for allowance-match rules.
///
/// Supplied by an official-rate-table collaborator as an opaque read:
/// given a location/rank/date it returns a cents figure or nothing. A
/// missing figure skips the matching rule rather than failing the audit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedAmounts {
    /// Expected monthly base pay in cents.
    #[serde(default)]
    pub base_pay_cents: Option<i64>,
    /// Expected monthly housing allowance in cents.
    #[serde(default)]
    pub bah_cents: Option<i64>,
    /// Expected monthly subsistence allowance in cents.
    #[serde(default)]
    pub bas_cents: Option<i64>,
}

impl ExpectedAmounts {
    /// Returns true if any reference figure is missing.
    pub fn any_missing(&self) -> bool {
        self.base_pay_cents.is_none() || self.bah_cents.is_none() || self.bas_cents.is_none()
    }
}

/// A single comparison rule: pure function from context to optional flag.
pub type ComparisonRule = fn(&RuleContext<'_>) -> Option<PayFlag>;

/// Read-only inputs shared by all comparison rules.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// The actual reported line items, with canonical codes.
    pub lines: &'a [LineItem],
    /// The derived taxable bases.
    pub bases: &'a TaxableBases,
    /// Externally-sourced expected amounts.
    pub expected: &'a ExpectedAmounts,
    /// Net pay as reported on the statement, in cents.
    pub net_pay_cents: i64,
    /// The withholding estimate, when one was computed for this audit.
    pub estimate: Option<&'a TaxEstimate>,
    /// Tolerance bands for the rules.
    pub thresholds: &'a ComparisonConfig,
}

impl RuleContext<'_> {
    /// Sums `amount_cents` over all lines in a section.
    pub fn sum_section(&self, section: PaySection) -> i64 {
        self.lines
            .iter()
            .filter(|l| l.section == section)
            .map(|l| l.amount_cents)
            .sum()
    }

    /// Sums `amount_cents` over all lines with a canonical code.
    pub fn sum_code(&self, code: &str) -> i64 {
        self.lines
            .iter()
            .filter(|l| l.code == code)
            .map(|l| l.amount_cents)
            .sum()
    }
}

/// Formats cents as a signed dollar string, e.g. `-12050` -> `-$120.50`.
pub(crate) fn format_usd(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}
