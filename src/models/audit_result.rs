//! Audit result models for the Pay Audit Engine.
//!
//! This module contains the value objects produced by an audit run: the
//! derived [`TaxableBases`], the [`TaxEstimate`], the severity-ranked
//! [`PayFlag`] findings, the [`AuditResult`] aggregate, and the tier-masked
//! [`MaskedAuditResult`] projection of it.

use serde::{Deserialize, Serialize};

/// The four independent taxable-income totals, in integer cents.
///
/// Each total is the sum of `amount_cents` over all allowance-section line
/// items whose registry definition has that base's flag set. Recomputed
/// fresh every audit; never persisted independently of its source lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxableBases {
    /// Federal income tax base.
    pub fed: i64,
    /// State income tax base.
    pub state: i64,
    /// Social Security (OASDI) base.
    pub oasdi: i64,
    /// Medicare base.
    pub medicare: i64,
}

/// Severity of a finding.
///
/// Red is an action-required mismatch, yellow an advisory variance, green
/// a verified-correct confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Action-required mismatch.
    Red,
    /// Advisory variance.
    Yellow,
    /// Verified correct.
    Green,
}

impl Severity {
    /// Sort rank for masking: red first, then yellow, then green.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Red => 0,
            Severity::Yellow => 1,
            Severity::Green => 2,
        }
    }
}

/// Confidence rating attached to estimates and audit results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// The figure is expected to closely match official tables.
    High,
    /// A simplified approximation was used.
    Medium,
    /// A conservative fallback was used; treat as a rough baseline.
    Low,
}

impl Confidence {
    fn rank(&self) -> u8 {
        match self {
            Confidence::High => 0,
            Confidence::Medium => 1,
            Confidence::Low => 2,
        }
    }

    /// Returns the lower (worse) of two confidence ratings.
    pub fn worst(a: Confidence, b: Confidence) -> Confidence {
        if a.rank() >= b.rank() { a } else { b }
    }
}

/// How a tax estimate was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateMethod {
    /// Bracketed estimation from reference tables.
    Estimated,
    /// Combat-zone exclusion zeroed the federal figure.
    ZeroCzte,
    /// A conservative default rate stood in for missing reference data.
    Fallback,
}

/// Estimated federal and state withholding for one month.
///
/// Stateless and recomputed on demand; confidence degradation is the
/// error-signaling mechanism for incomplete reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxEstimate {
    /// Estimated monthly federal withholding in cents.
    pub federal_tax_cents: i64,
    /// Estimated monthly state withholding in cents.
    pub state_tax_cents: i64,
    /// How the estimate was derived.
    pub method: EstimateMethod,
    /// Overall confidence (minimum of the federal and state components).
    pub confidence: Confidence,
}

/// A single audit finding.
///
/// Produced only by the comparison engine; ephemeral, existing only within
/// one audit result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayFlag {
    /// Severity classification.
    pub severity: Severity,
    /// Machine-readable flag code (e.g., "BAH_MISMATCH").
    pub flag_code: String,
    /// Human-readable description of the finding.
    pub message: String,
    /// Signed delta in cents, `actual - expected`, where applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_cents: Option<i64>,
    /// Suggested follow-up action, where applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Category totals and net reconciliation for one audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTotals {
    /// Sum of allowance-section lines in cents.
    pub total_allowances: i64,
    /// Sum of deduction-section lines in cents.
    pub total_deductions: i64,
    /// Sum of tax-section lines in cents.
    pub total_taxes: i64,
    /// Sum of allotment-section lines in cents.
    pub total_allotments: i64,
    /// Sum of debt-section lines in cents.
    pub total_debts: i64,
    /// Sum of adjustment-section lines in cents.
    pub total_adjustments: i64,
    /// Net pay computed from the totals above, in cents.
    pub computed_net: i64,
    /// Net pay as reported on the statement, in cents.
    pub actual_net: i64,
    /// `actual_net - computed_net` in cents.
    pub variance: i64,
}

/// One row of the gross-to-net reconciliation waterfall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterfallRow {
    /// Human-readable label for the row.
    pub label: String,
    /// The signed amount this row adds to the running total, in cents.
    pub amount_cents: i64,
    /// The running total after applying this row, in cents.
    pub running_cents: i64,
}

/// The complete result of one audit invocation.
///
/// Deterministic: identical inputs yield identical results, with no ids,
/// timestamps, or other per-invocation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditResult {
    /// Findings, in rule order.
    pub flags: Vec<PayFlag>,
    /// Category totals and net reconciliation.
    pub totals: AuditTotals,
    /// Ordered gross-to-net reconciliation rows.
    pub waterfall: Vec<WaterfallRow>,
    /// Textual proof of the net-pay arithmetic.
    pub math_proof: String,
    /// Overall confidence for the audit.
    pub confidence: Confidence,
}

/// Subscription-tier masking policy, resolved by the caller.
///
/// A plain value object rather than per-tier types, so the masking layer
/// stays a pure projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskingPolicy {
    /// Whether exact totals, waterfall, and math proof are visible.
    pub show_exact_variance: bool,
    /// Maximum number of flags returned to the client.
    pub max_visible_flags: usize,
}

impl MaskingPolicy {
    /// Policy for full-access tiers: everything passes through.
    pub fn full_access() -> Self {
        Self {
            show_exact_variance: true,
            max_visible_flags: usize::MAX,
        }
    }

    /// Policy for restricted tiers showing at most `max_visible_flags`.
    pub fn restricted(max_visible_flags: usize) -> Self {
        Self {
            show_exact_variance: false,
            max_visible_flags,
        }
    }
}

/// Coarse absolute-variance bucket carried by masked responses.
///
/// Bucketed on absolute cents so even a masked response carries a
/// qualitative signal about the size of the variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarianceBucket {
    /// Absolute variance of $5.00 or less.
    #[serde(rename = "0-5")]
    UpToFive,
    /// Absolute variance over $5.00 up to $50.00.
    #[serde(rename = "5-50")]
    FiveToFifty,
    /// Absolute variance over $50.00 up to $100.00.
    #[serde(rename = ">50")]
    OverFifty,
    /// Absolute variance over $100.00.
    #[serde(rename = ">100")]
    OverHundred,
}

impl VarianceBucket {
    /// Buckets an absolute variance in cents.
    pub fn from_abs_cents(abs_cents: i64) -> Self {
        if abs_cents <= 500 {
            VarianceBucket::UpToFive
        } else if abs_cents <= 5_000 {
            VarianceBucket::FiveToFifty
        } else if abs_cents <= 10_000 {
            VarianceBucket::OverFifty
        } else {
            VarianceBucket::OverHundred
        }
    }
}

/// Totals projection for masked responses.
///
/// Exact figures are nulled for restricted tiers; the variance bucket is
/// always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedTotals {
    /// Sum of allowance-section lines, when visible.
    pub total_allowances: Option<i64>,
    /// Sum of deduction-section lines, when visible.
    pub total_deductions: Option<i64>,
    /// Sum of tax-section lines, when visible.
    pub total_taxes: Option<i64>,
    /// Sum of allotment-section lines, when visible.
    pub total_allotments: Option<i64>,
    /// Sum of debt-section lines, when visible.
    pub total_debts: Option<i64>,
    /// Sum of adjustment-section lines, when visible.
    pub total_adjustments: Option<i64>,
    /// Computed net pay, when visible.
    pub computed_net: Option<i64>,
    /// Reported net pay, when visible.
    pub actual_net: Option<i64>,
    /// Exact variance, when visible.
    pub variance: Option<i64>,
    /// Coarse absolute-variance bucket, always present.
    pub variance_bucket: VarianceBucket,
}

/// Tier-filtered projection of an [`AuditResult`].
///
/// Never stored; always derived at response time so restricted-tier
/// clients never transiently hold premium data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedAuditResult {
    /// Visible findings, sorted by severity then absolute delta.
    pub flags: Vec<PayFlag>,
    /// Number of findings hidden by the tier policy.
    pub hidden_flag_count: usize,
    /// Totals projection.
    pub totals: MaskedTotals,
    /// Reconciliation waterfall; nulled entirely for restricted tiers.
    pub waterfall: Option<Vec<WaterfallRow>>,
    /// Textual math proof; nulled entirely for restricted tiers.
    pub math_proof: Option<String>,
    /// Overall confidence for the audit.
    pub confidence: Confidence,
}
