//! Tier-based projection of an audit result.
//!
//! All audits run at full fidelity; the masking step is a pure projection
//! applied on the way out. What a tier sees is carried entirely by the
//! [`MaskingPolicy`] data, so adding a tier means adding a policy value,
//! not a code path.

use crate::models::{
    AuditResult, MaskedAuditResult, MaskedTotals, MaskingPolicy, PayFlag, VarianceBucket,
};

/// Projects a full audit result through a tier policy.
///
/// Full-access tiers see the flags exactly as the comparison engine
/// emitted them, in rule-evaluation order. Restricted tiers see the
/// worst findings first (severity rank, then absolute delta descending),
/// capped at `max_visible_flags`.
pub fn apply_audit_masking(result: &AuditResult, policy: &MaskingPolicy) -> MaskedAuditResult {
    let (flags, hidden_flag_count) = if policy.show_exact_variance {
        (result.flags.clone(), 0)
    } else {
        let mut flags: Vec<PayFlag> = result.flags.clone();
        flags.sort_by(|a, b| {
            a.severity
                .rank()
                .cmp(&b.severity.rank())
                .then_with(|| {
                    b.delta_cents
                        .map_or(0, i64::abs)
                        .cmp(&a.delta_cents.map_or(0, i64::abs))
                })
        });

        let hidden = flags.len().saturating_sub(policy.max_visible_flags);
        flags.truncate(policy.max_visible_flags);
        (flags, hidden)
    };

    let variance_bucket = VarianceBucket::from_abs_cents(result.totals.variance.abs());

    let totals = if policy.show_exact_variance {
        MaskedTotals {
            total_allowances: Some(result.totals.total_allowances),
            total_deductions: Some(result.totals.total_deductions),
            total_taxes: Some(result.totals.total_taxes),
            total_allotments: Some(result.totals.total_allotments),
            total_debts: Some(result.totals.total_debts),
            total_adjustments: Some(result.totals.total_adjustments),
            computed_net: Some(result.totals.computed_net),
            actual_net: Some(result.totals.actual_net),
            variance: Some(result.totals.variance),
            variance_bucket,
        }
    } else {
        MaskedTotals {
            total_allowances: None,
            total_deductions: None,
            total_taxes: None,
            total_allotments: None,
            total_debts: None,
            total_adjustments: None,
            computed_net: None,
            actual_net: None,
            variance: None,
            variance_bucket,
        }
    };

    let (waterfall, math_proof) = if policy.show_exact_variance {
        (
            Some(result.waterfall.clone()),
            Some(result.math_proof.clone()),
        )
    } else {
        (None, None)
    };

    MaskedAuditResult {
        flags,
        hidden_flag_count,
        totals,
        waterfall,
        math_proof,
        confidence: result.confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuditTotals, Confidence, Severity, WaterfallRow};

    fn flag(severity: Severity, code: &str, delta_cents: Option<i64>) -> PayFlag {
        PayFlag {
            severity,
            flag_code: code.to_string(),
            message: format!("{} finding", code),
            delta_cents,
            suggestion: None,
        }
    }

    fn sample_result() -> AuditResult {
        AuditResult {
            flags: vec![
                flag(Severity::Green, "BAS_VERIFIED", Some(0)),
                flag(Severity::Red, "NET_MATH_MISMATCH", Some(-12_050)),
                flag(Severity::Yellow, "FICA_PCT_OUT_OF_RANGE", Some(-7_700)),
                flag(Severity::Red, "BAH_MISMATCH", Some(-20_000)),
                flag(Severity::Yellow, "BAS_PARTIAL_OR_DIFF", Some(600)),
            ],
            totals: AuditTotals {
                total_allowances: 530_000,
                total_deductions: 20_000,
                total_taxes: 61_700,
                total_allotments: 0,
                total_debts: 0,
                total_adjustments: 0,
                computed_net: 448_300,
                actual_net: 436_250,
                variance: -12_050,
            },
            waterfall: vec![WaterfallRow {
                label: "Allowances".to_string(),
                amount_cents: 530_000,
                running_cents: 530_000,
            }],
            math_proof: "$5300.00 - ...".to_string(),
            confidence: Confidence::High,
        }
    }

    /// MK-001: full access passes everything through, in rule order
    #[test]
    fn test_full_access_passthrough() {
        let result = sample_result();
        let masked = apply_audit_masking(&result, &MaskingPolicy::full_access());

        let codes: Vec<&str> = masked.flags.iter().map(|f| f.flag_code.as_str()).collect();
        let original: Vec<&str> = result.flags.iter().map(|f| f.flag_code.as_str()).collect();
        assert_eq!(codes, original);
        assert_eq!(masked.hidden_flag_count, 0);
        assert_eq!(masked.totals.variance, Some(-12_050));
        assert_eq!(masked.totals.variance_bucket, VarianceBucket::OverHundred);
        assert!(masked.waterfall.is_some());
        assert!(masked.math_proof.is_some());
    }

    /// MK-002: restricted flags sort by severity rank, then absolute delta
    /// descending
    #[test]
    fn test_restricted_flag_ordering() {
        let masked = apply_audit_masking(&sample_result(), &MaskingPolicy::restricted(5));

        let codes: Vec<&str> = masked.flags.iter().map(|f| f.flag_code.as_str()).collect();
        assert_eq!(
            codes,
            [
                "BAH_MISMATCH",
                "NET_MATH_MISMATCH",
                "FICA_PCT_OUT_OF_RANGE",
                "BAS_PARTIAL_OR_DIFF",
                "BAS_VERIFIED",
            ]
        );
    }

    /// MK-003: restricted tier truncates to the worst findings and counts the rest
    #[test]
    fn test_restricted_truncates_and_counts() {
        let masked = apply_audit_masking(&sample_result(), &MaskingPolicy::restricted(3));

        assert_eq!(masked.flags.len(), 3);
        assert_eq!(masked.hidden_flag_count, 2);
        assert_eq!(masked.flags[0].flag_code, "BAH_MISMATCH");
    }

    /// MK-004: restricted tier leaks no exact figures
    #[test]
    fn test_restricted_hides_exact_figures() {
        let masked = apply_audit_masking(&sample_result(), &MaskingPolicy::restricted(3));

        assert_eq!(masked.totals.total_allowances, None);
        assert_eq!(masked.totals.computed_net, None);
        assert_eq!(masked.totals.actual_net, None);
        assert_eq!(masked.totals.variance, None);
        assert_eq!(masked.totals.variance_bucket, VarianceBucket::OverHundred);
        assert!(masked.waterfall.is_none());
        assert!(masked.math_proof.is_none());
        assert_eq!(masked.confidence, Confidence::High);
    }

    /// MK-005: fewer flags than the cap hides nothing
    #[test]
    fn test_no_hidden_when_under_cap() {
        let mut result = sample_result();
        result.flags.truncate(2);

        let masked = apply_audit_masking(&result, &MaskingPolicy::restricted(3));
        assert_eq!(masked.flags.len(), 2);
        assert_eq!(masked.hidden_flag_count, 0);
    }
}
