//! Audit orchestration.
//!
//! [`run_audit`] is the library entry point: it validates the request,
//! normalizes line codes, derives the taxable bases, estimates expected
//! withholding, and runs the comparison rules. Data-quality problems such
//! as unknown codes degrade the result's confidence instead of erroring;
//! only structurally invalid input is rejected.

use crate::comparison::{ExpectedAmounts, compare_detailed};
use crate::config::AuditConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditResult, Confidence, FilerProfile, LineItem, WithholdingParams};

use super::registry::CodeRegistry;
use super::taxable_bases::compute_taxable_bases;
use crate::calculation::estimate_tax_withholding;

/// A complete audit request: the statement plus its reference context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditInput {
    /// Statement line items, codes as they appear on the statement.
    pub lines: Vec<LineItem>,
    /// Net pay as reported on the statement, in cents.
    pub net_pay_cents: i64,
    /// The filer's withholding profile.
    pub filer: FilerProfile,
    /// Externally-sourced expected allowance amounts.
    pub expected: ExpectedAmounts,
}

/// Runs a full audit over one pay statement.
///
/// # Errors
///
/// Returns `InvalidFiler` for a malformed profile and `InvalidLineItem`
/// for a negative line amount. Unknown line codes are never errors; they
/// surface as yellow `UNKNOWN_CODE` flags and lower the confidence.
pub fn run_audit(input: &AuditInput, config: &AuditConfig) -> EngineResult<AuditResult> {
    input.filer.validate()?;

    for line in &input.lines {
        if line.amount_cents < 0 {
            return Err(EngineError::InvalidLineItem {
                code: line.code.clone(),
                message: format!("negative amount {} cents", line.amount_cents),
            });
        }
    }

    let registry = CodeRegistry::new(config);

    let mut warnings = Vec::new();
    let lines: Vec<LineItem> = input
        .lines
        .iter()
        .map(|line| {
            let normalized = registry.validate_and_normalize_code(&line.code);
            if let Some(warning) = normalized.warning {
                warnings.push(warning);
            }
            LineItem {
                code: normalized.code,
                amount_cents: line.amount_cents,
                section: line.section,
            }
        })
        .collect();

    let bases = compute_taxable_bases(&lines, &registry);

    let estimate = estimate_tax_withholding(
        &WithholdingParams {
            fed_monthly_cents: bases.fed,
            state_monthly_cents: bases.state,
            filing_status: input.filer.filing_status,
            allowances: input.filer.allowances,
            state: input.filer.state.clone(),
            combat_zone: input.filer.combat_zone,
        },
        config,
    );

    let mut result = compare_detailed(
        &input.expected,
        &bases,
        &lines,
        input.net_pay_cents,
        Some(&estimate),
        config.comparison(),
    );

    let mut data_quality = result.confidence;
    if !warnings.is_empty() {
        data_quality = degrade(data_quality);
    }
    result.confidence = Confidence::worst(estimate.confidence, data_quality);
    result.flags.extend(warnings);

    Ok(result)
}

fn degrade(confidence: Confidence) -> Confidence {
    match confidence {
        Confidence::High => Confidence::Medium,
        Confidence::Medium | Confidence::Low => Confidence::Low,
    }
}
