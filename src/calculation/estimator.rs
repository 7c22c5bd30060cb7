//! Combined withholding estimation.
//!
//! Joins the federal and state estimators into a single [`TaxEstimate`]
//! with an overall confidence equal to the minimum of the two components.

use crate::config::AuditConfig;
use crate::models::{Confidence, EstimateMethod, TaxEstimate, WithholdingParams};

use super::federal_withholding::estimate_federal_withholding;
use super::state_withholding::estimate_state_withholding;

/// Estimates expected monthly federal and state withholding.
///
/// Method precedence: `zero_czte` when the combat-zone exclusion applied,
/// `fallback` when the state figure came from the default rate, otherwise
/// `estimated`.
///
/// # Example
///
/// ```no_run
/// use pay_audit_engine::calculation::estimate_tax_withholding;
/// use pay_audit_engine::config::ConfigLoader;
/// use pay_audit_engine::models::{FilingStatus, WithholdingParams};
///
/// let loader = ConfigLoader::load("./config/2025").unwrap();
/// let estimate = estimate_tax_withholding(
///     &WithholdingParams {
///         fed_monthly_cents: 350_000,
///         state_monthly_cents: 350_000,
///         filing_status: FilingStatus::Single,
///         allowances: 0,
///         state: "TX".to_string(),
///         combat_zone: false,
///     },
///     loader.config(),
/// );
/// assert_eq!(estimate.state_tax_cents, 0);
/// ```
pub fn estimate_tax_withholding(params: &WithholdingParams, config: &AuditConfig) -> TaxEstimate {
    let federal = estimate_federal_withholding(
        params.fed_monthly_cents,
        params.filing_status,
        params.allowances,
        params.combat_zone,
        config.federal(),
    );
    let state =
        estimate_state_withholding(params.state_monthly_cents, &params.state, config.states());

    let method = if federal.method == EstimateMethod::ZeroCzte {
        EstimateMethod::ZeroCzte
    } else if state.used_fallback {
        EstimateMethod::Fallback
    } else {
        EstimateMethod::Estimated
    };

    TaxEstimate {
        federal_tax_cents: federal.monthly_cents,
        state_tax_cents: state.monthly_cents,
        method,
        confidence: Confidence::worst(federal.confidence, state.confidence),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::FilingStatus;

    fn load_config() -> ConfigLoader {
        ConfigLoader::load("./config/2025").unwrap()
    }

    fn params(state: &str, allowances: u32, combat_zone: bool) -> WithholdingParams {
        WithholdingParams {
            fed_monthly_cents: 350_000,
            state_monthly_cents: 350_000,
            filing_status: FilingStatus::Single,
            allowances,
            state: state.to_string(),
            combat_zone,
        }
    }

    #[test]
    fn test_overall_confidence_is_minimum_of_components() {
        let loader = load_config();

        // Federal high (single, 0 allowances), state medium (CA graduated)
        let estimate = estimate_tax_withholding(&params("CA", 0, false), loader.config());
        assert_eq!(estimate.confidence, Confidence::Medium);

        // Federal medium (1 allowance), state high (TX)
        let estimate = estimate_tax_withholding(&params("TX", 1, false), loader.config());
        assert_eq!(estimate.confidence, Confidence::Medium);

        // Both high
        let estimate = estimate_tax_withholding(&params("TX", 0, false), loader.config());
        assert_eq!(estimate.confidence, Confidence::High);
    }

    #[test]
    fn test_combat_zone_method_wins() {
        let loader = load_config();

        let estimate = estimate_tax_withholding(&params("ZZ", 0, true), loader.config());

        assert_eq!(estimate.federal_tax_cents, 0);
        assert_eq!(estimate.method, EstimateMethod::ZeroCzte);
        // State withholding still applies under CZTE
        assert!(estimate.state_tax_cents > 0);
    }

    #[test]
    fn test_missing_state_marks_fallback_method() {
        let loader = load_config();

        let estimate = estimate_tax_withholding(&params("ZZ", 0, false), loader.config());

        assert_eq!(estimate.method, EstimateMethod::Fallback);
        assert_eq!(estimate.confidence, Confidence::Low);
        assert!(estimate.state_tax_cents > 0);
    }

    #[test]
    fn test_plain_estimation_method() {
        let loader = load_config();

        let estimate = estimate_tax_withholding(&params("PA", 0, false), loader.config());

        assert_eq!(estimate.method, EstimateMethod::Estimated);
        assert!(estimate.federal_tax_cents > 0);
        assert_eq!(estimate.state_tax_cents, 10_745);
    }

    #[test]
    fn test_estimation_is_deterministic() {
        let loader = load_config();

        let first = estimate_tax_withholding(&params("CA", 2, false), loader.config());
        let second = estimate_tax_withholding(&params("CA", 2, false), loader.config());

        assert_eq!(first, second);
    }
}
