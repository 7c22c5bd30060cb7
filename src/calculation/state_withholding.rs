//! State withholding estimation.
//!
//! States with no income tax return zero; states with a published flat
//! rate apply it; graduated states use a single conservative flat
//! approximation; states missing from the reference table fall back to a
//! fixed conservative default. Estimation always produces a number, never
//! an error, because the downstream comparison rules need a baseline even
//! when reference data is incomplete.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::{StateRateKind, StatesConfig};
use crate::models::Confidence;

/// The result of a state withholding estimation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateWithholding {
    /// Estimated monthly state withholding in cents.
    pub monthly_cents: i64,
    /// True when the conservative default rate stood in for missing data.
    pub used_fallback: bool,
    /// Confidence in the figure.
    pub confidence: Confidence,
}

/// Estimates monthly state withholding for a two-letter state code.
pub fn estimate_state_withholding(
    monthly_taxable_cents: i64,
    state: &str,
    states: &StatesConfig,
) -> StateWithholding {
    let state = state.to_uppercase();

    match states.states.get(&state) {
        Some(entry) if entry.kind == StateRateKind::None => StateWithholding {
            monthly_cents: 0,
            used_fallback: false,
            confidence: Confidence::High,
        },
        Some(entry) => match entry.rate {
            Some(rate) => StateWithholding {
                monthly_cents: apply_rate(monthly_taxable_cents, rate),
                used_fallback: false,
                confidence: match entry.kind {
                    StateRateKind::Flat => Confidence::High,
                    _ => Confidence::Medium,
                },
            },
            // Entry present but rate missing: same recovery as an absent state
            None => fallback(monthly_taxable_cents, states),
        },
        None => fallback(monthly_taxable_cents, states),
    }
}

fn fallback(monthly_taxable_cents: i64, states: &StatesConfig) -> StateWithholding {
    StateWithholding {
        monthly_cents: apply_rate(monthly_taxable_cents, states.default_rate),
        used_fallback: true,
        confidence: Confidence::Low,
    }
}

fn apply_rate(cents: i64, rate: Decimal) -> i64 {
    (Decimal::from(cents) * rate).round().to_i64().unwrap_or_default()
}
