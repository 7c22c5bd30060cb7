//! Filer models for the Pay Audit Engine.
//!
//! Filer metadata is supplied by a user-profile collaborator and feeds the
//! withholding estimator: filing status, withholding allowances, state of
//! residence, and combat-zone status.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Federal filing status.
///
/// Each status has its own standard deduction and marginal bracket table.
///
/// # Example
///
/// ```
/// use pay_audit_engine::models::FilingStatus;
///
/// let status: FilingStatus = serde_json::from_str("\"married_joint\"").unwrap();
/// assert_eq!(status, FilingStatus::MarriedJoint);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    /// Single filer.
    Single,
    /// Married filing jointly.
    MarriedJoint,
    /// Head of household.
    HeadOfHousehold,
}

/// Filer metadata for an audit run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilerProfile {
    /// Federal filing status.
    pub filing_status: FilingStatus,
    /// Number of withholding allowances claimed.
    pub allowances: u32,
    /// Two-letter state of residence (e.g., "TX", "CA").
    pub state: String,
    /// Whether the filer is serving in a designated combat zone.
    pub combat_zone: bool,
}

impl FilerProfile {
    /// Validates the profile, returning `InvalidFiler` on contract
    /// violations from the upstream profile collaborator.
    pub fn validate(&self) -> EngineResult<()> {
        if self.state.len() != 2 || !self.state.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(EngineError::InvalidFiler {
                field: "state".to_string(),
                message: format!("'{}' is not a two-letter state code", self.state),
            });
        }
        Ok(())
    }
}

/// Parameters for one withholding estimation.
///
/// Amounts are monthly taxable figures in integer cents, taken from the
/// federal and state members of a computed `TaxableBases`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithholdingParams {
    /// Monthly federal taxable income in cents.
    pub fed_monthly_cents: i64,
    /// Monthly state taxable income in cents.
    pub state_monthly_cents: i64,
    /// Federal filing status.
    pub filing_status: FilingStatus,
    /// Number of withholding allowances claimed.
    pub allowances: u32,
    /// Two-letter state of residence.
    pub state: String,
    /// Whether the combat-zone income-tax exclusion applies.
    pub combat_zone: bool,
}
