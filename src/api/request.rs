//! Request types for the Pay Audit Engine API.
//!
//! This module defines the JSON request structures for the `/audit` endpoint.

use serde::{Deserialize, Serialize};

use crate::calculation::AuditInput;
use crate::comparison::ExpectedAmounts;
use crate::models::{FilerProfile, FilingStatus, LineItem, MaskingPolicy, PaySection};

/// Flags shown to restricted-tier clients before the rest are hidden.
const RESTRICTED_FLAG_LIMIT: usize = 3;

/// Request body for the `/audit` endpoint.
///
/// Contains one monthly pay statement plus the filer profile and any
/// externally-sourced expected amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRequest {
    /// The statement line items, codes as printed on the statement.
    pub lines: Vec<LineItemRequest>,
    /// Net pay as reported on the statement, in cents.
    pub net_pay_cents: i64,
    /// The filer's withholding profile.
    pub filer: FilerRequest,
    /// Expected allowance amounts; missing figures skip their rules.
    #[serde(default)]
    pub expected: ExpectedAmounts,
    /// The caller's access tier, controlling response masking.
    #[serde(default)]
    pub tier: AccessTier,
}

/// A statement line item in an audit request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemRequest {
    /// The line code as it appears on the statement (e.g., "SOC SEC").
    pub code: String,
    /// The line amount in cents; always non-negative.
    pub amount_cents: i64,
    /// Which statement section the line appeared under.
    pub section: PaySection,
}

/// Filer information in an audit request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilerRequest {
    /// Federal filing status.
    pub filing_status: FilingStatus,
    /// Number of withholding allowances claimed.
    #[serde(default)]
    pub allowances: u32,
    /// Two-letter state of residence (e.g., "TX", "CA").
    pub state: String,
    /// Whether the filer is serving in a designated combat zone.
    #[serde(default)]
    pub combat_zone: bool,
}

/// Access tier of the calling client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessTier {
    /// Full-fidelity response.
    #[default]
    Full,
    /// Coarse response: worst findings only, no exact figures.
    Restricted,
}

impl AccessTier {
    /// The masking policy applied to responses for this tier.
    pub fn masking_policy(&self) -> MaskingPolicy {
        match self {
            AccessTier::Full => MaskingPolicy::full_access(),
            AccessTier::Restricted => MaskingPolicy::restricted(RESTRICTED_FLAG_LIMIT),
        }
    }
}

impl From<LineItemRequest> for LineItem {
    fn from(req: LineItemRequest) -> Self {
        LineItem {
            code: req.code,
            amount_cents: req.amount_cents,
            section: req.section,
        }
    }
}

impl From<FilerRequest> for FilerProfile {
    fn from(req: FilerRequest) -> Self {
        FilerProfile {
            filing_status: req.filing_status,
            allowances: req.allowances,
            state: req.state,
            combat_zone: req.combat_zone,
        }
    }
}

impl From<AuditRequest> for AuditInput {
    fn from(req: AuditRequest) -> Self {
        AuditInput {
            lines: req.lines.into_iter().map(Into::into).collect(),
            net_pay_cents: req.net_pay_cents,
            filer: req.filer.into(),
            expected: req.expected,
        }
    }
}
