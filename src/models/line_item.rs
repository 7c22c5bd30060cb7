//! Line item models for the Pay Audit Engine.
//!
//! A [`LineItem`] is one row of a pay statement. Amounts are always integer
//! cents and always non-negative in source data; the sign of a line's
//! contribution to net pay is implied by its [`PaySection`].

use serde::{Deserialize, Serialize};

/// The section of a pay statement a line item belongs to.
///
/// The section determines how the line contributes to net pay: allowances
/// add, adjustments add or subtract, everything else subtracts.
///
/// # Example
///
/// ```
/// use pay_audit_engine::models::PaySection;
///
/// let section: PaySection = serde_json::from_str("\"allowance\"").unwrap();
/// assert_eq!(section, PaySection::Allowance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaySection {
    /// Entitlements: base pay, housing, subsistence, special pays.
    Allowance,
    /// Deductions: insurance premiums, retirement contributions.
    Deduction,
    /// Withholding lines: federal/state income tax, payroll taxes.
    Tax,
    /// Voluntary allotments to third parties.
    Allotment,
    /// Debt repayment lines.
    Debt,
    /// Corrections and retroactive adjustments; credited toward net pay.
    Adjustment,
}

/// One row of a pay statement.
///
/// Created by document parsing or manual entry (out of scope); immutable
/// once audited.
///
/// # Example
///
/// ```
/// use pay_audit_engine::models::{LineItem, PaySection};
///
/// let line = LineItem {
///     code: "BASEPAY".to_string(),
///     amount_cents: 350_000,
///     section: PaySection::Allowance,
/// };
/// assert_eq!(line.amount_cents, 350_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The line code, canonical or raw vendor spelling.
    pub code: String,
    /// The amount in integer cents, non-negative in source data.
    pub amount_cents: i64,
    /// The statement section this line belongs to.
    pub section: PaySection,
}

/// The tax treatment of a line code across the four taxable bases.
///
/// Each flag is independent: combat-zone pay, for example, is excluded
/// from the income-tax bases but included in the payroll-tax bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxability {
    /// Counts toward the federal income tax base.
    pub fed: bool,
    /// Counts toward the state income tax base.
    pub state: bool,
    /// Counts toward the Social Security (OASDI) base.
    pub oasdi: bool,
    /// Counts toward the Medicare base.
    pub medicare: bool,
}

impl Taxability {
    /// Taxability with all four flags false (fully excluded).
    pub const NONE: Taxability = Taxability {
        fed: false,
        state: false,
        oasdi: false,
        medicare: false,
    };

    /// Taxability with all four flags true (fully taxable).
    pub const ALL: Taxability = Taxability {
        fed: true,
        state: true,
        oasdi: true,
        medicare: true,
    };

    /// Returns true if any of the four flags is set.
    pub fn any(&self) -> bool {
        self.fed || self.state || self.oasdi || self.medicare
    }
}

/// Registry entry for a canonical line code.
///
/// Static reference data loaded from the registry configuration; never
/// created or mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCodeDefinition {
    /// The statement section this code appears in.
    pub section: PaySection,
    /// Human-readable description of the code.
    pub description: String,
    /// Tax treatment across the four bases.
    pub taxability: Taxability,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pay_section_serialization() {
        let json = serde_json::to_string(&PaySection::Allowance).unwrap();
        assert_eq!(json, "\"allowance\"");

        let json = serde_json::to_string(&PaySection::Deduction).unwrap();
        assert_eq!(json, "\"deduction\"");

        let json = serde_json::to_string(&PaySection::Adjustment).unwrap();
        assert_eq!(json, "\"adjustment\"");
    }

    #[test]
    fn test_pay_section_deserialization() {
        let section: PaySection = serde_json::from_str("\"tax\"").unwrap();
        assert_eq!(section, PaySection::Tax);

        let section: PaySection = serde_json::from_str("\"allotment\"").unwrap();
        assert_eq!(section, PaySection::Allotment);

        let section: PaySection = serde_json::from_str("\"debt\"").unwrap();
        assert_eq!(section, PaySection::Debt);
    }

    #[test]
    fn test_line_item_serialization() {
        let line = LineItem {
            code: "BAH".to_string(),
            amount_cents: 180_000,
            section: PaySection::Allowance,
        };

        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"code\":\"BAH\""));
        assert!(json.contains("\"amount_cents\":180000"));
        assert!(json.contains("\"section\":\"allowance\""));
    }

    #[test]
    fn test_line_item_deserialization() {
        let json = r#"{
            "code": "FICA",
            "amount_cents": 21700,
            "section": "tax"
        }"#;

        let line: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(line.code, "FICA");
        assert_eq!(line.amount_cents, 21_700);
        assert_eq!(line.section, PaySection::Tax);
    }

    #[test]
    fn test_taxability_none_has_no_flags() {
        assert!(!Taxability::NONE.any());
    }

    #[test]
    fn test_taxability_all_has_all_flags() {
        let t = Taxability::ALL;
        assert!(t.fed && t.state && t.oasdi && t.medicare);
        assert!(t.any());
    }

    #[test]
    fn test_partial_taxability_any() {
        // Combat-pay style: payroll-tax bases only
        let t = Taxability {
            fed: false,
            state: false,
            oasdi: true,
            medicare: true,
        };
        assert!(t.any());
        assert!(!t.fed && !t.state);
    }

    #[test]
    fn test_line_code_definition_deserialization() {
        let yaml = r#"
section: allowance
description: "Basic pay"
taxability:
  fed: true
  state: true
  oasdi: true
  medicare: true
"#;
        let def: LineCodeDefinition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(def.section, PaySection::Allowance);
        assert_eq!(def.taxability, Taxability::ALL);
    }
}
