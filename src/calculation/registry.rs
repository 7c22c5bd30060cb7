//! Code registry lookups and fuzzy normalization.
//!
//! This module provides the [`CodeRegistry`] view over the loaded registry
//! tables: definition lookup, validity checks, case-insensitive alias
//! normalization of user/vendor-supplied spellings, and coercion of
//! unrecognized codes to the `OTHER` catch-all with a warning flag.

use crate::config::{AuditConfig, OTHER_CODE};
use crate::error::{EngineError, EngineResult};
use crate::models::{LineCodeDefinition, PayFlag, Severity};

/// Read-only registry view over the audit configuration.
///
/// All operations are pure functions over static reference data.
#[derive(Debug, Clone, Copy)]
pub struct CodeRegistry<'a> {
    config: &'a AuditConfig,
}

/// The outcome of validating and normalizing a raw code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCode {
    /// The canonical code the line item should be audited under.
    pub code: String,
    /// A yellow `UNKNOWN_CODE` warning when the raw text was unrecognized.
    pub warning: Option<PayFlag>,
}

impl<'a> CodeRegistry<'a> {
    /// Creates a registry view over the given configuration.
    pub fn new(config: &'a AuditConfig) -> Self {
        Self { config }
    }

    /// Looks up the definition for a canonical code.
    ///
    /// # Returns
    ///
    /// The definition, or `UnknownCode` if the code is not in the registry.
    pub fn get_line_code_definition(&self, code: &str) -> EngineResult<&'a LineCodeDefinition> {
        self.config
            .registry()
            .codes
            .get(code)
            .ok_or_else(|| EngineError::UnknownCode {
                code: code.to_string(),
            })
    }

    /// Returns true if the code is a known canonical code.
    pub fn is_valid_line_code(&self, code: &str) -> bool {
        self.config.registry().codes.contains_key(code)
    }

    /// Normalizes a raw code spelling to its canonical code.
    ///
    /// Matching is case-insensitive with internal whitespace collapsed,
    /// against both the canonical codes and the alias table. Raw text that
    /// matches nothing is returned unchanged; it becomes an unrecognized
    /// code downstream, not an error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pay_audit_engine::calculation::CodeRegistry;
    /// use pay_audit_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/2025").unwrap();
    /// let registry = CodeRegistry::new(loader.config());
    /// assert_eq!(registry.normalize_line_code("soc sec"), "FICA");
    /// assert_eq!(registry.normalize_line_code("bah w/dep"), "BAH");
    /// assert_eq!(registry.normalize_line_code("MYSTERY"), "MYSTERY");
    /// ```
    pub fn normalize_line_code(&self, raw: &str) -> String {
        let folded = fold(raw);

        if self.config.registry().codes.contains_key(&folded) {
            return folded;
        }
        if let Some(canonical) = self.config.registry().aliases.get(&folded) {
            return canonical.clone();
        }
        raw.to_string()
    }

    /// Normalizes a raw code, coercing unrecognized text to `OTHER`.
    ///
    /// Recognized codes pass through with no warning. Unrecognized codes
    /// are coerced to the `OTHER` catch-all and a yellow `UNKNOWN_CODE`
    /// warning is attached whose message carries the original raw text
    /// verbatim, so the caller can show the user exactly what could not be
    /// classified.
    pub fn validate_and_normalize_code(&self, raw: &str) -> NormalizedCode {
        let normalized = self.normalize_line_code(raw);

        if self.is_valid_line_code(&normalized) {
            NormalizedCode {
                code: normalized,
                warning: None,
            }
        } else {
            NormalizedCode {
                code: OTHER_CODE.to_string(),
                warning: Some(PayFlag {
                    severity: Severity::Yellow,
                    flag_code: "UNKNOWN_CODE".to_string(),
                    message: format!(
                        "Line item code '{}' is not recognized and was audited as {}",
                        raw, OTHER_CODE
                    ),
                    delta_cents: None,
                    suggestion: Some(
                        "Check the statement for a typo or report the code so it can be added"
                            .to_string(),
                    ),
                }),
            }
        }
    }
}

/// Upper-cases and collapses internal whitespace.
fn fold(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        AuditConfig, ComparisonConfig, FederalConfig, PayrollTaxBand, RegistryConfig, StatesConfig,
        TaxBracket,
    };
    use crate::models::{FilingStatus, PaySection, Taxability};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn test_config() -> AuditConfig {
        let mut codes = HashMap::new();
        codes.insert(
            "BASEPAY".to_string(),
            LineCodeDefinition {
                section: PaySection::Allowance,
                description: "Basic pay".to_string(),
                taxability: Taxability::ALL,
            },
        );
        codes.insert(
            "BAH".to_string(),
            LineCodeDefinition {
                section: PaySection::Allowance,
                description: "Basic allowance for housing".to_string(),
                taxability: Taxability::NONE,
            },
        );
        codes.insert(
            "FICA".to_string(),
            LineCodeDefinition {
                section: PaySection::Tax,
                description: "Social Security (OASDI) tax".to_string(),
                taxability: Taxability::NONE,
            },
        );
        codes.insert(
            "OTHER".to_string(),
            LineCodeDefinition {
                section: PaySection::Adjustment,
                description: "Unrecognized line item".to_string(),
                taxability: Taxability::NONE,
            },
        );

        let mut aliases = HashMap::new();
        for raw in ["SOC SEC", "OASDI", "SOCIAL SECURITY"] {
            aliases.insert(raw.to_string(), "FICA".to_string());
        }
        for raw in ["BAH W/DEP", "BAH W/O DEP", "BAH WITH DEP"] {
            aliases.insert(raw.to_string(), "BAH".to_string());
        }

        let mut standard_deduction_cents = HashMap::new();
        standard_deduction_cents.insert(FilingStatus::Single, 1_500_000);
        let mut brackets = HashMap::new();
        brackets.insert(
            FilingStatus::Single,
            vec![TaxBracket {
                up_to_cents: None,
                rate: Decimal::from_str("0.10").unwrap(),
            }],
        );

        AuditConfig::new(
            RegistryConfig { codes, aliases },
            FederalConfig {
                tax_year: 2025,
                effective_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                allowance_credit_cents: 50_000,
                standard_deduction_cents,
                brackets,
            },
            StatesConfig {
                default_rate: Decimal::from_str("0.05").unwrap(),
                states: HashMap::new(),
            },
            ComparisonConfig {
                exact_tolerance_cents: 500,
                variance_band_cents: 5_000,
                rate_tolerance: Decimal::from_str("0.001").unwrap(),
                fica: PayrollTaxBand {
                    statutory_rate: Decimal::from_str("0.062").unwrap(),
                    min_rate: Decimal::from_str("0.055").unwrap(),
                    max_rate: Decimal::from_str("0.070").unwrap(),
                },
                medicare: PayrollTaxBand {
                    statutory_rate: Decimal::from_str("0.0145").unwrap(),
                    min_rate: Decimal::from_str("0.012").unwrap(),
                    max_rate: Decimal::from_str("0.024").unwrap(),
                },
                czte_near_zero_cents: 100,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_get_definition_for_known_code() {
        let config = test_config();
        let registry = CodeRegistry::new(&config);

        let def = registry.get_line_code_definition("BASEPAY").unwrap();
        assert_eq!(def.section, PaySection::Allowance);
        assert_eq!(def.taxability, Taxability::ALL);
    }

    #[test]
    fn test_get_definition_for_unknown_code_errors() {
        let config = test_config();
        let registry = CodeRegistry::new(&config);

        let result = registry.get_line_code_definition("MYSTERY");
        match result.unwrap_err() {
            EngineError::UnknownCode { code } => assert_eq!(code, "MYSTERY"),
            other => panic!("Expected UnknownCode, got {:?}", other),
        }
    }

    #[test]
    fn test_is_valid_line_code() {
        let config = test_config();
        let registry = CodeRegistry::new(&config);

        assert!(registry.is_valid_line_code("BAH"));
        assert!(!registry.is_valid_line_code("MYSTERY"));
        // Aliases are not canonical codes
        assert!(!registry.is_valid_line_code("SOC SEC"));
    }

    #[test]
    fn test_normalize_social_security_spellings() {
        let config = test_config();
        let registry = CodeRegistry::new(&config);

        assert_eq!(registry.normalize_line_code("SOC SEC"), "FICA");
        assert_eq!(registry.normalize_line_code("soc sec"), "FICA");
        assert_eq!(registry.normalize_line_code("OASDI"), "FICA");
        assert_eq!(registry.normalize_line_code("Social   Security"), "FICA");
    }

    #[test]
    fn test_normalize_housing_allowance_spellings() {
        let config = test_config();
        let registry = CodeRegistry::new(&config);

        assert_eq!(registry.normalize_line_code("BAH W/DEP"), "BAH");
        assert_eq!(registry.normalize_line_code("bah w/o dep"), "BAH");
        assert_eq!(registry.normalize_line_code("BAH WITH DEP"), "BAH");
    }

    #[test]
    fn test_normalize_canonical_code_case_insensitive() {
        let config = test_config();
        let registry = CodeRegistry::new(&config);

        assert_eq!(registry.normalize_line_code("basepay"), "BASEPAY");
    }

    #[test]
    fn test_normalize_unmatched_raw_returned_unchanged() {
        let config = test_config();
        let registry = CodeRegistry::new(&config);

        assert_eq!(registry.normalize_line_code("Mystery Pay"), "Mystery Pay");
    }

    #[test]
    fn test_validate_recognized_code_has_no_warning() {
        let config = test_config();
        let registry = CodeRegistry::new(&config);

        let result = registry.validate_and_normalize_code("soc sec");
        assert_eq!(result.code, "FICA");
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_validate_unrecognized_code_coerces_to_other() {
        let config = test_config();
        let registry = CodeRegistry::new(&config);

        let result = registry.validate_and_normalize_code("Mystery Pay");
        assert_eq!(result.code, "OTHER");

        let warning = result.warning.unwrap();
        assert_eq!(warning.severity, Severity::Yellow);
        assert_eq!(warning.flag_code, "UNKNOWN_CODE");
        // The original raw text must appear verbatim
        assert!(warning.message.contains("Mystery Pay"));
    }
}
