//! Taxable base calculation.
//!
//! Derives the four independent taxable-income totals (federal, state,
//! OASDI, Medicare) from a classified line-item set. Only allowance-section
//! lines contribute: withholding and deductions reduce net pay but never
//! the taxable base itself, which is computed on gross allowances only.

use crate::models::{LineItem, PaySection, TaxableBases};

use super::registry::CodeRegistry;

/// Computes the four taxable bases for a line-item set.
///
/// For each allowance-section line, the code's taxability flags decide
/// which of the four running totals its `amount_cents` joins. Lines in
/// other sections never contribute. Lines whose code is not in the
/// registry contribute to no base (the audit pipeline has already coerced
/// them to `OTHER` and warned).
///
/// All arithmetic is on integer cents; results are exact sums.
///
/// # Example
///
/// ```no_run
/// use pay_audit_engine::calculation::{CodeRegistry, compute_taxable_bases};
/// use pay_audit_engine::config::ConfigLoader;
/// use pay_audit_engine::models::{LineItem, PaySection};
///
/// let loader = ConfigLoader::load("./config/2025").unwrap();
/// let registry = CodeRegistry::new(loader.config());
/// let lines = vec![LineItem {
///     code: "BASEPAY".to_string(),
///     amount_cents: 350_000,
///     section: PaySection::Allowance,
/// }];
/// let bases = compute_taxable_bases(&lines, &registry);
/// assert_eq!(bases.fed, 350_000);
/// ```
pub fn compute_taxable_bases(lines: &[LineItem], registry: &CodeRegistry<'_>) -> TaxableBases {
    let mut bases = TaxableBases::default();

    for line in lines {
        if line.section != PaySection::Allowance {
            continue;
        }
        let Ok(def) = registry.get_line_code_definition(&line.code) else {
            continue;
        };
        if def.taxability.fed {
            bases.fed += line.amount_cents;
        }
        if def.taxability.state {
            bases.state += line.amount_cents;
        }
        if def.taxability.oasdi {
            bases.oasdi += line.amount_cents;
        }
        if def.taxability.medicare {
            bases.medicare += line.amount_cents;
        }
    }

    bases
}
