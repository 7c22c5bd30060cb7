//! Comparison and flagging engine for the Pay Audit Engine.
//!
//! An ordered list of pure rules inspects the actual line items, taxable
//! bases, and externally-sourced expected amounts, each emitting zero or
//! one finding. The engine assembles the findings with category totals, a
//! gross-to-net reconciliation waterfall, and a textual math proof; the
//! masking layer then projects the result for the caller's subscription
//! tier.

mod allowance_match;
mod context;
mod czte;
mod engine;
mod masking;
mod net_math;
mod payroll_tax;
mod waterfall;

pub use allowance_match::{bah_match_rule, bas_match_rule, base_pay_match_rule};
pub use context::{ComparisonRule, ExpectedAmounts, RuleContext};
pub use czte::czte_info_rule;
pub use engine::{compare_detailed, comparison_rules};
pub use masking::apply_audit_masking;
pub use net_math::net_math_rule;
pub use payroll_tax::{fed_withholding_rule, fica_pct_rule, medicare_pct_rule};
pub use waterfall::{build_math_proof, build_totals, build_waterfall};
