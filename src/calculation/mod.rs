//! Calculation logic for the Pay Audit Engine.
//!
//! This module contains the code registry lookups and fuzzy normalization,
//! the taxable-base calculator, the federal and state withholding
//! estimators, and the audit orchestration that ties them to the
//! comparison engine.

mod audit;
mod estimator;
mod federal_withholding;
mod registry;
mod state_withholding;
mod taxable_bases;

pub use audit::{AuditInput, run_audit};
pub use estimator::estimate_tax_withholding;
pub use federal_withholding::{FederalWithholding, estimate_federal_withholding};
pub use registry::{CodeRegistry, NormalizedCode};
pub use state_withholding::{StateWithholding, estimate_state_withholding};
pub use taxable_bases::compute_taxable_bases;
