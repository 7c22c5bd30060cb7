//! Core data models for the Pay Audit Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit_result;
mod filer;
mod line_item;

pub use audit_result::{
    AuditResult, AuditTotals, Confidence, EstimateMethod, MaskedAuditResult, MaskedTotals,
    MaskingPolicy, PayFlag, Severity, TaxEstimate, TaxableBases, VarianceBucket, WaterfallRow,
};
pub use filer::{FilerProfile, FilingStatus, WithholdingParams};
pub use line_item::{LineCodeDefinition, LineItem, PaySection, Taxability};
