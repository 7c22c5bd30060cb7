//! Pay Audit Engine
//!
//! This crate audits a pay statement's reported line items against
//! officially-sourced expected amounts: it classifies each line item's tax
//! treatment, derives four independent taxable-income bases, estimates
//! expected federal and state withholding from bracketed tax tables, and
//! reconciles reported-vs-expected amounts into a severity-ranked list of
//! findings, tier-masked for restricted subscriptions.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod comparison;
pub mod config;
pub mod error;
pub mod models;
