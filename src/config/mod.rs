//! Configuration for the Pay Audit Engine.
//!
//! Reference tables (code registry, federal bracket tables, state rates,
//! comparison thresholds) are versioned per tax year and loaded from YAML
//! files into read-only typed configuration, so a given effective date's
//! tables can be swapped per test or per tax year without mutating shared
//! state.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub(crate) use types::OTHER_CODE;
pub use types::{
    AuditConfig, ComparisonConfig, FederalConfig, PayrollTaxBand, RegistryConfig, StateRate,
    StateRateKind, StatesConfig, TaxBracket,
};
