//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a tax year's
//! reference tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AuditConfig, ComparisonConfig, FederalConfig, RegistryConfig, StatesConfig};

/// Loads and provides access to a tax year's reference data.
///
/// # Directory Structure
///
/// ```text
/// config/2025/
/// ├── registry.yaml    # Canonical line codes, taxability matrix, aliases
/// ├── federal.yaml     # Standard deductions, bracket tables, allowance credit
/// ├── states.yaml      # Per-state income tax rates
/// └── comparison.yaml  # Tolerance bands for the comparison rules
/// ```
///
/// # Example
///
/// ```no_run
/// use pay_audit_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/2025").unwrap();
/// assert_eq!(loader.config().federal().tax_year, 2025);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AuditConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified per-year directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/2025")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The registry violates a load-time invariant
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let registry = Self::load_yaml::<RegistryConfig>(&path.join("registry.yaml"))?;
        let federal = Self::load_yaml::<FederalConfig>(&path.join("federal.yaml"))?;
        let states = Self::load_yaml::<StatesConfig>(&path.join("states.yaml"))?;
        let comparison = Self::load_yaml::<ComparisonConfig>(&path.join("comparison.yaml"))?;

        let config = AuditConfig::new(registry, federal, states, comparison)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying audit configuration.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }
}
