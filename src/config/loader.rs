//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading benefit cost
//! rules from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{BenefitsConfigFile, BenefitsConfiguration};

/// Loads and provides access to the benefit cost rules.
///
/// # File Format
///
/// ```text
/// BenefitsConfiguration:
///   BaseCostPerMonth: 1000
///   DependentCostPerMonth: 600
///   DependentOver50CostPerMonth: 200
///   HighEarnerLimit: 80000
///   HighEarnerPercentage: 0.02
///   PaychecksPerYear: 26
/// ```
///
/// # Example
///
/// ```no_run
/// use benefits_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/benefits.yaml")?;
/// println!("Paychecks per year: {}", loader.config().paychecks_per_year);
/// # Ok::<(), benefits_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: BenefitsConfiguration,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or misses an option (`ConfigParseError`)
    /// - A value is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let file: BenefitsConfigFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let loader = Self::from_config(file.benefits_configuration)?;
        info!(path = %path_str, "Loaded benefits configuration");
        Ok(loader)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: BenefitsConfiguration) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &BenefitsConfiguration {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> BenefitsConfiguration {
        self.config
    }
}
