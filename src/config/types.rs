//! Configuration types for benefit cost rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The tunable constants of the benefit cost rules.
///
/// Option names in configuration files are PascalCase
/// (`BaseCostPerMonth`, `PaychecksPerYear`, ...). Every option is required
/// in a file; [`BenefitsConfiguration::default`] yields the reference
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct BenefitsConfiguration {
    /// Flat monthly benefits cost per employee.
    pub base_cost_per_month: Decimal,
    /// Monthly cost per dependent (child, spouse, or domestic partner).
    pub dependent_cost_per_month: Decimal,
    /// Additional monthly cost per dependent aged 50 or over.
    pub dependent_over50_cost_per_month: Decimal,
    /// Annual salary above which the high-earner surcharge applies.
    pub high_earner_limit: Decimal,
    /// Fraction of annual salary charged to high earners (0.02 = 2%).
    pub high_earner_percentage: Decimal,
    /// Number of pay periods per year.
    pub paychecks_per_year: u32,
}

impl Default for BenefitsConfiguration {
    fn default() -> Self {
        Self {
            base_cost_per_month: Decimal::new(1000, 0),
            dependent_cost_per_month: Decimal::new(600, 0),
            dependent_over50_cost_per_month: Decimal::new(200, 0),
            high_earner_limit: Decimal::new(80000, 0),
            high_earner_percentage: Decimal::new(2, 2),
            paychecks_per_year: 26,
        }
    }
}

impl BenefitsConfiguration {
    /// Checks that monetary values are non-negative and that there is at
    /// least one paycheck per year.
    pub fn validate(&self) -> EngineResult<()> {
        let monetary = [
            ("BaseCostPerMonth", self.base_cost_per_month),
            ("DependentCostPerMonth", self.dependent_cost_per_month),
            ("DependentOver50CostPerMonth", self.dependent_over50_cost_per_month),
            ("HighEarnerLimit", self.high_earner_limit),
            ("HighEarnerPercentage", self.high_earner_percentage),
        ];

        for (field, value) in monetary {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }

        if self.paychecks_per_year == 0 {
            return Err(EngineError::InvalidConfig {
                field: "PaychecksPerYear".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

/// Top-level layout of a benefits configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BenefitsConfigFile {
    /// The benefit cost rules.
    pub benefits_configuration: BenefitsConfiguration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_matches_reference_values() {
        let config = BenefitsConfiguration::default();
        assert_eq!(config.base_cost_per_month, dec("1000"));
        assert_eq!(config.dependent_cost_per_month, dec("600"));
        assert_eq!(config.dependent_over50_cost_per_month, dec("200"));
        assert_eq!(config.high_earner_limit, dec("80000"));
        assert_eq!(config.high_earner_percentage, dec("0.02"));
        assert_eq!(config.paychecks_per_year, 26);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_pascal_case_yaml() {
        let yaml = r#"
BaseCostPerMonth: 1000
DependentCostPerMonth: 600
DependentOver50CostPerMonth: 200
HighEarnerLimit: 80000
HighEarnerPercentage: 0.02
PaychecksPerYear: 24
"#;
        let config: BenefitsConfiguration = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.high_earner_percentage, dec("0.02"));
        assert_eq!(config.paychecks_per_year, 24);
    }

    #[test]
    fn test_missing_option_fails_to_deserialize() {
        let yaml = r#"
BaseCostPerMonth: 1000
DependentCostPerMonth: 600
DependentOver50CostPerMonth: 200
HighEarnerLimit: 80000
HighEarnerPercentage: 0.02
"#;
        let result: Result<BenefitsConfiguration, _> = serde_yaml::from_str(yaml);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("PaychecksPerYear"), "unexpected error: {}", err);
    }

    #[test]
    fn test_negative_cost_is_rejected() {
        let config = BenefitsConfiguration {
            dependent_cost_per_month: dec("-600"),
            ..BenefitsConfiguration::default()
        };

        match config.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "DependentCostPerMonth");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_paychecks_is_rejected() {
        let config = BenefitsConfiguration {
            paychecks_per_year: 0,
            ..BenefitsConfiguration::default()
        };

        match config.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "PaychecksPerYear");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_costs_are_allowed() {
        let config = BenefitsConfiguration {
            base_cost_per_month: Decimal::ZERO,
            high_earner_percentage: Decimal::ZERO,
            ..BenefitsConfiguration::default()
        };
        assert!(config.validate().is_ok());
    }
}
