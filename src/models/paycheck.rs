//! Paycheck calculation result models.
//!
//! This module contains the [`Paycheck`] returned to callers and the richer
//! [`PaycheckCalculation`] that also carries the annual cost breakdown and
//! the audit trace explaining how the figures were reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-pay-period figures for one employee, each rounded to cents.
///
/// # Example
///
/// ```
/// use benefits_engine::models::Paycheck;
/// use rust_decimal::Decimal;
///
/// let paycheck = Paycheck {
///     base_salary: Decimal::new(290081, 2),
///     deductions: Decimal::new(46154, 2),
///     net_salary: Decimal::new(243927, 2),
/// };
/// assert_eq!(paycheck.base_salary - paycheck.deductions, paycheck.net_salary);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paycheck {
    /// Gross pay for the period.
    pub base_salary: Decimal,
    /// Benefit costs deducted for the period.
    pub deductions: Decimal,
    /// Pay after deductions for the period.
    pub net_salary: Decimal,
}

/// Annual benefit costs, split by rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitCostBreakdown {
    /// Flat per-employee cost.
    pub base: Decimal,
    /// Surcharge for salaries above the high-earner limit.
    pub high_earner: Decimal,
    /// Cost of all children, including over-50 surcharges.
    pub children: Decimal,
    /// Cost of the spouse or domestic partner, including any over-50 surcharge.
    pub partner: Decimal,
}

impl BenefitCostBreakdown {
    /// Returns the total annual benefit cost.
    pub fn total(&self) -> Decimal {
        self.base + self.high_earner + self.children + self.partner
    }
}

/// A single rule application recorded during a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The ordered audit steps of one calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
}

/// The complete result of a paycheck calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckCalculation {
    /// The ID of the employee the paycheck was calculated for.
    pub employee_id: i32,
    /// The rounded per-period figures.
    pub paycheck: Paycheck,
    /// The unrounded annual benefit costs.
    pub annual_costs: BenefitCostBreakdown,
    /// Every rule applied, in order.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_breakdown_total_sums_components() {
        let breakdown = BenefitCostBreakdown {
            base: dec("12000"),
            high_earner: dec("1847.3044"),
            children: dec("14400"),
            partner: dec("7200"),
        };
        assert_eq!(breakdown.total(), dec("35447.3044"));
    }

    #[test]
    fn test_default_breakdown_is_zero() {
        assert_eq!(BenefitCostBreakdown::default().total(), Decimal::ZERO);
    }

    #[test]
    fn test_paycheck_serializes_camel_case() {
        let paycheck = Paycheck {
            base_salary: dec("4730.77"),
            deductions: dec("556.15"),
            net_salary: dec("4174.62"),
        };
        let json = serde_json::to_value(paycheck).unwrap();

        assert_eq!(json["baseSalary"], "4730.77");
        assert_eq!(json["deductions"], "556.15");
        assert_eq!(json["netSalary"], "4174.62");
    }
}
