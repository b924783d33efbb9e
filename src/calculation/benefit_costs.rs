//! Annual benefit cost components.
//!
//! Each function in this module computes one annual cost component for an
//! employee and records an audit step describing how it was reached. The
//! components are summed by [`calculate_paycheck_with_audit`] before being
//! spread across pay periods.
//!
//! [`calculate_paycheck_with_audit`]: super::calculate_paycheck_with_audit

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::BenefitsConfiguration;
use crate::models::{AuditStep, Dependent, Employee, Partner};

/// Months in a year, used to annualise monthly costs.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The result of calculating one annual cost component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenefitCostResult {
    /// The annual cost of this component.
    pub annual_cost: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Annual cost of covering one dependent, and whether the over-50
/// surcharge was included.
fn dependent_annual_cost(
    dependent: &Dependent,
    config: &BenefitsConfiguration,
    as_of: NaiveDate,
) -> (Decimal, bool) {
    let over_50 = dependent.is_over_50(as_of);
    let mut monthly = config.dependent_cost_per_month;
    if over_50 {
        monthly += config.dependent_over50_cost_per_month;
    }
    (monthly * MONTHS_PER_YEAR, over_50)
}

/// Calculates the flat annual base cost charged to every employee.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_base_cost;
/// use benefits_engine::config::BenefitsConfiguration;
/// use rust_decimal::Decimal;
///
/// let result = calculate_base_cost(&BenefitsConfiguration::default(), 1);
/// assert_eq!(result.annual_cost, Decimal::new(12000, 0));
/// ```
pub fn calculate_base_cost(config: &BenefitsConfiguration, step_number: u32) -> BenefitCostResult {
    let annual_cost = config.base_cost_per_month * MONTHS_PER_YEAR;

    BenefitCostResult {
        annual_cost,
        audit_step: AuditStep {
            step_number,
            rule_id: "base_cost".to_string(),
            rule_name: "Employee Base Cost".to_string(),
            input: serde_json::json!({
                "base_cost_per_month": config.base_cost_per_month.to_string()
            }),
            output: serde_json::json!({
                "annual_cost": annual_cost.to_string()
            }),
            reasoning: format!(
                "Base cost ${}/month x 12 = ${}",
                config.base_cost_per_month, annual_cost
            ),
        },
    }
}

/// Calculates the high-earner surcharge.
///
/// The surcharge is `salary * high_earner_percentage` when the annual salary
/// is strictly greater than `high_earner_limit`, and zero otherwise. A salary
/// equal to the limit does not attract the surcharge.
pub fn calculate_high_earner_surcharge(
    employee: &Employee,
    config: &BenefitsConfiguration,
    step_number: u32,
) -> BenefitCostResult {
    let applies = employee.salary > config.high_earner_limit;
    let annual_cost = if applies {
        employee.salary * config.high_earner_percentage
    } else {
        Decimal::ZERO
    };

    let reasoning = if applies {
        format!(
            "Salary ${} exceeds limit ${}: surcharge {} x ${} = ${}",
            employee.salary,
            config.high_earner_limit,
            config.high_earner_percentage,
            employee.salary,
            annual_cost
        )
    } else {
        format!(
            "Salary ${} does not exceed limit ${}: no surcharge",
            employee.salary, config.high_earner_limit
        )
    };

    BenefitCostResult {
        annual_cost,
        audit_step: AuditStep {
            step_number,
            rule_id: "high_earner_surcharge".to_string(),
            rule_name: "High Earner Surcharge".to_string(),
            input: serde_json::json!({
                "salary": employee.salary.to_string(),
                "high_earner_limit": config.high_earner_limit.to_string(),
                "high_earner_percentage": config.high_earner_percentage.to_string()
            }),
            output: serde_json::json!({
                "applies": applies,
                "annual_cost": annual_cost.to_string()
            }),
            reasoning,
        },
    }
}

/// Calculates the combined annual cost of all the employee's children.
///
/// Every child costs `dependent_cost_per_month * 12`, plus
/// `dependent_over50_cost_per_month * 12` if the child has turned 50 by
/// `as_of`. The total does not depend on the order of the children.
pub fn calculate_children_cost(
    employee: &Employee,
    config: &BenefitsConfiguration,
    as_of: NaiveDate,
    step_number: u32,
) -> BenefitCostResult {
    let mut annual_cost = Decimal::ZERO;
    let mut over_50_ids = Vec::new();

    for child in &employee.children {
        let (cost, over_50) = dependent_annual_cost(child, config, as_of);
        annual_cost += cost;
        if over_50 {
            over_50_ids.push(child.id);
        }
    }

    let child_ids: Vec<i32> = employee.children.iter().map(|c| c.id).collect();

    BenefitCostResult {
        annual_cost,
        audit_step: AuditStep {
            step_number,
            rule_id: "children_cost".to_string(),
            rule_name: "Children Cost".to_string(),
            input: serde_json::json!({
                "child_ids": child_ids,
                "dependent_cost_per_month": config.dependent_cost_per_month.to_string(),
                "dependent_over50_cost_per_month": config.dependent_over50_cost_per_month.to_string(),
                "as_of": as_of.to_string()
            }),
            output: serde_json::json!({
                "over_50_child_ids": over_50_ids,
                "annual_cost": annual_cost.to_string()
            }),
            reasoning: format!(
                "{} child(ren), {} aged 50 or over: ${}",
                employee.children.len(),
                over_50_ids.len(),
                annual_cost
            ),
        },
    }
}

/// Calculates the annual cost of the employee's spouse or domestic partner.
///
/// Only the partner held in [`Employee::partner`] is charged, so at most one
/// partner cost is ever added.
pub fn calculate_partner_cost(
    employee: &Employee,
    config: &BenefitsConfiguration,
    as_of: NaiveDate,
    step_number: u32,
) -> BenefitCostResult {
    let (kind, cost) = match &employee.partner {
        Partner::None => ("none", None),
        Partner::Spouse(d) => ("spouse", Some((d, dependent_annual_cost(d, config, as_of)))),
        Partner::DomesticPartner(d) => (
            "domestic_partner",
            Some((d, dependent_annual_cost(d, config, as_of))),
        ),
    };

    let (annual_cost, output, reasoning) = match cost {
        None => (
            Decimal::ZERO,
            serde_json::json!({ "annual_cost": "0" }),
            "No spouse or domestic partner".to_string(),
        ),
        Some((partner, (annual_cost, over_50))) => (
            annual_cost,
            serde_json::json!({
                "partner_id": partner.id,
                "over_50": over_50,
                "annual_cost": annual_cost.to_string()
            }),
            format!(
                "Partner {} ({}){}: ${}",
                partner.id,
                kind,
                if over_50 { " aged 50 or over" } else { "" },
                annual_cost
            ),
        ),
    };

    BenefitCostResult {
        annual_cost,
        audit_step: AuditStep {
            step_number,
            rule_id: "partner_cost".to_string(),
            rule_name: "Partner Cost".to_string(),
            input: serde_json::json!({
                "relationship_status": kind,
                "dependent_cost_per_month": config.dependent_cost_per_month.to_string(),
                "dependent_over50_cost_per_month": config.dependent_over50_cost_per_month.to_string(),
                "as_of": as_of.to_string()
            }),
            output,
            reasoning,
        },
    }
}
