//! Paycheck calculation.
//!
//! This module combines the annual benefit cost components into the
//! per-pay-period [`Paycheck`] for an employee.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::BenefitsConfiguration;
use crate::models::{
    AuditStep, AuditTrace, BenefitCostBreakdown, Employee, Paycheck, PaycheckCalculation,
};

use super::benefit_costs::{
    calculate_base_cost, calculate_children_cost, calculate_high_earner_surcharge,
    calculate_partner_cost,
};

/// Decimal places paycheck amounts are rounded to.
pub const PAYCHECK_DECIMAL_PLACES: u32 = 2;

/// Spreads an annual amount over the configured pay periods and rounds it to
/// cents.
///
/// Rounding is banker's rounding (midpoint to even), as performed by
/// [`Decimal::round_dp`].
pub fn per_paycheck(annual_amount: Decimal, paychecks_per_year: u32) -> Decimal {
    (annual_amount / Decimal::from(paychecks_per_year)).round_dp(PAYCHECK_DECIMAL_PLACES)
}

/// Calculates an employee's paycheck with its annual cost breakdown and
/// audit trace.
///
/// The salary is treated as an annual figure. Annual salary, annual benefit
/// cost and annual net salary are each divided by `paychecks_per_year` and
/// rounded independently, so `base_salary - deductions` can differ from
/// `net_salary` by one cent.
///
/// The calculation has no failure path and never mutates its inputs; the
/// configuration is expected to have passed
/// [`BenefitsConfiguration::validate`].
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_paycheck_with_audit;
/// use benefits_engine::config::BenefitsConfiguration;
/// use benefits_engine::models::{Employee, Partner};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: 4,
///     first_name: "Kobe".to_string(),
///     last_name: "Bryant".to_string(),
///     salary: Decimal::new(123000, 0),
///     date_of_birth: NaiveDate::from_ymd_opt(1983, 2, 17).unwrap(),
///     partner: Partner::None,
///     children: vec![],
/// };
/// let as_of = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
///
/// let calc = calculate_paycheck_with_audit(&employee, &BenefitsConfiguration::default(), as_of);
/// assert_eq!(calc.annual_costs.total(), Decimal::new(14460, 0));
/// assert_eq!(calc.paycheck.deductions, Decimal::new(55615, 2));
/// assert_eq!(calc.audit_trace.steps.len(), 5);
/// ```
pub fn calculate_paycheck_with_audit(
    employee: &Employee,
    config: &BenefitsConfiguration,
    as_of: NaiveDate,
) -> PaycheckCalculation {
    let base = calculate_base_cost(config, 1);
    let high_earner = calculate_high_earner_surcharge(employee, config, 2);
    let children = calculate_children_cost(employee, config, as_of, 3);
    let partner = calculate_partner_cost(employee, config, as_of, 4);

    let annual_costs = BenefitCostBreakdown {
        base: base.annual_cost,
        high_earner: high_earner.annual_cost,
        children: children.annual_cost,
        partner: partner.annual_cost,
    };

    let annual_salary = employee.salary;
    let annual_benefits_cost = annual_costs.total();
    let annual_net_salary = annual_salary - annual_benefits_cost;

    let paycheck = Paycheck {
        base_salary: per_paycheck(annual_salary, config.paychecks_per_year),
        deductions: per_paycheck(annual_benefits_cost, config.paychecks_per_year),
        net_salary: per_paycheck(annual_net_salary, config.paychecks_per_year),
    };

    let summary = AuditStep {
        step_number: 5,
        rule_id: "paycheck_split".to_string(),
        rule_name: "Paycheck Split".to_string(),
        input: serde_json::json!({
            "annual_salary": annual_salary.to_string(),
            "annual_benefits_cost": annual_benefits_cost.to_string(),
            "annual_net_salary": annual_net_salary.to_string(),
            "paychecks_per_year": config.paychecks_per_year
        }),
        output: serde_json::json!({
            "base_salary": paycheck.base_salary.to_string(),
            "deductions": paycheck.deductions.to_string(),
            "net_salary": paycheck.net_salary.to_string()
        }),
        reasoning: format!(
            "Annual figures divided by {} paychecks and rounded to cents",
            config.paychecks_per_year
        ),
    };

    PaycheckCalculation {
        employee_id: employee.id,
        paycheck,
        annual_costs,
        audit_trace: AuditTrace {
            steps: vec![
                base.audit_step,
                high_earner.audit_step,
                children.audit_step,
                partner.audit_step,
                summary,
            ],
        },
    }
}

/// Calculates an employee's per-pay-period paycheck.
///
/// See [`calculate_paycheck_with_audit`] for the rules applied.
pub fn calculate_paycheck(
    employee: &Employee,
    config: &BenefitsConfiguration,
    as_of: NaiveDate,
) -> Paycheck {
    calculate_paycheck_with_audit(employee, config, as_of).paycheck
}
