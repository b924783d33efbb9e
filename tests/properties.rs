//! Property tests for the paycheck calculation.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use benefits_engine::calculation::{
    calculate_paycheck, calculate_paycheck_with_audit, is_over_50, per_paycheck,
};
use benefits_engine::config::BenefitsConfiguration;
use benefits_engine::models::{Dependent, Employee, Partner, Relationship};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

fn cents() -> impl Strategy<Value = Decimal> {
    (0i64..50_000_000).prop_map(|c| Decimal::new(c, 2))
}

fn birth_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..36_500).prop_map(|days| {
        NaiveDate::from_ymd_opt(1930, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(days))
            .unwrap()
    })
}

fn children_strategy() -> impl Strategy<Value = Vec<Dependent>> {
    prop::collection::vec(birth_date(), 0..6).prop_map(|dates| {
        dates
            .into_iter()
            .enumerate()
            .map(|(i, born)| Dependent {
                id: i as i32 + 100,
                first_name: format!("Child{}", i),
                last_name: "Test".to_string(),
                relationship: Relationship::Child,
                date_of_birth: born,
            })
            .collect()
    })
}

fn partner_strategy() -> impl Strategy<Value = Partner> {
    (0u8..3, birth_date()).prop_map(|(kind, born)| {
        let dependent = |relationship| Dependent {
            id: 1,
            first_name: "Partner".to_string(),
            last_name: "Test".to_string(),
            relationship,
            date_of_birth: born,
        };
        match kind {
            0 => Partner::None,
            1 => Partner::Spouse(dependent(Relationship::Spouse)),
            _ => Partner::DomesticPartner(dependent(Relationship::DomesticPartner)),
        }
    })
}

fn employee(salary: Decimal, partner: Partner, children: Vec<Dependent>) -> Employee {
    Employee {
        id: 1,
        first_name: "Test".to_string(),
        last_name: "Employee".to_string(),
        salary,
        date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
        partner,
        children,
    }
}

proptest! {
    #[test]
    fn no_dependents_below_limit_pays_only_base_cost(
        salary in (0i64..=8_000_000).prop_map(|c| Decimal::new(c, 2)),
    ) {
        let config = BenefitsConfiguration::default();
        let paycheck = calculate_paycheck(&employee(salary, Partner::None, vec![]), &config, as_of());
        let base_annual = config.base_cost_per_month * Decimal::from(12);

        prop_assert_eq!(paycheck.deductions, per_paycheck(base_annual, config.paychecks_per_year));
        prop_assert_eq!(
            paycheck.net_salary,
            per_paycheck(salary - base_annual, config.paychecks_per_year)
        );
    }

    #[test]
    fn surcharge_applies_only_above_limit(salary in cents()) {
        let config = BenefitsConfiguration::default();
        let calc = calculate_paycheck_with_audit(
            &employee(salary, Partner::None, vec![]),
            &config,
            as_of(),
        );

        if salary > config.high_earner_limit {
            prop_assert_eq!(calc.annual_costs.high_earner, salary * config.high_earner_percentage);
        } else {
            prop_assert_eq!(calc.annual_costs.high_earner, Decimal::ZERO);
        }
    }

    #[test]
    fn net_is_base_minus_deductions_within_a_cent(
        salary in cents(),
        partner in partner_strategy(),
        children in children_strategy(),
    ) {
        let paycheck = calculate_paycheck(
            &employee(salary, partner, children),
            &BenefitsConfiguration::default(),
            as_of(),
        );
        let difference = (paycheck.base_salary - paycheck.deductions - paycheck.net_salary).abs();

        prop_assert!(difference <= Decimal::new(1, 2), "difference {}", difference);
    }

    #[test]
    fn child_order_does_not_change_result(
        salary in cents(),
        partner in partner_strategy(),
        children in children_strategy(),
    ) {
        let config = BenefitsConfiguration::default();
        let mut reversed = children.clone();
        reversed.reverse();

        let forward = calculate_paycheck(&employee(salary, partner.clone(), children), &config, as_of());
        let backward = calculate_paycheck(&employee(salary, partner, reversed), &config, as_of());

        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn each_child_adds_its_own_cost(children in children_strategy()) {
        let config = BenefitsConfiguration::default();
        let calc = calculate_paycheck_with_audit(
            &employee(Decimal::ZERO, Partner::None, children.clone()),
            &config,
            as_of(),
        );

        let expected: Decimal = children
            .iter()
            .map(|child| {
                let mut monthly = config.dependent_cost_per_month;
                if is_over_50(child.date_of_birth, as_of()) {
                    monthly += config.dependent_over50_cost_per_month;
                }
                monthly * Decimal::from(12)
            })
            .sum();

        prop_assert_eq!(calc.annual_costs.children, expected);
    }

    #[test]
    fn at_most_one_partner_is_charged(partner in partner_strategy()) {
        let config = BenefitsConfiguration::default();
        let calc = calculate_paycheck_with_audit(
            &employee(Decimal::ZERO, partner.clone(), vec![]),
            &config,
            as_of(),
        );

        let max_single = (config.dependent_cost_per_month + config.dependent_over50_cost_per_month)
            * Decimal::from(12);
        match partner {
            Partner::None => prop_assert_eq!(calc.annual_costs.partner, Decimal::ZERO),
            _ => prop_assert!(calc.annual_costs.partner <= max_single),
        }
    }

    #[test]
    fn over_50_boundary_is_inclusive(born in birth_date()) {
        let fiftieth = born.checked_add_months(chrono::Months::new(600)).unwrap();
        prop_assert!(is_over_50(born, fiftieth));
        prop_assert!(!is_over_50(born, fiftieth.pred_opt().unwrap()));
    }
}
