//! Calculation logic for the Benefits Engine.
//!
//! This module contains the age eligibility check, the annual benefit cost
//! components (base cost, high-earner surcharge, children, partner), and
//! the paycheck calculation that spreads annual figures over pay periods.

mod age;
mod benefit_costs;
mod clock;
mod paycheck;

pub use age::{DEPENDENT_SURCHARGE_AGE_YEARS, is_over_50};
pub use benefit_costs::{
    BenefitCostResult, MONTHS_PER_YEAR, calculate_base_cost, calculate_children_cost,
    calculate_high_earner_surcharge, calculate_partner_cost,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use paycheck::{
    PAYCHECK_DECIMAL_PLACES, calculate_paycheck, calculate_paycheck_with_audit, per_paycheck,
};
