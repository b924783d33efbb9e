//! Age eligibility for the over-50 dependent surcharge.

use chrono::{Months, NaiveDate};

/// Age at which a dependent attracts the additional monthly cost.
pub const DEPENDENT_SURCHARGE_AGE_YEARS: u32 = 50;

/// Returns true if someone born on `date_of_birth` has turned 50 on or
/// before `as_of`.
///
/// Years are added on the calendar, so a 29 February birthday reaches 50 on
/// 28 February when the fiftieth year is not a leap year. The check applies
/// the same way to spouses, domestic partners and children.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::is_over_50;
/// use chrono::NaiveDate;
///
/// let born = NaiveDate::from_ymd_opt(1965, 1, 1).unwrap();
/// assert!(is_over_50(born, NaiveDate::from_ymd_opt(2015, 1, 1).unwrap()));
/// assert!(!is_over_50(born, NaiveDate::from_ymd_opt(2014, 12, 31).unwrap()));
/// ```
pub fn is_over_50(date_of_birth: NaiveDate, as_of: NaiveDate) -> bool {
    date_of_birth
        .checked_add_months(Months::new(DEPENDENT_SURCHARGE_AGE_YEARS * 12))
        .is_some_and(|fiftieth_birthday| fiftieth_birthday <= as_of)
}
