//! Dependent model and related types.
//!
//! A dependent is a person (spouse, domestic partner, or child) associated
//! with an employee for benefits purposes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::is_over_50;

/// How a dependent is related to the employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    /// Married partner of the employee.
    Spouse,
    /// Child of the employee.
    Child,
    /// Registered domestic partner of the employee.
    DomesticPartner,
}

/// A person covered by an employee's benefits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependent {
    /// Unique identifier for the dependent.
    pub id: i32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// How this dependent relates to the employee.
    pub relationship: Relationship,
    /// The dependent's date of birth.
    pub date_of_birth: NaiveDate,
}

impl Dependent {
    /// Returns true if the dependent has turned 50 on or before `as_of`.
    ///
    /// # Examples
    ///
    /// ```
    /// use benefits_engine::models::{Dependent, Relationship};
    /// use chrono::NaiveDate;
    ///
    /// let spouse = Dependent {
    ///     id: 5,
    ///     first_name: "Bob".to_string(),
    ///     last_name: "Smith".to_string(),
    ///     relationship: Relationship::Spouse,
    ///     date_of_birth: NaiveDate::from_ymd_opt(1965, 1, 1).unwrap(),
    /// };
    /// assert!(spouse.is_over_50(NaiveDate::from_ymd_opt(2015, 1, 1).unwrap()));
    /// assert!(!spouse.is_over_50(NaiveDate::from_ymd_opt(2014, 12, 31).unwrap()));
    /// ```
    pub fn is_over_50(&self, as_of: NaiveDate) -> bool {
        is_over_50(self.date_of_birth, as_of)
    }
}
