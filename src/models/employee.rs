//! Employee model and related types.
//!
//! This module defines the validated [`Employee`] used by the calculation
//! engine and the flat [`EmployeeRecord`] shape in which employees enter
//! and leave the system.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{Dependent, Relationship};

/// The partner relationship declared on an employee record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipStatus {
    /// No spouse or domestic partner.
    #[default]
    None,
    /// The employee has a spouse.
    Spouse,
    /// The employee has a domestic partner.
    DomesticPartner,
}

/// The employee's partner, if any.
///
/// An employee can hold at most one partner relationship; the enum makes a
/// spouse and a domestic partner at the same time unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Partner {
    /// No partner.
    #[default]
    None,
    /// A spouse.
    Spouse(Dependent),
    /// A domestic partner.
    DomesticPartner(Dependent),
}

impl Partner {
    /// Returns the partner as a dependent, if there is one.
    pub fn dependent(&self) -> Option<&Dependent> {
        match self {
            Partner::None => None,
            Partner::Spouse(d) | Partner::DomesticPartner(d) => Some(d),
        }
    }

    /// Returns the relationship status this partner corresponds to.
    pub fn status(&self) -> RelationshipStatus {
        match self {
            Partner::None => RelationshipStatus::None,
            Partner::Spouse(_) => RelationshipStatus::Spouse,
            Partner::DomesticPartner(_) => RelationshipStatus::DomesticPartner,
        }
    }
}

/// A validated employee, ready for paycheck calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: i32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Gross salary per year.
    ///
    /// The value is annual. Field comments in the source data suggested a
    /// monthly figure; the data owner confirmed the annual reading.
    pub salary: Decimal,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// Spouse or domestic partner.
    pub partner: Partner,
    /// Children covered by the employee's benefits, in record order.
    pub children: Vec<Dependent>,
}

impl Employee {
    /// Returns the relationship status implied by the partner.
    pub fn relationship_status(&self) -> RelationshipStatus {
        self.partner.status()
    }

    /// Iterates over every dependent: the partner first, then the children.
    pub fn dependents(&self) -> impl Iterator<Item = &Dependent> {
        self.partner.dependent().into_iter().chain(self.children.iter())
    }
}

/// An employee in the flat shape produced by fixtures and datastores.
///
/// This is also the JSON view of an employee served by the HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// Unique identifier for the employee.
    pub id: i32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Gross salary per year.
    pub salary: Decimal,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// Which partner slot, if any, is in use.
    #[serde(default)]
    pub relationship_status: RelationshipStatus,
    /// The spouse, when `relationship_status` is `Spouse`.
    #[serde(default)]
    pub spouse: Option<Dependent>,
    /// The domestic partner, when `relationship_status` is `DomesticPartner`.
    #[serde(default)]
    pub domestic_partner: Option<Dependent>,
    /// Children covered by the employee's benefits.
    #[serde(default)]
    pub children: Vec<Dependent>,
}

impl EmployeeRecord {
    /// Checks the record before it is admitted into a repository.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConflictingRelationship`] if the record claims both a
    ///   spouse and a domestic partner
    /// - [`EngineError::InvalidEmployee`] if the relationship status does not
    ///   match the partner slots, a dependent sits in the wrong slot, or the
    ///   salary is negative
    ///
    /// # Examples
    ///
    /// ```
    /// use benefits_engine::models::{EmployeeRecord, RelationshipStatus};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let record = EmployeeRecord {
    ///     id: 1,
    ///     first_name: "LeBron".to_string(),
    ///     last_name: "James".to_string(),
    ///     salary: Decimal::new(7542099, 2),
    ///     date_of_birth: NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
    ///     relationship_status: RelationshipStatus::None,
    ///     spouse: None,
    ///     domestic_partner: None,
    ///     children: vec![],
    /// };
    /// assert!(record.validate().is_ok());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        let conflicting = match self.relationship_status {
            RelationshipStatus::Spouse => self.domestic_partner.is_some(),
            RelationshipStatus::DomesticPartner => self.spouse.is_some(),
            RelationshipStatus::None => self.spouse.is_some() && self.domestic_partner.is_some(),
        };
        if conflicting {
            return Err(EngineError::ConflictingRelationship {
                employee_id: self.id,
            });
        }

        match self.relationship_status {
            RelationshipStatus::Spouse if self.spouse.is_none() => {
                return Err(self.invalid(
                    "relationship_status",
                    "status is Spouse but no spouse is recorded",
                ));
            }
            RelationshipStatus::DomesticPartner if self.domestic_partner.is_none() => {
                return Err(self.invalid(
                    "relationship_status",
                    "status is DomesticPartner but no domestic partner is recorded",
                ));
            }
            RelationshipStatus::None
                if self.spouse.is_some() || self.domestic_partner.is_some() =>
            {
                return Err(self.invalid(
                    "relationship_status",
                    "status is None but a partner is recorded",
                ));
            }
            _ => {}
        }

        if let Some(spouse) = &self.spouse {
            self.check_slot("spouse", spouse, Relationship::Spouse)?;
        }
        if let Some(partner) = &self.domestic_partner {
            self.check_slot("domestic_partner", partner, Relationship::DomesticPartner)?;
        }
        for child in &self.children {
            self.check_slot("children", child, Relationship::Child)?;
        }

        if self.salary < Decimal::ZERO {
            return Err(self.invalid("salary", "cannot be negative"));
        }

        Ok(())
    }

    fn check_slot(
        &self,
        field: &str,
        dependent: &Dependent,
        expected: Relationship,
    ) -> EngineResult<()> {
        if dependent.relationship == expected {
            return Ok(());
        }
        Err(self.invalid(
            field,
            &format!(
                "dependent {} has relationship {:?}, expected {:?}",
                dependent.id, dependent.relationship, expected
            ),
        ))
    }

    fn invalid(&self, field: &str, message: &str) -> EngineError {
        EngineError::InvalidEmployee {
            employee_id: self.id,
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = EngineError;

    fn try_from(record: EmployeeRecord) -> EngineResult<Self> {
        record.validate()?;

        let partner = match (record.spouse, record.domestic_partner) {
            (Some(spouse), _) => Partner::Spouse(spouse),
            (None, Some(partner)) => Partner::DomesticPartner(partner),
            (None, None) => Partner::None,
        };

        Ok(Employee {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            salary: record.salary,
            date_of_birth: record.date_of_birth,
            partner,
            children: record.children,
        })
    }
}

impl From<&Employee> for EmployeeRecord {
    fn from(employee: &Employee) -> Self {
        let (spouse, domestic_partner) = match &employee.partner {
            Partner::None => (None, None),
            Partner::Spouse(d) => (Some(d.clone()), None),
            Partner::DomesticPartner(d) => (None, Some(d.clone())),
        };

        EmployeeRecord {
            id: employee.id,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            salary: employee.salary,
            date_of_birth: employee.date_of_birth,
            relationship_status: employee.relationship_status(),
            spouse,
            domestic_partner,
            children: employee.children.clone(),
        }
    }
}
