//! Sample employee records.
//!
//! These records stand in for a datastore until one exists.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Dependent, EmployeeRecord, Relationship, RelationshipStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Literal calendar dates below are all valid.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn dependent(
    id: i32,
    first_name: &str,
    last_name: &str,
    relationship: Relationship,
    date_of_birth: NaiveDate,
) -> Dependent {
    Dependent {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        relationship,
        date_of_birth,
    }
}

fn employee(
    id: i32,
    first_name: &str,
    last_name: &str,
    salary: Decimal,
    date_of_birth: NaiveDate,
) -> EmployeeRecord {
    EmployeeRecord {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        salary,
        date_of_birth,
        relationship_status: RelationshipStatus::None,
        spouse: None,
        domestic_partner: None,
        children: Vec::new(),
    }
}

/// Returns the sample employees, ordered by ID.
pub fn sample_employees() -> Vec<EmployeeRecord> {
    let lebron = employee(1, "LeBron", "James", Decimal::new(7542099, 2), date(1984, 12, 30));

    let ja = EmployeeRecord {
        relationship_status: RelationshipStatus::Spouse,
        spouse: Some(dependent(1, "Spouse", "Morant", Relationship::Spouse, date(1998, 3, 3))),
        children: vec![
            dependent(2, "Child1", "Morant", Relationship::Child, date(2020, 6, 23)),
            dependent(3, "Child2", "Morant", Relationship::Child, date(2021, 5, 18)),
        ],
        ..employee(2, "Ja", "Morant", Decimal::new(9236522, 2), date(1999, 8, 10))
    };

    let michael = EmployeeRecord {
        relationship_status: RelationshipStatus::DomesticPartner,
        domestic_partner: Some(dependent(
            4,
            "DP",
            "Jordan",
            Relationship::DomesticPartner,
            date(1974, 1, 2),
        )),
        ..employee(3, "Michael", "Jordan", Decimal::new(14321112, 2), date(1963, 2, 17))
    };

    let kobe = employee(4, "Kobe", "Bryant", Decimal::new(123000, 0), date(1983, 2, 17));

    let alice = EmployeeRecord {
        relationship_status: RelationshipStatus::Spouse,
        spouse: Some(dependent(5, "Bob", "Smith", Relationship::Spouse, date(1965, 1, 1))),
        ..employee(5, "Alice", "Smith", Decimal::new(70000, 0), date(1970, 1, 1))
    };

    let kevin = EmployeeRecord {
        relationship_status: RelationshipStatus::Spouse,
        spouse: Some(dependent(6, "Spouse", "Durant", Relationship::Spouse, date(1998, 3, 3))),
        children: vec![
            dependent(7, "Child1", "Durant", Relationship::Child, date(2020, 6, 23)),
            dependent(8, "Child2", "Durant", Relationship::Child, date(2021, 5, 18)),
        ],
        ..employee(6, "Kevin", "Durant", Decimal::new(7236522, 2), date(1999, 8, 10))
    };

    vec![lebron, ja, michael, kobe, alice, kevin]
}
