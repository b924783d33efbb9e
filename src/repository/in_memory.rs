//! In-memory employee repository.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{Dependent, Employee, EmployeeRecord};

use super::EmployeeRepository;
use super::fixture;

/// An [`EmployeeRepository`] holding all records in memory.
///
/// The repository is built in one step from a set of records; every record
/// is validated before any is stored, and nothing can be added afterwards.
/// Share it behind an `Arc`.
///
/// # Example
///
/// ```
/// use benefits_engine::repository::{EmployeeRepository, InMemoryEmployeeRepository};
///
/// let repository = InMemoryEmployeeRepository::with_sample_data()?;
/// assert!(repository.find_employee_by_id(1).is_some());
/// assert!(repository.find_employee_by_id(i32::MIN).is_none());
/// # Ok::<(), benefits_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    employees: BTreeMap<i32, Employee>,
    dependents: BTreeMap<i32, Dependent>,
}

impl InMemoryEmployeeRepository {
    /// Builds a repository from `records`.
    ///
    /// # Errors
    ///
    /// Fails without storing anything if any record is rejected by
    /// [`EmployeeRecord::validate`], or if employee or dependent IDs repeat.
    pub fn from_records<I>(records: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = EmployeeRecord>,
    {
        let mut employees = BTreeMap::new();
        let mut dependents = BTreeMap::new();

        for record in records {
            let id = record.id;
            let employee = Employee::try_from(record).inspect_err(|err| {
                warn!(employee_id = id, error = %err, "Rejected employee record");
            })?;

            if employees.contains_key(&employee.id) {
                return Err(EngineError::DuplicateEmployee { id: employee.id });
            }

            for dependent in employee.dependents() {
                if dependents
                    .insert(dependent.id, dependent.clone())
                    .is_some()
                {
                    return Err(EngineError::DuplicateDependent { id: dependent.id });
                }
            }

            employees.insert(employee.id, employee);
        }

        debug!(
            employees = employees.len(),
            dependents = dependents.len(),
            "Built in-memory employee repository"
        );

        Ok(Self {
            employees,
            dependents,
        })
    }

    /// Builds a repository holding the sample employees.
    pub fn with_sample_data() -> EngineResult<Self> {
        Self::from_records(fixture::sample_employees())
    }

    /// Returns the number of employees stored.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if no employees are stored.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn find_employee_by_id(&self, id: i32) -> Option<Employee> {
        self.employees.get(&id).cloned()
    }

    fn list_employees(&self) -> Vec<Employee> {
        self.employees.values().cloned().collect()
    }

    fn find_dependent_by_id(&self, id: i32) -> Option<Dependent> {
        self.dependents.get(&id).cloned()
    }

    fn list_dependents(&self) -> Vec<Dependent> {
        self.dependents.values().cloned().collect()
    }
}
