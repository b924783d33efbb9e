//! Employee data access for the Benefits Engine.
//!
//! The HTTP layer depends only on the [`EmployeeRepository`] trait. The
//! current backing store is [`InMemoryEmployeeRepository`], seeded from the
//! sample records in [`fixture`].

pub mod fixture;
mod in_memory;

pub use in_memory::InMemoryEmployeeRepository;

use crate::models::{Dependent, Employee};

/// Read access to employees and their dependents.
///
/// Implementations must only ever hand out fully validated records and must
/// be safe to share between request handlers.
pub trait EmployeeRepository: Send + Sync {
    /// Looks up an employee by ID. Returns `None` if the ID is unknown.
    fn find_employee_by_id(&self, id: i32) -> Option<Employee>;

    /// Returns every employee, ordered by ID.
    fn list_employees(&self) -> Vec<Employee>;

    /// Looks up a dependent of any employee by ID.
    fn find_dependent_by_id(&self, id: i32) -> Option<Dependent>;

    /// Returns every dependent, ordered by ID.
    fn list_dependents(&self) -> Vec<Dependent>;
}
