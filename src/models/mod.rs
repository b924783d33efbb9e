//! Core data models for the Benefits Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod dependent;
mod employee;
mod paycheck;

pub use dependent::{Dependent, Relationship};
pub use employee::{Employee, EmployeeRecord, Partner, RelationshipStatus};
pub use paycheck::{
    AuditStep, AuditTrace, BenefitCostBreakdown, Paycheck, PaycheckCalculation,
};
