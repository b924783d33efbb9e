//! HTTP request handlers for the Benefits Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::calculate_paycheck_with_audit;
use crate::models::{Dependent, EmployeeRecord, Paycheck};

use super::response::{ApiErrorResponse, ApiResponse, DEPENDENT_NOT_FOUND, EMPLOYEE_NOT_FOUND};
use super::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/employees", get(list_employees_handler))
        .route("/api/v1/employees/:id", get(get_employee_handler))
        .route("/api/v1/employees/:id/paycheck", get(get_paycheck_handler))
        .route("/api/v1/dependents", get(list_dependents_handler))
        .route("/api/v1/dependents/:id", get(get_dependent_handler))
        .with_state(state)
}

/// Parses an ID path segment.
fn parse_id(raw: &str) -> Result<i32, ApiErrorResponse> {
    raw.trim()
        .parse()
        .map_err(|_| ApiErrorResponse::bad_request(format!("Invalid id: {}", raw)))
}

/// Handler for GET /api/v1/employees.
async fn list_employees_handler(State(state): State<AppState>) -> ApiResult<Vec<EmployeeRecord>> {
    let employees: Vec<EmployeeRecord> = state
        .repository()
        .list_employees()
        .iter()
        .map(EmployeeRecord::from)
        .collect();

    debug!(count = employees.len(), "Listed employees");
    Ok(Json(ApiResponse::ok(employees)))
}

/// Handler for GET /api/v1/employees/{id}.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<EmployeeRecord> {
    let id = parse_id(&raw_id)?;

    match state.repository().find_employee_by_id(id) {
        Some(employee) => Ok(Json(ApiResponse::ok(EmployeeRecord::from(&employee)))),
        None => {
            debug!(employee_id = id, "Employee not found");
            Err(ApiErrorResponse::not_found(EMPLOYEE_NOT_FOUND))
        }
    }
}

/// Handler for GET /api/v1/employees/{id}/paycheck.
///
/// Looks up the employee and calculates their paycheck as of today's date
/// according to the application clock.
async fn get_paycheck_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Paycheck> {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing paycheck request");

    let id = parse_id(&raw_id).inspect_err(|_| {
        warn!(correlation_id = %correlation_id, raw_id = %raw_id, "Invalid employee id");
    })?;

    let Some(employee) = state.repository().find_employee_by_id(id) else {
        warn!(
            correlation_id = %correlation_id,
            employee_id = id,
            "Employee not found"
        );
        return Err(ApiErrorResponse::not_found(EMPLOYEE_NOT_FOUND));
    };

    let as_of = state.clock().today();
    let start_time = Instant::now();
    let calculation = calculate_paycheck_with_audit(&employee, state.config(), as_of);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        employee_id = employee.id,
        as_of = %as_of,
        annual_benefits_cost = %calculation.annual_costs.total(),
        deductions = %calculation.paycheck.deductions,
        net_salary = %calculation.paycheck.net_salary,
        duration_us = duration.as_micros(),
        "Paycheck calculated successfully"
    );
    for step in &calculation.audit_trace.steps {
        debug!(
            correlation_id = %correlation_id,
            step = step.step_number,
            rule_id = %step.rule_id,
            "{}",
            step.reasoning
        );
    }

    Ok(Json(ApiResponse::ok(calculation.paycheck)))
}

/// Handler for GET /api/v1/dependents.
async fn list_dependents_handler(State(state): State<AppState>) -> ApiResult<Vec<Dependent>> {
    let dependents = state.repository().list_dependents();
    debug!(count = dependents.len(), "Listed dependents");
    Ok(Json(ApiResponse::ok(dependents)))
}

/// Handler for GET /api/v1/dependents/{id}.
async fn get_dependent_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Dependent> {
    let id = parse_id(&raw_id)?;

    state
        .repository()
        .find_dependent_by_id(id)
        .map(|dependent| Json(ApiResponse::ok(dependent)))
        .ok_or_else(|| ApiErrorResponse::not_found(DEPENDENT_NOT_FOUND))
}
