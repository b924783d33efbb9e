//! HTTP API module for the Benefits Engine.
//!
//! This module provides the REST API endpoints for listing employees and
//! dependents and for calculating paychecks.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiErrorResponse, ApiResponse, DEPENDENT_NOT_FOUND, EMPLOYEE_NOT_FOUND};
pub use state::AppState;
