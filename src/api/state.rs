//! Application state for the Benefits Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::{Clock, SystemClock};
use crate::config::BenefitsConfiguration;
use crate::repository::EmployeeRepository;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// employee repository, the benefit cost rules, and the clock used to date
/// age checks.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn EmployeeRepository>,
    config: Arc<BenefitsConfiguration>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates application state that evaluates ages against the system clock.
    pub fn new<R>(repository: R, config: BenefitsConfiguration) -> Self
    where
        R: EmployeeRepository + 'static,
    {
        Self::with_clock(repository, config, SystemClock)
    }

    /// Creates application state with an explicit clock.
    pub fn with_clock<R, C>(repository: R, config: BenefitsConfiguration, clock: C) -> Self
    where
        R: EmployeeRepository + 'static,
        C: Clock + 'static,
    {
        Self {
            repository: Arc::new(repository),
            config: Arc::new(config),
            clock: Arc::new(clock),
        }
    }

    /// Returns the employee repository.
    pub fn repository(&self) -> &dyn EmployeeRepository {
        self.repository.as_ref()
    }

    /// Returns the benefit cost rules.
    pub fn config(&self) -> &BenefitsConfiguration {
        &self.config
    }

    /// Returns the clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
